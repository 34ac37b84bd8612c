//! # Merge Common
//!
//! Shared types and error handling for the merge-structure workspace.
//!
//! This crate provides the error type every file operation reports, the
//! generic document representation, and test helpers used across the
//! other crates in the workspace.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod types;

#[cfg(any(test, feature = "testing"))]
pub mod test_utils;

pub use error::*;
pub use types::*;
