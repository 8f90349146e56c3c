//! # sift-core
//!
//! Types shared by every sift crate.
//!
//! This crate provides:
//! - [`Error`] - the error enum returned by fallible sift operations
//! - [`Result`] - convenience alias over [`Error`]

pub mod error;

pub use error::{Error, Result};
