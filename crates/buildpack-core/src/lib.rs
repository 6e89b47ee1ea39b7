//! Core utilities shared by the `buildpack` library and binary.
//!
//! Holds the error model and the path helpers that every other module
//! builds on.

pub mod core;

pub use core::error::{BuildpackError, BuildpackResult, ErrorKind};
pub use core::error_help::{format_error_with_help, ErrorHelp};
