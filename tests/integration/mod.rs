//! Integration tests module
//!
//! This module contains all integration tests for buildpack CLI commands.

pub mod common;
pub mod fetch;
pub mod install;
pub mod query;
