//! Foundation types for termfolio.
//!
//! Shared by every crate in the workspace: the error enum, the console
//! configuration, and the platform-agnostic key events the session consumes.

pub mod config;
pub mod error;
pub mod input;
