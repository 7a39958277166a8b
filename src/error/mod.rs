//! Error handling
//!
//! Defines error types and handling for verification and directory setup.

pub mod handlers;
pub mod types;

pub use types::*;
