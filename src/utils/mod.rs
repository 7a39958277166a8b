//! Utility modules
//!
//! Logging setup and input validation helpers.

pub mod logging;
pub mod validation;
