//! Logging utilities
//!
//! Provides logging setup and configuration.

/// Setup logging through env_logger (reads RUST_LOG).
///
/// Safe to call more than once; later calls are ignored.
pub fn setup_logging() {
    let _ = env_logger::builder().try_init();
}

/// Logger for tests: output is captured by the test harness.
pub fn setup_test_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
