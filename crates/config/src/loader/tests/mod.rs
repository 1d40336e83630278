//! Tests for the configuration loader builder.
//!
//! Invariants:
//! - Tests use `serial_test` to prevent environment variable pollution.
//! - Temporary directories are cleaned up automatically via `tempfile`.

pub mod dotenv_tests;
