//! Global subscriber installation.
//!
//! Kept in its own test binary: the subscriber is process-wide, so exactly
//! one `init` can succeed here.

use gocd_client::tracing::{TracingConfig, TracingError};

#[test]
fn test_init_installs_subscriber_once() {
    let config = TracingConfig::new().without_otlp().with_stdout(false);

    let guard = config.init().expect("first init should install the subscriber");
    assert!(!guard.is_exporting());
    tracing::info!("subscriber installed");

    let second = config.init();
    assert!(matches!(second, Err(TracingError::AlreadyInitialized(_))));

    guard.shutdown().expect("shutdown without exporter should succeed");
}
