//! Unified logging initialization for tests.
//!
//! Idempotent: safe to call from every test binary's setup hook.

use std::sync::Once;

use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Initialize a tracing subscriber for test output.
///
/// Respects `RUST_LOG`; defaults to a quiet filter that keeps SQL noise
/// out of test output.
pub fn init() {
    INIT.call_once(|| {
        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("info,sqlx=warn,sea_orm=warn"));

        let _ = tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_test_writer()
            .try_init();
    });
}
