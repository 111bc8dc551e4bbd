#![allow(dead_code)]

pub mod factory;

// Auto-initialize logging once per test binary
#[ctor::ctor]
fn init_test_logging() {
    backend_test_support::test_logging::init();
}
