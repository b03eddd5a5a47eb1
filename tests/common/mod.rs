#![allow(dead_code)]

mod span_recorder;

pub use span_recorder::{Recorded, SpanRecorder};

use tracing_subscriber::EnvFilter;

/// Log to the test output, filtered by `RUST_LOG`.
///
/// `log` records from the library are forwarded to tracing. Safe to call from
/// every test, only the first call installs the subscriber.
pub fn init_tracing() {
    let _ = tracing_log::LogTracer::init();
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
