// tests/common.rs
//! Shared test utilities — logging setup and capture

#[cfg(feature = "logging")]
use std::io::Write;
#[cfg(feature = "logging")]
use std::sync::{Arc, Mutex};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize test-friendly logging; respects RUST_LOG
/// Call once at the start of any test that needs logs
#[allow(dead_code)]
pub fn setup() {
    #[cfg(feature = "logging")]
    tracing_subscriber::registry()
        .with(fmt::layer().with_test_writer())
        .with(EnvFilter::from_default_env())
        .try_init()
        .ok(); // idempotent — safe to call multiple times

    #[cfg(not(feature = "logging"))]
    { /* no-op */ }
}

#[cfg(feature = "logging")]
#[derive(Clone, Default)]
struct SharedBuf(Arc<Mutex<Vec<u8>>>);

#[cfg(feature = "logging")]
impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }
    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Run `f` under a thread-local subscriber at `info` and return what it logged
#[cfg(feature = "logging")]
#[allow(dead_code)]
pub fn capture_logs<F: FnOnce()>(f: F) -> String {
    let buf = SharedBuf::default();
    let writer = buf.clone();
    let subscriber = fmt()
        .with_env_filter(EnvFilter::new("info"))
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    let bytes = buf.0.lock().unwrap().clone();
    String::from_utf8_lossy(&bytes).into_owned()
}
