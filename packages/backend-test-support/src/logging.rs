//! One-time tracing setup for test binaries.
//!
//! Unit and integration tests call [`init`] from a `#[ctor::ctor]` hook.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Directive used when neither `TEST_LOG` nor `RUST_LOG` is set.
pub const DEFAULT_TEST_DIRECTIVE: &str = "warn";

/// Filter from `TEST_LOG`, then `RUST_LOG`, then `default`.
pub fn filter_from_env(default: &str) -> EnvFilter {
    std::env::var("TEST_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .map(EnvFilter::new)
        .unwrap_or_else(|_| EnvFilter::new(default))
}

/// Install the test subscriber once per process. Later calls are no-ops.
pub fn init() {
    init_with(DEFAULT_TEST_DIRECTIVE);
}

/// Like [`init`] with a custom fallback directive (e.g. `"sevens_backend=debug"`).
///
/// Only the first call in a process has any effect.
pub fn init_with(default: &str) {
    INITIALIZED.get_or_init(|| {
        fmt()
            .with_env_filter(filter_from_env(default))
            .with_test_writer()
            .without_time()
            .with_target(true)
            .try_init()
            .ok();
    });
}
