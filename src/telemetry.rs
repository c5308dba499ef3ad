//! Desktop/dev tracing setup.
//!
//! Mobile hosts install their platform layer themselves (`tracing-android`,
//! `tracing-oslog`). Everywhere else, [`init_tracing`] installs a fmt
//! subscriber so [`TracingSink`](crate::TracingSink) output is visible.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_DIRECTIVES: &str = "info";

/// Installs a global fmt subscriber filtered by `RUST_LOG`.
///
/// Returns `false` if a global subscriber was already set; calling it twice is
/// harmless.
pub fn init_tracing() -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok()
}
