// src/log.rs
use std::sync::OnceLock;

use tracing_subscriber::{EnvFilter, fmt};

/// Target every crate log line is emitted under.
pub const TARGET: &str = "liveodds";

static INIT: OnceLock<()> = OnceLock::new();

/// Install a stderr `tracing` subscriber.
///
/// `default_filter` applies when `RUST_LOG` is unset, e.g. `"liveodds=info"`.
/// Calling this more than once is a no-op, and so is calling it when the host
/// application already installed its own global subscriber.
pub fn init(default_filter: &str) {
    INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_filter));

        let _ = fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .try_init();
    });
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        ::tracing::info!(target: $crate::log::TARGET, $($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        ::tracing::debug!(target: $crate::log::TARGET, $($arg)*)
    };
}

/// Warn-level logging
#[macro_export]
macro_rules! logw {
    ($($arg:tt)*) => {
        ::tracing::warn!(target: $crate::log::TARGET, $($arg)*)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        ::tracing::error!(target: $crate::log::TARGET, $($arg)*)
    };
}
