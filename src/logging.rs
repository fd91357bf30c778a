//! Logging setup
//!
//! Native builds log to stdout through a `tracing-subscriber` fmt layer,
//! filtered by `RUST_LOG` (default `info`). WASM builds have no subscriber.

/// Install the global subscriber. Calling it twice leaves the first one in place.
#[cfg(not(target_arch = "wasm32"))]
pub fn init() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if let Err(e) = fmt().with_env_filter(filter).with_target(false).try_init() {
        eprintln!("Logging already initialized: {}", e);
    }
}

#[cfg(target_arch = "wasm32")]
pub fn init() {}
