//! `tracing` subscriber integration.
//!
//! Provides a unified [`init`] function that routes `tracing` events through
//! the JSON record formatter, one self-contained line per event.
//!
//! # Usage
//!
//! Call [`init`] once at application startup:
//!
//! ```rust,ignore
//! fn main() {
//!     jsonlog::logging::init();
//!     tracing::info!("ready");
//! }
//! ```
//!
//! # Output Modes
//!
//! The default mode emits machine-ingestible JSON lines:
//!
//! ```text
//! {"level":"INFO","message":"ready","millis":1756500000000,"seqNum":0,"source":"myapp","thrown":null}
//! ```
//!
//! With the `pretty_logs` feature, output is colorized for development
//! consoles instead:
//!
//! ```text
//! 14:32:01.234 INFO  myapp: ready
//! ```
//!
//! Filtering is controlled by the `RUST_LOG` environment variable,
//! defaulting to `info`.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};

#[cfg(not(feature = "pretty_logs"))]
mod json;

#[cfg(feature = "pretty_logs")]
mod pretty;

#[cfg(not(feature = "pretty_logs"))]
pub use json::JsonEventFormat;

/// Initializes the tracing subscriber with the record formatter attached.
///
/// Should be called once at application startup. Record construction,
/// level filtering, and routing stay the responsibility of
/// `tracing-subscriber`; this crate only formats.
///
/// # Panics
///
/// Panics if called more than once (tracing subscriber can only be set once).
pub fn init() {
    let console_layer = setup_console_layer();
    Registry::default().with(console_layer).init();
}

#[cfg(not(feature = "pretty_logs"))]
fn setup_console_layer() -> Box<dyn Layer<Registry> + Send + Sync + 'static> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .event_format(json::JsonEventFormat::from_env())
        .with_filter(filter)
        .boxed()
}

#[cfg(feature = "pretty_logs")]
fn setup_console_layer() -> Box<dyn Layer<Registry> + Send + Sync + 'static> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt::layer()
        .event_format(pretty::PrettyLogFormat)
        .with_filter(filter)
        .boxed()
}
