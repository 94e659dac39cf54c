//! # jsonlog
//!
//! A single-record JSON log formatter for machine ingestion.
//!
//! Each log event becomes exactly one self-contained JSON object followed by
//! a line terminator, suitable for line-by-line consumption by log pipelines.
//! The string escaping is implemented in-crate so the emission path carries
//! no serialization dependency.
//!
//! ## Quick Start
//!
//! Route `tracing` output through the formatter:
//!
//! ```rust,ignore
//! fn main() {
//!     jsonlog::logging::init();
//!
//!     tracing::info!("howdy!");
//!     // {"level":"INFO","message":"howdy!","millis":1756500000000,"seqNum":0,"source":"myapp","thrown":null}
//! }
//! ```
//!
//! Or format explicit records directly:
//!
//! ```rust,ignore
//! use jsonlog::{JsonFormatter, LogEvent};
//!
//! let formatter = JsonFormatter::from_env();
//! let line = formatter.format(&LogEvent::new("INFO", "howdy!"));
//! ```
//!
//! ## Output Shape
//!
//! Fields appear in fixed order: `level`, `message`, `millis`, `seqNum`,
//! `source`, `thrown`, and optionally `fields`. Absent values serialize as
//! `null`, never omitted — field order and presence are part of the contract.
//!
//! When field extraction is enabled, inline `identifier[value]` tokens in the
//! message are re-emitted as a structured `fields` object:
//!
//! ```text
//! tracing::info!("user[alice] logged in from ip[10.0.0.7]");
//! // ... "fields":{"user":"alice","ip":"10.0.0.7"}}
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `JSONLOG_PARSE_MESSAGE_FIELDS` | Enable `identifier[value]` extraction (`true` only) | `false` |
//! | `RUST_LOG` | Console log filter for [`logging::init`] | `info` |
//!
//! ## Feature Flags
//!
//! - `pretty_logs` - Colorful console output for development instead of JSON

/// Formatter configuration.
pub mod config;

/// JSON record assembly, string escaping, and field extraction.
pub mod format;

/// `tracing` subscriber integration.
pub mod logging;

/// Log event data model.
pub mod record;

pub use config::FormatterConfig;
pub use format::JsonFormatter;
pub use record::{LogEvent, StackFrame, Thrown};
