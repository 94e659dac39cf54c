use chrono::Utc;
use std::sync::atomic::{AtomicI64, Ordering};

static SEQUENCE: AtomicI64 = AtomicI64::new(0);

/// One discrete log occurrence.
///
/// All fields are public so callers that plumb their own record data can
/// build events explicitly; [`LogEvent::new`] covers the common case of a
/// wall-clock-stamped event with a process-wide sequence number.
///
/// The formatter treats every optional field as normal control flow: absence
/// serializes to `null`, it is never an error.
#[derive(Debug, Clone, Default)]
pub struct LogEvent {
    /// Severity label, e.g. `INFO`. Opaque to the formatter.
    pub level: Option<String>,
    /// Raw message text.
    pub message: Option<String>,
    /// Milliseconds since the Unix epoch.
    pub millis: i64,
    /// Emission-order sequence number. Passed through, not validated.
    pub seq_num: i64,
    /// Call-site type or target identifying where the event originated.
    pub source_class: Option<String>,
    /// Call-site method. Only meaningful when `source_class` is present.
    pub source_method: Option<String>,
    /// Error chain attached to the event, if any.
    pub thrown: Option<Thrown>,
}

impl LogEvent {
    /// Creates an event stamped with the current wall-clock time and the
    /// next process-wide sequence number.
    pub fn new(level: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level: Some(level.into()),
            message: Some(message.into()),
            millis: Utc::now().timestamp_millis(),
            seq_num: SEQUENCE.fetch_add(1, Ordering::Relaxed),
            source_class: None,
            source_method: None,
            thrown: None,
        }
    }
}

/// One link in an error chain: a type name, an optional message, the stack
/// frames recorded at the point of failure, and an optional cause.
#[derive(Debug, Clone)]
pub struct Thrown {
    pub type_name: String,
    pub message: Option<String>,
    pub frames: Vec<StackFrame>,
    /// Next link in the cause chain. The renderer walks this iteratively
    /// and assumes the chain is acyclic.
    pub cause: Option<Box<Thrown>>,
}

/// A single stack frame of a [`Thrown`] error.
#[derive(Debug, Clone)]
pub struct StackFrame {
    pub type_name: String,
    pub method: String,
    pub file: Option<String>,
    pub line: i32,
}
