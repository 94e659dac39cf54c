//! Record assembly: one [`LogEvent`] in, one JSON line out.
//!
//! Field order is part of the wire contract:
//! `level, message, millis, seqNum, source, thrown[, fields]`. Absent values
//! serialize as the bare literal `null`, never omitted, so every line is a
//! syntactically valid JSON object regardless of how empty the event is.

use crate::config::FormatterConfig;
use crate::record::{LogEvent, Thrown};

pub mod encode;
pub mod fields;
pub mod thrown;

#[cfg(windows)]
pub(crate) const LINE_SEPARATOR: &str = "\r\n";
#[cfg(not(windows))]
pub(crate) const LINE_SEPARATOR: &str = "\n";

/// Formats one log event as a self-contained JSON line.
///
/// A pure function of (event, config): no I/O, no locks, safe to call
/// concurrently on distinct events.
pub struct JsonFormatter {
    parse_message_fields: bool,
}

impl JsonFormatter {
    pub fn new(config: FormatterConfig) -> Self {
        Self {
            parse_message_fields: config.parse_message_fields,
        }
    }

    /// Constructs a formatter from the memoized process environment, see
    /// [`FormatterConfig::from_env`].
    pub fn from_env() -> Self {
        Self::new(FormatterConfig::from_env())
    }

    /// Renders the event as one JSON object plus the platform line
    /// terminator. Never fails: absent fields degrade to `null`.
    pub fn format(&self, event: &LogEvent) -> String {
        let mut buf = String::with_capacity(128);
        buf.push('{');
        push_string_entry(&mut buf, "level", event.level.as_deref());
        buf.push(',');
        push_string_entry(&mut buf, "message", event.message.as_deref());
        buf.push(',');
        push_int_entry(&mut buf, "millis", event.millis);
        buf.push(',');
        push_int_entry(&mut buf, "seqNum", event.seq_num);
        buf.push(',');
        push_source_entry(&mut buf, event);
        buf.push(',');
        push_thrown_entry(&mut buf, event.thrown.as_ref());
        if self.parse_message_fields {
            buf.push(',');
            push_key(&mut buf, "fields");
            fields::push_fields(&mut buf, event.message.as_deref());
        }
        buf.push('}');
        buf.push_str(LINE_SEPARATOR);
        buf
    }
}

fn push_key(buf: &mut String, key: &str) {
    buf.push('"');
    buf.push_str(key);
    buf.push_str("\":");
}

fn push_string_entry(buf: &mut String, key: &str, value: Option<&str>) {
    push_key(buf, key);
    encode::push_quoted(buf, value);
}

fn push_int_entry(buf: &mut String, key: &str, value: i64) {
    push_key(buf, key);
    buf.push_str(&value.to_string());
}

// `class` or `class.method()` as one quoted string. A method without a class
// is meaningless and ignored.
fn push_source_entry(buf: &mut String, event: &LogEvent) {
    push_key(buf, "source");

    let Some(class) = event.source_class.as_deref() else {
        buf.push_str("null");
        return;
    };

    buf.push('"');
    encode::push_encoded(buf, class);
    if let Some(method) = event.source_method.as_deref() {
        buf.push('.');
        encode::push_encoded(buf, method);
        buf.push_str("()");
    }
    buf.push('"');
}

fn push_thrown_entry(buf: &mut String, value: Option<&Thrown>) {
    push_key(buf, "thrown");
    match value {
        Some(thrown) => encode::push_quoted(buf, Some(&thrown::render(thrown))),
        None => buf.push_str("null"),
    }
}
