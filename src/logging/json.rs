//! Bridges `tracing` events into [`LogEvent`] records.

use crate::format::JsonFormatter;
use crate::record::LogEvent;
use tracing::{Event, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

/// `tracing` event format producing one JSON record line per event.
///
/// The event's target becomes the record's source class and the innermost
/// enclosing span, when present, its source method.
pub struct JsonEventFormat {
    formatter: JsonFormatter,
}

impl JsonEventFormat {
    pub fn new(formatter: JsonFormatter) -> Self {
        Self { formatter }
    }

    pub fn from_env() -> Self {
        Self::new(JsonFormatter::from_env())
    }
}

impl<S, N> FormatEvent<S, N> for JsonEventFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let mut message = String::new();
        ctx.field_format()
            .format_fields(Writer::new(&mut message), event)?;

        let metadata = event.metadata();
        let mut record = LogEvent::new(metadata.level().to_string(), message);
        record.source_class = Some(metadata.target().to_string());
        record.source_method = ctx
            .event_scope()
            .and_then(|mut scope| scope.next())
            .map(|span| span.name().to_string());

        write!(writer, "{}", self.formatter.format(&record))
    }
}
