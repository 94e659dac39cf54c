use nu_ansi_term::{Color, Style};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

/// Human-friendly console rendering for development, colorized per level.
pub struct PrettyLogFormat;

impl PrettyLogFormat {
    fn level_style(level: &Level) -> Style {
        match *level {
            Level::TRACE => Style::new().fg(Color::Purple),
            Level::DEBUG => Style::new().fg(Color::Blue),
            Level::INFO => Style::new().fg(Color::Green),
            Level::WARN => Style::new().fg(Color::Yellow),
            Level::ERROR => Style::new().fg(Color::Red),
        }
    }
}

impl<S, N> FormatEvent<S, N> for PrettyLogFormat
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
        let metadata = event.metadata();
        let dimmed = Style::new().dimmed();

        write!(
            writer,
            "{}",
            dimmed.paint(format!("{} ", chrono::offset::Local::now().format("%T%.3f")))
        )?;

        let level = metadata.level();
        write!(
            writer,
            "{} ",
            Self::level_style(level).paint(format!("{:<5}", level))
        )?;

        write!(writer, "{}", dimmed.paint(format!("{}", metadata.target())))?;
        if let Some(span) = ctx.event_scope().and_then(|mut scope| scope.next()) {
            write!(writer, "{}", dimmed.paint(format!("::{}", span.name())))?;
        }
        write!(writer, "{}", dimmed.paint(": "))?;

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}
