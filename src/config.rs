use std::env;
use std::sync::LazyLock;

/// Environment variable controlling message field extraction.
///
/// Only the string `true` (case-insensitive, surrounding whitespace trimmed)
/// enables the feature; anything else, including absence, disables it.
pub const PARSE_MESSAGE_FIELDS_ENV: &str = "JSONLOG_PARSE_MESSAGE_FIELDS";

static PARSE_MESSAGE_FIELDS: LazyLock<bool> =
    LazyLock::new(|| parse_flag(env::var(PARSE_MESSAGE_FIELDS_ENV).ok().as_deref()));

/// Formatter configuration, read once and immutable afterwards.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormatterConfig {
    /// Whether `identifier[value]` tokens in the message are re-emitted as a
    /// structured `fields` object.
    pub parse_message_fields: bool,
}

impl FormatterConfig {
    /// Reads the configuration from the process environment.
    ///
    /// The environment is consulted at most once per process; later calls
    /// return the memoized value, so the flag cannot change mid-run.
    pub fn from_env() -> Self {
        Self {
            parse_message_fields: *PARSE_MESSAGE_FIELDS,
        }
    }
}

fn parse_flag(value: Option<&str>) -> bool {
    match value {
        Some(value) => value.trim().eq_ignore_ascii_case("true"),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use crate::config::parse_flag;

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag(Some("true")));
        assert!(parse_flag(Some("TRUE")));
        assert!(parse_flag(Some("  True\t")));

        assert!(!parse_flag(Some("false")));
        assert!(!parse_flag(Some("1")));
        assert!(!parse_flag(Some("yes")));
        assert!(!parse_flag(Some("")));
        assert!(!parse_flag(None));
    }
}
