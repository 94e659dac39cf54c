//! JSON string escaping for the emission path.
//!
//! Implemented in-crate so formatting a record never touches a serialization
//! framework. The escaping table covers everything that would break JSON
//! string syntax plus U+2028/U+2029, which some JavaScript consumers treat
//! as line terminators.

const CONTROL_CHARACTERS_END: char = '\u{001f}';

const HEX_DIGITS: [char; 16] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'a', 'b', 'c', 'd', 'e', 'f',
];

/// Appends `text` to `buf` as a JSON string literal body.
///
/// No surrounding quotes are added; callers quote where a quoted value is
/// required. Runs in a single forward pass over the input.
pub fn push_encoded(buf: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '\\' => buf.push_str("\\\\"),
            '"' => buf.push_str("\\\""),
            '\n' => buf.push_str("\\n"),
            '\r' => buf.push_str("\\r"),
            '\t' => buf.push_str("\\t"),
            '\u{2028}' => buf.push_str("\\u2028"),
            '\u{2029}' => buf.push_str("\\u2029"),
            ch if ch <= CONTROL_CHARACTERS_END => {
                let code = ch as u32;
                buf.push_str("\\u00");
                buf.push(HEX_DIGITS[(code >> 4 & 0xf) as usize]);
                buf.push(HEX_DIGITS[(code & 0xf) as usize]);
            }
            ch => buf.push(ch),
        }
    }
}

/// Appends either the bare literal `null` or a double-quoted, encoded string.
///
/// This is the unit used for every string-valued record field.
pub fn push_quoted(buf: &mut String, value: Option<&str>) {
    match value {
        Some(text) => {
            buf.push('"');
            push_encoded(buf, text);
            buf.push('"');
        }
        None => buf.push_str("null"),
    }
}

#[cfg(test)]
mod tests {
    use crate::format::encode::{push_encoded, push_quoted};

    fn encoded(text: &str) -> String {
        let mut buf = String::new();
        push_encoded(&mut buf, text);
        buf
    }

    #[test]
    fn test_plain_text_passes_through() {
        assert_eq!(encoded("howdy!"), "howdy!");
        assert_eq!(encoded("grüße 你好 🦀"), "grüße 你好 🦀");
        assert_eq!(encoded(""), "");
    }

    #[test]
    fn test_escape_table() {
        assert_eq!(encoded("\\"), "\\\\");
        assert_eq!(encoded("\""), "\\\"");
        assert_eq!(encoded("\n"), "\\n");
        assert_eq!(encoded("\r"), "\\r");
        assert_eq!(encoded("\t"), "\\t");
        assert_eq!(encoded("\u{2028}"), "\\u2028");
        assert_eq!(encoded("\u{2029}"), "\\u2029");
    }

    #[test]
    fn test_control_characters_use_lowercase_hex() {
        assert_eq!(encoded("\u{0}"), "\\u0000");
        assert_eq!(encoded("\u{1}"), "\\u0001");
        assert_eq!(encoded("\u{b}"), "\\u000b");
        assert_eq!(encoded("\u{1f}"), "\\u001f");
        // First non-control character passes through untouched.
        assert_eq!(encoded(" "), " ");
    }

    #[test]
    fn test_quoted_absent_is_bare_null() {
        let mut buf = String::new();
        push_quoted(&mut buf, None);
        assert_eq!(buf, "null");

        // The 4-character text "null" is still a quoted string.
        let mut buf = String::new();
        push_quoted(&mut buf, Some("null"));
        assert_eq!(buf, "\"null\"");
    }

    #[test]
    fn test_round_trip_through_json_decoder() {
        let inputs = [
            "plain",
            "say \"hi\"\n\tdone\\",
            "ctrl \u{1} sep \u{2028}\u{2029} end",
            "mixed ünïcode 🦀 and \r\n",
        ];
        for input in inputs {
            let mut buf = String::new();
            push_quoted(&mut buf, Some(input));
            let decoded: serde_json::Value = serde_json::from_str(&buf).unwrap();
            assert_eq!(decoded, serde_json::Value::String(input.to_string()));
        }
    }
}
