//! Best-effort extraction of inline `identifier[value]` tokens.
//!
//! Messages like `user[alice] logged in from ip[10.0.0.7]` carry ad-hoc
//! structured annotations; this module mines them back out as a JSON object.
//! The scanner is a hand-rolled, single forward pass: identifiers are maximal
//! runs of ASCII alphanumerics immediately before a `[`, values are one or
//! more characters up to the next `]`. No backtracking into consumed text.

use crate::format::encode;

/// Iterator over `(identifier, value)` tokens of a message, in scan order.
///
/// Later identical identifiers are all yielded; deduplication is left to the
/// consumer.
pub struct FieldTokens<'a> {
    source: &'a str,
    pos: usize,
    // First `]` found at or after `pos + 1`, located lazily. Only ever moves
    // forward, which keeps the scan linear even on inputs that are mostly
    // open brackets.
    close: usize,
}

impl<'a> FieldTokens<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            pos: 0,
            close: 0,
        }
    }
}

impl<'a> Iterator for FieldTokens<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        let bytes = self.source.as_bytes();

        while let Some(offset) = bytes[self.pos..].iter().position(|&b| b == b'[') {
            let open = self.pos + offset;

            // Identifier: maximal alphanumeric run ending at the bracket,
            // never reaching back into an already-consumed token.
            let mut start = open;
            while start > self.pos && bytes[start - 1].is_ascii_alphanumeric() {
                start -= 1;
            }

            if self.close <= open {
                match bytes[open + 1..].iter().position(|&b| b == b']') {
                    Some(offset) => self.close = open + 1 + offset,
                    // No closing bracket left, so nothing further can match.
                    None => {
                        self.pos = bytes.len();
                        return None;
                    }
                }
            }

            // Value must be non-empty; ragged tokens are skipped, not errors.
            if start < open && open + 1 < self.close {
                let close = self.close;
                self.pos = close + 1;
                return Some((&self.source[start..open], &self.source[open + 1..close]));
            }
            self.pos = open + 1;
        }

        None
    }
}

/// Appends the extracted field map as a JSON object, or the bare literal
/// `null` when the message is absent or contains no tokens.
///
/// An empty field set and an unparseable message are deliberately
/// indistinguishable: both emit `null`, never `{}`.
pub fn push_fields(buf: &mut String, message: Option<&str>) {
    let Some(message) = message else {
        buf.push_str("null");
        return;
    };

    let mut tokens = FieldTokens::new(message);
    let Some((key, value)) = tokens.next() else {
        buf.push_str("null");
        return;
    };

    buf.push('{');
    push_field(buf, key, value);
    for (key, value) in tokens {
        buf.push(',');
        push_field(buf, key, value);
    }
    buf.push('}');
}

// Identifiers are ASCII alphanumeric by construction, so the key needs no
// further escaping; the value goes through the full table.
fn push_field(buf: &mut String, key: &str, value: &str) {
    buf.push('"');
    buf.push_str(key);
    buf.push_str("\":");
    encode::push_quoted(buf, Some(value));
}
