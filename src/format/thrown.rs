//! Human-readable rendering of an error chain.
//!
//! The rendered text is multi-line; the record formatter encodes it into a
//! single JSON string field, so embedded line breaks become `\n` escapes.

use crate::format::LINE_SEPARATOR;
use crate::record::{StackFrame, Thrown};

/// Renders the full cause chain, one `Exception in ...` block per link.
///
/// Cause chains are assumed acyclic; the walk does not guard against cycles.
pub fn render(thrown: &Thrown) -> String {
    let mut buf = String::new();
    let mut current = Some(thrown);
    while let Some(link) = current {
        push_exception(&mut buf, link);
        current = link.cause.as_deref();
    }
    buf
}

fn push_exception(buf: &mut String, thrown: &Thrown) {
    buf.push_str("Exception in ");
    buf.push_str(&thrown.type_name);
    buf.push_str(": ");
    buf.push_str(thrown.message.as_deref().unwrap_or("null"));
    buf.push_str(LINE_SEPARATOR);
    for frame in &thrown.frames {
        push_frame(buf, frame);
    }
}

fn push_frame(buf: &mut String, frame: &StackFrame) {
    buf.push_str("    at ");
    buf.push_str(&frame.type_name);
    buf.push('.');
    buf.push_str(&frame.method);
    buf.push('(');
    buf.push_str(frame.file.as_deref().unwrap_or("null"));
    buf.push(':');
    buf.push_str(&frame.line.to_string());
    buf.push(')');
    buf.push_str(LINE_SEPARATOR);
}

#[cfg(test)]
mod tests {
    use crate::format::thrown::render;
    use crate::record::{StackFrame, Thrown};

    fn frame(type_name: &str, method: &str, file: Option<&str>, line: i32) -> StackFrame {
        StackFrame {
            type_name: type_name.to_string(),
            method: method.to_string(),
            file: file.map(str::to_string),
            line,
        }
    }

    #[test]
    fn test_single_exception_with_frames() {
        let thrown = Thrown {
            type_name: "com.x.BoomError".to_string(),
            message: Some("it broke".to_string()),
            frames: vec![
                frame("com.x.Test", "meth", Some("Test.java"), 42),
                frame("com.x.Main", "main", Some("Main.java"), 7),
            ],
            cause: None,
        };

        assert_eq!(
            render(&thrown),
            "Exception in com.x.BoomError: it broke\n    at com.x.Test.meth(Test.java:42)\n    at com.x.Main.main(Main.java:7)\n"
        );
    }

    #[test]
    fn test_cause_chain_is_concatenated() {
        let thrown = Thrown {
            type_name: "Outer".to_string(),
            message: Some("wrapper".to_string()),
            frames: vec![],
            cause: Some(Box::new(Thrown {
                type_name: "Inner".to_string(),
                message: Some("root".to_string()),
                frames: vec![frame("a.B", "c", Some("B.rs"), 1)],
                cause: None,
            })),
        };

        assert_eq!(
            render(&thrown),
            "Exception in Outer: wrapper\nException in Inner: root\n    at a.B.c(B.rs:1)\n"
        );
    }

    #[test]
    fn test_absent_message_and_file_render_as_null_text() {
        let thrown = Thrown {
            type_name: "Bare".to_string(),
            message: None,
            frames: vec![frame("x.Y", "z", None, -2)],
            cause: None,
        };

        assert_eq!(render(&thrown), "Exception in Bare: null\n    at x.Y.z(null:-2)\n");
    }
}
