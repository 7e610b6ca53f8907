use thiserror::Error;

/// An owned, renderable parse error
///
/// Produced from a [`Failure`](crate::result::Failure) or by tokenization.
/// `position` is a byte offset into the text for character-level and bridged
/// failures, and a token index for token-level failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("parse error at position {position}: {message}")]
pub struct ParseError {
    pub position: usize,
    pub message: String,
}

impl ParseError {
    pub fn new(position: usize, message: impl Into<String>) -> Self {
        ParseError {
            position,
            message: message.into(),
        }
    }

    /// Render the error against its source text with line information and
    /// surrounding context lines
    pub fn explain(&self, source: &str) -> String {
        let loc = SourceLoc::new(source, self.position);
        let (line, offset) = loc.line_offset();

        let mut out = format!(
            "parse error at line {}, offset {}: {}\n",
            line, offset, self.message
        );
        for context_line in loc.context_lines() {
            out.push('\n');
            out.push_str(&context_line);
        }
        out
    }
}

/// A byte offset into source text, with human-readable rendering
///
/// Note: line and byte offset within the line, not a column number. Column
/// calculation depends on encoding, tab width, and rendering context, while
/// the byte offset is unambiguous.
#[derive(Debug, Clone, Copy)]
pub struct SourceLoc<'src> {
    text: &'src str,
    offset: usize,
}

impl<'src> SourceLoc<'src> {
    pub fn new(text: &'src str, offset: usize) -> Self {
        SourceLoc { text, offset }
    }

    /// One-based line number and byte offset within that line
    pub fn line_offset(&self) -> (usize, usize) {
        let mut line = 1;
        let mut line_start = 0;

        for (i, byte) in self.text.bytes().enumerate() {
            if i >= self.offset {
                break;
            }
            if byte == b'\n' {
                line += 1;
                line_start = i + 1;
            }
        }

        (line, self.offset - line_start)
    }

    /// Lines of context around the location: up to two lines each side, with
    /// a pointer under the offending offset
    pub fn context_lines(&self) -> Vec<String> {
        let (error_line, line_offset) = self.line_offset();
        let mut lines = Vec::new();
        let mut current_line = 1;

        for content in self.text.split('\n') {
            if current_line + 2 >= error_line && current_line <= error_line + 2 {
                let prefix = if current_line == error_line {
                    format!("  > {} | ", current_line)
                } else {
                    format!("    {} | ", current_line)
                };
                lines.push(format!("{}{}", prefix, content));

                if current_line == error_line {
                    let pointer_offset = prefix.len() + line_offset;
                    lines.push(format!("{}^--- here", " ".repeat(pointer_offset)));
                }
            }
            current_line += 1;
        }

        lines
    }
}
