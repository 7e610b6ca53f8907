use crate::cursor::Cursor;

/// A cursor over raw text, yielding one `char` at a time
///
/// Wraps the full input and a byte offset; advancing moves by one UTF-8
/// character. The input is shared read-only by every cursor derived from it.
#[derive(Debug, Clone, Copy)]
pub struct TextCursor<'src> {
    text: &'src str,
    offset: usize,
}

impl<'src> TextCursor<'src> {
    pub fn new(text: &'src str) -> Self {
        TextCursor { text, offset: 0 }
    }

    /// The full input text this cursor indexes into
    pub fn text(&self) -> &'src str {
        self.text
    }

    /// The unconsumed tail of the input
    pub fn rest(&self) -> &'src str {
        &self.text[self.offset..]
    }
}

// Position and source identity only; content is never compared.
impl PartialEq for TextCursor<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.offset == other.offset && std::ptr::eq(self.text, other.text)
    }
}

impl Eq for TextCursor<'_> {}

impl Cursor for TextCursor<'_> {
    type Element = char;

    const MERGE_KEEPS_FIRST_MESSAGE: bool = false;

    fn value(&self) -> Option<char> {
        self.text[self.offset..].chars().next()
    }

    fn next(self) -> Self {
        match self.value() {
            Some(c) => TextCursor {
                text: self.text,
                offset: self.offset + c.len_utf8(),
            },
            None => self,
        }
    }

    fn position(&self) -> usize {
        self.offset
    }

    fn describe(element: &char) -> String {
        format!("'{}'", element)
    }
}
