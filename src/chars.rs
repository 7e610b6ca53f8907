use crate::cursor::Cursor;
use crate::cursors::TextCursor;
use crate::parser::Parser;
use crate::result::{Failure, ParseResult};

/// Parser that consumes and returns a single character
pub struct AnyChar;

/// Convenience function to create an AnyChar parser
pub fn any() -> AnyChar {
    AnyChar
}

impl<'src> Parser<'src> for AnyChar {
    type Cursor = TextCursor<'src>;
    type Output = char;

    fn parse(&self, cursor: TextCursor<'src>) -> ParseResult<TextCursor<'src>, char> {
        match cursor.value() {
            Some(c) => ParseResult::success(c, cursor, cursor.next()),
            None => Failure::expecting(cursor, "character").into(),
        }
    }
}

/// Parser that matches a specific character
pub struct IsChar {
    expected: char,
}

/// Convenience function to create an IsChar parser
pub fn is_char(expected: char) -> IsChar {
    IsChar { expected }
}

impl<'src> Parser<'src> for IsChar {
    type Cursor = TextCursor<'src>;
    type Output = char;

    fn parse(&self, cursor: TextCursor<'src>) -> ParseResult<TextCursor<'src>, char> {
        match cursor.value() {
            Some(c) if c == self.expected => ParseResult::success(c, cursor, cursor.next()),
            _ => Failure::expecting(cursor, format!("'{}'", self.expected)).into(),
        }
    }
}

/// Parser that matches a character satisfying a predicate, labeled with the
/// construct name used in expectations
pub struct Satisfy<F> {
    predicate: F,
    label: &'static str,
}

/// Convenience function to create a Satisfy parser
pub fn satisfy<F>(predicate: F, label: &'static str) -> Satisfy<F>
where
    F: Fn(char) -> bool,
{
    Satisfy { predicate, label }
}

impl<'src, F> Parser<'src> for Satisfy<F>
where
    F: Fn(char) -> bool,
{
    type Cursor = TextCursor<'src>;
    type Output = char;

    fn parse(&self, cursor: TextCursor<'src>) -> ParseResult<TextCursor<'src>, char> {
        match cursor.value() {
            Some(c) if (self.predicate)(c) => ParseResult::success(c, cursor, cursor.next()),
            _ => Failure::expecting(cursor, self.label).into(),
        }
    }
}

/// Parser that matches a single ASCII digit
pub fn digit() -> Satisfy<fn(char) -> bool> {
    satisfy(|c| c.is_ascii_digit(), "digit")
}

/// Parser that matches a single alphabetic character
pub fn letter() -> Satisfy<fn(char) -> bool> {
    satisfy(char::is_alphabetic, "letter")
}

/// Parser that matches a single whitespace character
pub fn whitespace() -> Satisfy<fn(char) -> bool> {
    satisfy(char::is_whitespace, "whitespace")
}
