use crate::parser::Parser;
use crate::result::{Failure, ParseResult};
use std::fmt;

/// Parser combinator that performs negative lookahead
///
/// Succeeds with `()` if the given parser fails at the current position
/// (either kind of failure), and fails empty if it succeeds, naming the
/// unexpectedly matched value. Never consumes input in either case.
pub struct Not<P> {
    parser: P,
}

impl<P> Not<P> {
    pub fn new(parser: P) -> Self {
        Not { parser }
    }
}

impl<'src, P> Parser<'src> for Not<P>
where
    P: Parser<'src>,
    P::Output: fmt::Display,
{
    type Cursor = P::Cursor;
    type Output = ();

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<Self::Cursor, Self::Output> {
        match self.parser.parse(cursor) {
            ParseResult::Success(success) => ParseResult::Failure(Failure::with_message(
                cursor,
                format!("unexpected parsing of {}", success.value),
            )),
            ParseResult::Failure(_) => ParseResult::success((), cursor, cursor),
        }
    }
}

/// Convenience function to create a Not parser for negative lookahead
pub fn not<'src, P>(parser: P) -> Not<P>
where
    P: Parser<'src>,
{
    Not::new(parser)
}

/// Extension trait to add .not() method support for parsers
pub trait NotExt<'src>: Parser<'src> + Sized {
    fn not(self) -> Not<Self> {
        Not::new(self)
    }
}

/// Implement NotExt for all parsers
impl<'src, P> NotExt<'src> for P where P: Parser<'src> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chars::{any, is_char};
    use crate::cursor::Cursor;
    use crate::cursors::TextCursor;
    use crate::many::ManyExt;
    use crate::map::MapExt;
    use crate::then::ThenExt;

    #[test]
    fn test_not_fails_on_match() {
        let cursor = TextCursor::new("abc");
        let parser = not(is_char('a'));

        let result = parser.parse(cursor);
        let failure = result.failure().unwrap();
        assert!(!failure.is_partial(&cursor));
        assert_eq!(failure.message(), Some("unexpected parsing of a"));
    }

    #[test]
    fn test_not_succeeds_without_consuming() {
        let cursor = TextCursor::new("abc");
        let parser = not(is_char('x'));

        let result = parser.parse(cursor);
        assert!(result.has_value());
        assert_eq!(result.remainder().position(), 0);
    }

    #[test]
    fn test_not_succeeds_on_partial_failure() {
        // The wrapped parser consumes before failing; not() still succeeds
        // at the original position.
        let cursor = TextCursor::new("ax");
        let ab = is_char('a').then(|_| is_char('b')).map(|c| c.to_string());
        let parser = not(ab);

        let result = parser.parse(cursor);
        assert!(result.has_value());
        assert_eq!(result.remainder().position(), 0);
    }

    #[test]
    fn test_not_at_end_of_input() {
        let cursor = TextCursor::new("").next();
        let parser = not(is_char('a'));

        assert!(parser.parse(cursor).has_value());
    }

    #[test]
    fn test_not_for_scanning_until_delimiter() {
        let cursor = TextCursor::new("ab]x");
        let parser = not(is_char(']')).then(|_| any()).many();

        let result = parser.parse(cursor);
        assert_eq!(result.value(), Some(&vec!['a', 'b']));
        assert_eq!(result.remainder().position(), 2);
    }
}
