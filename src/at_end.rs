use crate::cursor::Cursor;
use crate::parser::Parser;
use crate::result::{Failure, ParseResult};

/// Parser combinator that additionally requires the whole input to be
/// consumed
///
/// A success whose remainder is not at the end of input becomes an empty
/// failure at that remainder; failures pass through unchanged.
pub struct AtEnd<P> {
    parser: P,
}

impl<P> AtEnd<P> {
    pub fn new(parser: P) -> Self {
        AtEnd { parser }
    }
}

impl<'src, P> Parser<'src> for AtEnd<P>
where
    P: Parser<'src>,
{
    type Cursor = P::Cursor;
    type Output = P::Output;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<Self::Cursor, Self::Output> {
        match self.parser.parse(cursor) {
            ParseResult::Success(success) => {
                if success.remainder.at_end() {
                    ParseResult::Success(success)
                } else {
                    ParseResult::Failure(Failure::empty(success.remainder))
                }
            }
            ParseResult::Failure(failure) => ParseResult::Failure(failure),
        }
    }
}

/// Convenience function to create an AtEnd parser
pub fn at_end<'src, P>(parser: P) -> AtEnd<P>
where
    P: Parser<'src>,
{
    AtEnd::new(parser)
}

/// Extension trait to add .at_end() method support for parsers
pub trait AtEndExt<'src>: Parser<'src> + Sized {
    fn at_end(self) -> AtEnd<Self> {
        AtEnd::new(self)
    }
}

/// Implement AtEndExt for all parsers
impl<'src, P> AtEndExt<'src> for P where P: Parser<'src> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chars::is_char;
    use crate::cursors::TextCursor;
    use crate::some::SomeExt;

    #[test]
    fn test_at_end_accepts_full_consumption() {
        let cursor = TextCursor::new("aa");
        let parser = is_char('a').some().at_end();

        let result = parser.parse(cursor);
        assert_eq!(result.value(), Some(&vec!['a', 'a']));
    }

    #[test]
    fn test_at_end_rejects_strict_prefix() {
        // The unwrapped parser would succeed on the prefix.
        let cursor = TextCursor::new("aab");
        let prefix = is_char('a').some();
        assert!(prefix.parse(cursor).has_value());

        let parser = is_char('a').some().at_end();
        let result = parser.parse(cursor);
        let failure = result.failure().unwrap();
        assert_eq!(failure.remainder().position(), 2);
    }

    #[test]
    fn test_at_end_passes_failures_through() {
        let cursor = TextCursor::new("b");
        let parser = is_char('a').at_end();

        let result = parser.parse(cursor);
        let failure = result.failure().unwrap();
        let labels: Vec<&str> = failure.expectations().iter().map(|e| e.as_ref()).collect();
        assert_eq!(labels, vec!["'a'"]);
    }
}
