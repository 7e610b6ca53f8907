use crate::cursor::Cursor;
use crate::parser::Parser;
use crate::result::ParseResult;

/// Parser combinator that matches zero or more occurrences of the given
/// parser
///
/// Iteration ends at the first *empty* failure; a *partial* terminating
/// failure (input consumed before the last attempt failed) fails the whole
/// repetition rather than being swallowed.
///
/// # Panics
///
/// Panics if an iteration succeeds without consuming input. That is a broken
/// grammar, not a parse failure: repeating a zero-width match would loop
/// forever.
pub struct Many<P> {
    parser: P,
}

impl<P> Many<P> {
    pub fn new(parser: P) -> Self {
        Many { parser }
    }
}

impl<'src, P> Parser<'src> for Many<P>
where
    P: Parser<'src>,
{
    type Cursor = P::Cursor;
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<Self::Cursor, Self::Output> {
        let mut values = Vec::new();
        let mut from = cursor;

        loop {
            match self.parser.parse(from) {
                ParseResult::Success(success) => {
                    if success.remainder.position() == from.position() {
                        panic!(
                            "many() cannot repeat a zero-width parser; no progress at position {}",
                            from.position()
                        );
                    }
                    values.push(success.value);
                    from = success.remainder;
                }
                ParseResult::Failure(failure) => {
                    if failure.is_partial(&from) {
                        return ParseResult::Failure(failure);
                    }
                    return ParseResult::success(values, cursor, from);
                }
            }
        }
    }
}

/// Convenience function to create a Many parser
pub fn many<'src, P>(parser: P) -> Many<P>
where
    P: Parser<'src>,
{
    Many::new(parser)
}

/// Extension trait to add .many() method support for parsers
pub trait ManyExt<'src>: Parser<'src> + Sized {
    fn many(self) -> Many<Self> {
        Many::new(self)
    }
}

/// Implement ManyExt for all parsers
impl<'src, P> ManyExt<'src> for P where P: Parser<'src> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chars::is_char;
    use crate::cursors::TextCursor;
    use crate::pure::pure;
    use crate::then::ThenExt;

    #[test]
    fn test_many_zero_matches() {
        let cursor = TextCursor::new("xyz");
        let parser = many(is_char('a'));

        let result = parser.parse(cursor);
        assert_eq!(result.value(), Some(&vec![]));
        assert_eq!(result.remainder().position(), 0);
    }

    #[test]
    fn test_many_multiple_matches() {
        let cursor = TextCursor::new("aaab");
        let parser = many(is_char('a'));

        let result = parser.parse(cursor);
        assert_eq!(result.value(), Some(&vec!['a', 'a', 'a']));
        assert_eq!(result.remainder().position(), 3);
    }

    #[test]
    fn test_many_empty_input() {
        let cursor = TextCursor::new("");
        let parser = many(is_char('a'));

        let result = parser.parse(cursor);
        assert_eq!(result.value(), Some(&vec![]));
    }

    #[test]
    fn test_many_partial_item_failure_propagates() {
        // "ab" repeated over "ababa": the third attempt consumes 'a' and then
        // fails, which must fail the whole repetition.
        let cursor = TextCursor::new("ababa");
        let ab = is_char('a').then(|_| is_char('b'));
        let parser = many(ab);

        let result = parser.parse(cursor);
        let failure = result.failure().unwrap();
        assert_eq!(failure.remainder().position(), 5);
    }

    #[test]
    #[should_panic(expected = "zero-width")]
    fn test_many_zero_width_parser_panics() {
        let cursor = TextCursor::new("abc");
        let parser = many(pure::<TextCursor<'_>, _>(()));

        let _ = parser.parse(cursor);
    }
}
