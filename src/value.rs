use crate::parser::Parser;
use crate::result::ParseResult;

/// Parser combinator that replaces a successful parse's output with a fixed
/// value
pub struct Value<P, T> {
    parser: P,
    value: T,
}

impl<P, T> Value<P, T> {
    pub fn new(parser: P, value: T) -> Self {
        Value { parser, value }
    }
}

impl<'src, P, T> Parser<'src> for Value<P, T>
where
    P: Parser<'src>,
    T: Clone,
{
    type Cursor = P::Cursor;
    type Output = T;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<Self::Cursor, Self::Output> {
        match self.parser.parse(cursor) {
            ParseResult::Success(success) => {
                ParseResult::success(self.value.clone(), success.location, success.remainder)
            }
            ParseResult::Failure(failure) => ParseResult::Failure(failure),
        }
    }
}

/// Convenience function to create a Value parser
pub fn value<'src, P, T>(parser: P, value: T) -> Value<P, T>
where
    P: Parser<'src>,
    T: Clone,
{
    Value::new(parser, value)
}

/// Extension trait to add .value() method support for parsers
pub trait ValueExt<'src>: Parser<'src> + Sized {
    fn value<T: Clone>(self, value: T) -> Value<Self, T> {
        Value::new(self, value)
    }
}

/// Implement ValueExt for all parsers
impl<'src, P> ValueExt<'src> for P where P: Parser<'src> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chars::is_char;
    use crate::cursor::Cursor;
    use crate::cursors::TextCursor;

    #[test]
    fn test_value_substitutes() {
        let cursor = TextCursor::new("a");
        let parser = is_char('a').value(42);

        let result = parser.parse(cursor);
        assert_eq!(result.value(), Some(&42));
        assert_eq!(result.remainder().position(), 1);
    }

    #[test]
    fn test_value_fails_if_parser_fails() {
        let cursor = TextCursor::new("b");
        let parser = is_char('a').value(42);

        assert!(!parser.parse(cursor).has_value());
    }
}
