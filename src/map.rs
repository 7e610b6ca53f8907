use crate::parser::Parser;
use crate::result::ParseResult;

/// Parser combinator that transforms the output of a parser using a mapping
/// function
pub struct Map<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> Map<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        Map { parser, mapper }
    }
}

impl<'src, P, F, T, U> Parser<'src> for Map<P, F>
where
    P: Parser<'src, Output = T>,
    F: Fn(T) -> U,
{
    type Cursor = P::Cursor;
    type Output = U;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<Self::Cursor, Self::Output> {
        match self.parser.parse(cursor) {
            ParseResult::Success(success) => ParseResult::success(
                (self.mapper)(success.value),
                success.location,
                success.remainder,
            ),
            ParseResult::Failure(failure) => ParseResult::Failure(failure),
        }
    }
}

/// Convenience function to create a Map parser
pub fn map<'src, P, F, T, U>(parser: P, mapper: F) -> Map<P, F>
where
    P: Parser<'src, Output = T>,
    F: Fn(T) -> U,
{
    Map::new(parser, mapper)
}

/// Extension trait to add .map() method support for parsers
pub trait MapExt<'src>: Parser<'src> + Sized {
    fn map<F, U>(self, mapper: F) -> Map<Self, F>
    where
        F: Fn(Self::Output) -> U,
    {
        Map::new(self, mapper)
    }
}

/// Implement MapExt for all parsers
impl<'src, P> MapExt<'src> for P where P: Parser<'src> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chars::is_char;
    use crate::cursor::Cursor;
    use crate::cursors::TextCursor;

    #[test]
    fn test_map_transforms_value() {
        let cursor = TextCursor::new("5");
        let parser = is_char('5').map(|c| c.to_digit(10).unwrap());

        let result = parser.parse(cursor);
        assert_eq!(result.value(), Some(&5));
    }

    #[test]
    fn test_map_chaining() {
        let cursor = TextCursor::new("a");
        let parser = is_char('a')
            .map(|c| c.to_ascii_uppercase())
            .map(|c| format!("got {}", c));

        let result = parser.parse(cursor);
        assert_eq!(result.value(), Some(&"got A".to_string()));
    }

    #[test]
    fn test_map_preserves_failure() {
        let cursor = TextCursor::new("xyz");
        let parser = is_char('a').map(|c| c as u32);

        let result = parser.parse(cursor);
        assert!(!result.has_value());
        assert_eq!(result.remainder().position(), 0);
    }

    #[test]
    fn test_function_syntax() {
        let cursor = TextCursor::new("9");
        let parser = map(is_char('9'), |c| c as u8);

        assert_eq!(parser.parse(cursor).value(), Some(&b'9'));
    }
}
