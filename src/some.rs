use crate::cursor::Cursor;
use crate::parser::Parser;
use crate::result::ParseResult;

/// Parser combinator that matches one or more occurrences of the given
/// parser
///
/// The first occurrence is mandatory; its failure propagates unchanged. The
/// rest follow [`Many`](crate::many::Many)'s rules, including the partial
/// terminating failure and the zero-width panic.
pub struct Some<P> {
    parser: P,
}

impl<P> Some<P> {
    pub fn new(parser: P) -> Self {
        Some { parser }
    }
}

impl<'src, P> Parser<'src> for Some<P>
where
    P: Parser<'src>,
{
    type Cursor = P::Cursor;
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<Self::Cursor, Self::Output> {
        let first = match self.parser.parse(cursor) {
            ParseResult::Success(success) => success,
            ParseResult::Failure(failure) => return ParseResult::Failure(failure),
        };

        let mut values = vec![first.value];
        let mut from = first.remainder;

        loop {
            match self.parser.parse(from) {
                ParseResult::Success(success) => {
                    if success.remainder.position() == from.position() {
                        panic!(
                            "some() cannot repeat a zero-width parser; no progress at position {}",
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

/// Convenience function to create a Some parser
pub fn some<'src, P>(parser: P) -> Some<P>
where
    P: Parser<'src>,
{
    Some::new(parser)
}

/// Extension trait to add .some() method support for parsers
pub trait SomeExt<'src>: Parser<'src> + Sized {
    fn some(self) -> Some<Self> {
        Some::new(self)
    }
}

/// Implement SomeExt for all parsers
impl<'src, P> SomeExt<'src> for P where P: Parser<'src> {}
