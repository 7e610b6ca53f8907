use crate::parser::Parser;
use crate::result::{Failure, ParseResult};

/// Parser combinator that makes any failure backtrackable
///
/// Re-reports every failure of the wrapped parser at the original input
/// cursor with no message or expectations, turning a partial failure into an
/// empty one. Composed with [`or`](crate::or::Or), this lets alternation
/// retry past consumed input.
pub struct Attempt<P> {
    parser: P,
}

impl<P> Attempt<P> {
    pub fn new(parser: P) -> Self {
        Attempt { parser }
    }
}

impl<'src, P> Parser<'src> for Attempt<P>
where
    P: Parser<'src>,
{
    type Cursor = P::Cursor;
    type Output = P::Output;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<Self::Cursor, Self::Output> {
        match self.parser.parse(cursor) {
            ParseResult::Success(success) => ParseResult::Success(success),
            ParseResult::Failure(_) => ParseResult::Failure(Failure::empty(cursor)),
        }
    }
}

/// Convenience function to create an Attempt parser
pub fn attempt<'src, P>(parser: P) -> Attempt<P>
where
    P: Parser<'src>,
{
    Attempt::new(parser)
}

/// Extension trait to add .attempt() method support for parsers
pub trait AttemptExt<'src>: Parser<'src> + Sized {
    fn attempt(self) -> Attempt<Self> {
        Attempt::new(self)
    }
}

/// Implement AttemptExt for all parsers
impl<'src, P> AttemptExt<'src> for P where P: Parser<'src> {}
