use crate::cursor::Cursor;
use crate::parser::Parser;
use crate::result::{Failure, ParseResult};

/// Parser combinator for ordered alternation
///
/// Tries the first parser; if it fails without consuming input, tries the
/// second at the same cursor. A *partial* failure of the first parser (input
/// consumed before failing) is returned immediately and the second parser is
/// never attempted; backtracking past consumption must be requested
/// explicitly with [`attempt`](crate::attempt::AttemptExt::attempt). When
/// both alternatives fail empty, their failures are merged with
/// [`Failure::combine`].
pub struct Or<P1, P2> {
    first: P1,
    second: P2,
}

impl<P1, P2> Or<P1, P2> {
    pub fn new(first: P1, second: P2) -> Self {
        Or { first, second }
    }
}

impl<'src, P1, P2, C, O> Parser<'src> for Or<P1, P2>
where
    C: Cursor,
    P1: Parser<'src, Cursor = C, Output = O>,
    P2: Parser<'src, Cursor = C, Output = O>,
{
    type Cursor = C;
    type Output = O;

    fn parse(&self, cursor: C) -> ParseResult<C, O> {
        let first = match self.first.parse(cursor) {
            ParseResult::Success(success) => return ParseResult::Success(success),
            ParseResult::Failure(failure) => {
                if failure.is_partial(&cursor) {
                    return ParseResult::Failure(failure);
                }
                failure
            }
        };

        match self.second.parse(cursor) {
            ParseResult::Success(success) => ParseResult::Success(success),
            ParseResult::Failure(second) => ParseResult::Failure(Failure::combine(first, second)),
        }
    }
}

/// Convenience function to create an Or parser
pub fn or<'src, P1, P2, C, O>(first: P1, second: P2) -> Or<P1, P2>
where
    C: Cursor,
    P1: Parser<'src, Cursor = C, Output = O>,
    P2: Parser<'src, Cursor = C, Output = O>,
{
    Or::new(first, second)
}

/// Extension trait to add .or() method support for parsers
pub trait OrExt<'src>: Parser<'src> + Sized {
    fn or<P>(self, other: P) -> Or<Self, P>
    where
        P: Parser<'src, Cursor = Self::Cursor, Output = Self::Output>,
    {
        Or::new(self, other)
    }
}

/// Implement OrExt for all parsers
impl<'src, P> OrExt<'src> for P where P: Parser<'src> {}
