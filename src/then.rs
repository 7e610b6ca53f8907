use crate::parser::Parser;
use crate::result::ParseResult;

/// Parser combinator that sequences a parser with a value-dependent
/// continuation (monadic bind)
///
/// On success the continuation function receives the value and produces the
/// parser to run at the remainder. A failure of the first parser propagates
/// unchanged; a failure of the continuation is returned verbatim, so its
/// remainder may sit past the input cursor (a partial failure).
pub struct Then<P, F> {
    parser: P,
    next: F,
}

impl<P, F> Then<P, F> {
    pub fn new(parser: P, next: F) -> Self {
        Then { parser, next }
    }
}

impl<'src, P, F, Q> Parser<'src> for Then<P, F>
where
    P: Parser<'src>,
    F: Fn(P::Output) -> Q,
    Q: Parser<'src, Cursor = P::Cursor>,
{
    type Cursor = P::Cursor;
    type Output = Q::Output;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<Self::Cursor, Self::Output> {
        match self.parser.parse(cursor) {
            ParseResult::Success(first) => (self.next)(first.value).parse(first.remainder),
            ParseResult::Failure(failure) => ParseResult::Failure(failure),
        }
    }
}

/// Convenience function to create a Then parser
pub fn then<'src, P, F, Q>(parser: P, next: F) -> Then<P, F>
where
    P: Parser<'src>,
    F: Fn(P::Output) -> Q,
    Q: Parser<'src, Cursor = P::Cursor>,
{
    Then::new(parser, next)
}

/// Extension trait to add .then() method support for parsers
pub trait ThenExt<'src>: Parser<'src> + Sized {
    fn then<F, Q>(self, next: F) -> Then<Self, F>
    where
        F: Fn(Self::Output) -> Q,
        Q: Parser<'src, Cursor = Self::Cursor>,
    {
        Then::new(self, next)
    }
}

/// Implement ThenExt for all parsers
impl<'src, P> ThenExt<'src> for P where P: Parser<'src> {}
