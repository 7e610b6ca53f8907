use crate::cursor::Cursor;
use crate::result::ParseResult;

/// Core parser trait for parser combinators
///
/// A parser is a pure mapping from a cursor to a [`ParseResult`]: it has no
/// retained state and is safe to invoke repeatedly on distinct cursors. The
/// `'src` lifetime ties outputs that borrow from the input (spans, tokens)
/// to the input itself.
///
/// Failures are returned, never raised; whether a failure consumed input is
/// judged by comparing its remainder against the cursor passed in.
pub trait Parser<'src> {
    /// The cursor kind this parser reads from
    type Cursor: Cursor;
    type Output;

    /// Apply this parser at the given cursor position
    fn parse(&self, cursor: Self::Cursor) -> ParseResult<Self::Cursor, Self::Output>;
}
