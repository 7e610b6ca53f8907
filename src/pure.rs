use crate::cursor::Cursor;
use crate::parser::Parser;
use crate::result::ParseResult;
use std::marker::PhantomData;

/// Parser that succeeds with a fixed value without consuming input
///
/// The monadic unit: the seed for `then` chains and the way a continuation
/// returns a computed value. Repeating it with `many` is the canonical
/// zero-width mistake.
pub struct Pure<C, T> {
    value: T,
    _cursor: PhantomData<C>,
}

impl<C, T> Pure<C, T> {
    pub fn new(value: T) -> Self {
        Pure {
            value,
            _cursor: PhantomData,
        }
    }
}

impl<'src, C, T> Parser<'src> for Pure<C, T>
where
    C: Cursor,
    T: Clone,
{
    type Cursor = C;
    type Output = T;

    fn parse(&self, cursor: C) -> ParseResult<C, T> {
        ParseResult::success(self.value.clone(), cursor, cursor)
    }
}

/// Convenience function to create a Pure parser
pub fn pure<C, T: Clone>(value: T) -> Pure<C, T> {
    Pure::new(value)
}
