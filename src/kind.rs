use crate::cursor::Cursor;
use crate::cursors::TokenCursor;
use crate::parser::Parser;
use crate::result::{Failure, ParseResult};
use crate::token::{Token, TokenKind};

/// Parser that matches a single token of a specific kind
pub struct IsKind<K> {
    expected: K,
}

/// Convenience function to create an IsKind parser
pub fn kind<K: TokenKind>(expected: K) -> IsKind<K> {
    IsKind { expected }
}

impl<'src, K: TokenKind + 'src> Parser<'src> for IsKind<K> {
    type Cursor = TokenCursor<'src, K>;
    type Output = Token<'src, K>;

    fn parse(
        &self,
        cursor: TokenCursor<'src, K>,
    ) -> ParseResult<TokenCursor<'src, K>, Token<'src, K>> {
        match cursor.value() {
            Some(token) if token.kind() == self.expected => {
                ParseResult::success(token, cursor, cursor.next())
            }
            _ => Failure::expecting(cursor, self.expected.to_string()).into(),
        }
    }
}
