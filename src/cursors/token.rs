use crate::cursor::Cursor;
use crate::token::{Token, TokenKind};

/// A cursor over a materialized token list, yielding one `Token` at a time
///
/// Token-level grammars need random access by index (alternation re-reads
/// from a saved cursor), so the token sequence is an immutable slice rather
/// than a single-pass stream.
#[derive(Debug, Clone, Copy)]
pub struct TokenCursor<'src, K> {
    tokens: &'src [Token<'src, K>],
    index: usize,
}

impl<'src, K> TokenCursor<'src, K> {
    pub fn new(tokens: &'src [Token<'src, K>]) -> Self {
        TokenCursor { tokens, index: 0 }
    }

    /// The full token sequence this cursor indexes into
    pub fn tokens(&self) -> &'src [Token<'src, K>] {
        self.tokens
    }
}

// Position and source identity only; content is never compared.
impl<K> PartialEq for TokenCursor<'_, K> {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index && std::ptr::eq(self.tokens, other.tokens)
    }
}

impl<K> Eq for TokenCursor<'_, K> {}

impl<'src, K: TokenKind> Cursor for TokenCursor<'src, K> {
    type Element = Token<'src, K>;

    const MERGE_KEEPS_FIRST_MESSAGE: bool = true;

    fn value(&self) -> Option<Token<'src, K>> {
        self.tokens.get(self.index).copied()
    }

    fn next(self) -> Self {
        TokenCursor {
            tokens: self.tokens,
            index: (self.index + 1).min(self.tokens.len()),
        }
    }

    fn position(&self) -> usize {
        self.index
    }

    fn describe(element: &Token<'src, K>) -> String {
        element.to_string()
    }
}
