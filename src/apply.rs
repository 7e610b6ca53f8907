use crate::cursor::Cursor;
use crate::cursors::{TextCursor, TokenCursor};
use crate::parser::Parser;
use crate::result::{Failure, ParseResult};
use crate::token::{Token, TokenKind};

/// Parser that matches a token and then runs a character-level parser over
/// the full text of its span.
///
/// The grammar function receives the matched token and returns the character
/// parser to run against it, which must consume the span completely. On any
/// failure inside the span the reported position is absolute in the original
/// source, while the returned remainder stays at the unconsumed token so
/// alternation can still try other branches.
pub struct Apply<P, F> {
    tokens: P,
    grammar: F,
}

impl<P, F> Apply<P, F> {
    pub fn new(tokens: P, grammar: F) -> Self {
        Apply { tokens, grammar }
    }
}

/// Convenience function to create an Apply parser
pub fn apply<P, F>(tokens: P, grammar: F) -> Apply<P, F> {
    Apply::new(tokens, grammar)
}

impl<'src, P, F, Q, K> Parser<'src> for Apply<P, F>
where
    P: Parser<'src, Cursor = TokenCursor<'src, K>, Output = Token<'src, K>>,
    F: Fn(Token<'src, K>) -> Q,
    Q: Parser<'src, Cursor = TextCursor<'src>>,
    K: TokenKind + 'src,
{
    type Cursor = TokenCursor<'src, K>;
    type Output = Q::Output;

    fn parse(
        &self,
        cursor: TokenCursor<'src, K>,
    ) -> ParseResult<TokenCursor<'src, K>, Q::Output> {
        let matched = match self.tokens.parse(cursor) {
            ParseResult::Success(success) => success,
            ParseResult::Failure(failure) => return ParseResult::Failure(failure),
        };

        let token = matched.value;
        let span = TextCursor::new(token.span());
        let failure = match (self.grammar)(token).parse(span) {
            ParseResult::Success(success) if success.remainder.at_end() => {
                return ParseResult::success(success.value, cursor, matched.remainder);
            }
            ParseResult::Success(success) => Failure::empty(success.remainder),
            ParseResult::Failure(failure) => failure,
        };

        let offset = failure
            .error_position()
            .unwrap_or_else(|| failure.remainder().position());
        Failure::at(
            cursor,
            token.position() + offset,
            format!("invalid {}, {}", token.kind(), failure.fragment()),
        )
        .into()
    }
}

/// Extension trait providing the `.apply()` method on token parsers
pub trait ApplyExt<'src, K>:
    Parser<'src, Cursor = TokenCursor<'src, K>, Output = Token<'src, K>> + Sized
where
    K: TokenKind + 'src,
{
    fn apply<F, Q>(self, grammar: F) -> Apply<Self, F>
    where
        F: Fn(Token<'src, K>) -> Q,
        Q: Parser<'src, Cursor = TextCursor<'src>>,
    {
        Apply::new(self, grammar)
    }
}

impl<'src, K, P> ApplyExt<'src, K> for P
where
    K: TokenKind + 'src,
    P: Parser<'src, Cursor = TokenCursor<'src, K>, Output = Token<'src, K>>,
{
}
