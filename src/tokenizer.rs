use crate::cursor::Cursor;
use crate::cursors::TextCursor;
use crate::error::ParseError;
use crate::parser::Parser;
use crate::result::ParseResult;
use crate::token::{Token, TokenKind};
use std::iter::FusedIterator;

/// Splits raw text into classified tokens by repeatedly running a recognizer
/// parser from the current position.
///
/// The recognizer yields `Some(kind)` for a token and `None` for ignorable
/// text such as whitespace, which is consumed and skipped. Recognition stops
/// at the first position where the recognizer fails.
pub struct Tokenizer<P> {
    recognizer: P,
}

impl<P> Tokenizer<P> {
    pub fn new(recognizer: P) -> Self {
        Tokenizer { recognizer }
    }

    /// Lazy iterator over the tokens of `source`
    pub fn tokens<'src, K>(&self, source: &'src str) -> Tokens<'src, '_, P>
    where
        P: Parser<'src, Cursor = TextCursor<'src>, Output = Option<K>>,
        K: TokenKind,
    {
        Tokens {
            recognizer: &self.recognizer,
            cursor: TextCursor::new(source),
            done: false,
        }
    }

    /// Materializes the whole token list, stopping at the first error
    pub fn tokenize<'src, K>(&self, source: &'src str) -> Result<Vec<Token<'src, K>>, ParseError>
    where
        P: Parser<'src, Cursor = TextCursor<'src>, Output = Option<K>>,
        K: TokenKind,
    {
        self.tokens(source).collect()
    }
}

/// Iterator produced by [`Tokenizer::tokens`]
pub struct Tokens<'src, 'tok, P> {
    recognizer: &'tok P,
    cursor: TextCursor<'src>,
    done: bool,
}

impl<'src, P, K> Iterator for Tokens<'src, '_, P>
where
    P: Parser<'src, Cursor = TextCursor<'src>, Output = Option<K>>,
    K: TokenKind,
{
    type Item = Result<Token<'src, K>, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        loop {
            if self.cursor.at_end() {
                self.done = true;
                return None;
            }
            let start = self.cursor;
            match self.recognizer.parse(start) {
                ParseResult::Success(success) => {
                    if success.remainder.position() == start.position() {
                        panic!(
                            "tokenizer recognizer matched a zero-width span at position {}; tokenization cannot make progress",
                            start.position()
                        );
                    }
                    self.cursor = success.remainder;
                    if let Some(kind) = success.value {
                        let span = &start.text()[start.position()..success.remainder.position()];
                        return Some(Ok(Token::new(kind, span, start.position())));
                    }
                    // Ignorable text, keep scanning.
                }
                ParseResult::Failure(failure) => {
                    self.done = true;
                    return Some(Err(failure.to_error()));
                }
            }
        }
    }
}

impl<'src, P, K> FusedIterator for Tokens<'src, '_, P>
where
    P: Parser<'src, Cursor = TextCursor<'src>, Output = Option<K>>,
    K: TokenKind,
{
}
