use std::fmt;

/// Bounds required of a token kind enumeration
///
/// Grammar authors supply a small `Copy` enum naming their token classes;
/// its `Display` form is what failure messages call the token ("number",
/// "identifier", ...).
pub trait TokenKind: Copy + PartialEq + fmt::Debug + fmt::Display {}

impl<K> TokenKind for K where K: Copy + PartialEq + fmt::Debug + fmt::Display {}

/// A classified, positioned substring produced by tokenization
///
/// `span` is the exact text matched and `position` its byte offset in the
/// original input. Tokens are immutable once produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'src, K> {
    kind: K,
    span: &'src str,
    position: usize,
}

impl<'src, K> Token<'src, K> {
    pub fn new(kind: K, span: &'src str, position: usize) -> Self {
        Token {
            kind,
            span,
            position,
        }
    }

    pub fn kind(&self) -> K
    where
        K: Copy,
    {
        self.kind
    }

    pub fn span(&self) -> &'src str {
        self.span
    }

    /// Byte offset of the span in the original text
    pub fn position(&self) -> usize {
        self.position
    }
}

impl<K: fmt::Display> fmt::Display for Token<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} '{}'", self.kind, self.span)
    }
}
