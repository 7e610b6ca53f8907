use crate::cursor::Cursor;
use crate::error::ParseError;
use smallvec::SmallVec;
use std::borrow::Cow;

/// Expected-construct labels accumulated by a failure
///
/// Almost always one or two entries, so they live inline.
pub type Expectations = SmallVec<[Cow<'static, str>; 2]>;

/// The outcome of applying a parser at a cursor
///
/// A success carries the parsed value together with the cursor at the start
/// of the match and the cursor after it. A failure is a plain value, not a
/// raised error; it flows back through every combinator by explicit return.
#[derive(Debug, Clone)]
pub enum ParseResult<C, T> {
    Success(Success<C, T>),
    Failure(Failure<C>),
}

/// The success half of a [`ParseResult`]
#[derive(Debug, Clone)]
pub struct Success<C, T> {
    pub value: T,
    /// Cursor at the start of the match
    pub location: C,
    /// Cursor after the match; its position never precedes `location`'s
    pub remainder: C,
}

/// The failure half of a [`ParseResult`]
///
/// Whether a failure is *empty* (nothing consumed) or *partial* (some input
/// consumed before failing) is not stored; it is derived by comparing the
/// remainder against the cursor the parser was invoked with, via
/// [`Failure::is_partial`]. That distinction drives alternation's
/// backtracking policy.
#[derive(Debug, Clone)]
pub struct Failure<C> {
    remainder: C,
    message: Option<Cow<'static, str>>,
    expectations: Option<Expectations>,
    error_position: Option<usize>,
}

impl<C> Failure<C> {
    /// Failure with no message and no expectations
    pub fn empty(remainder: C) -> Self {
        Failure {
            remainder,
            message: None,
            expectations: None,
            error_position: None,
        }
    }

    /// Failure expecting a single named construct
    pub fn expecting(remainder: C, expectation: impl Into<Cow<'static, str>>) -> Self {
        Failure {
            remainder,
            message: None,
            expectations: Some(SmallVec::from_iter([expectation.into()])),
            error_position: None,
        }
    }

    /// Failure carrying a human-readable message
    pub fn with_message(remainder: C, message: impl Into<Cow<'static, str>>) -> Self {
        Failure {
            remainder,
            message: Some(message.into()),
            expectations: None,
            error_position: None,
        }
    }

    /// Failure whose reported position differs from the remainder, used when
    /// the failure occurred inside a sub-grammar bridged from another cursor
    /// kind
    pub fn at(remainder: C, error_position: usize, message: impl Into<Cow<'static, str>>) -> Self {
        Failure {
            remainder,
            message: Some(message.into()),
            expectations: None,
            error_position: Some(error_position),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn expectations(&self) -> &[Cow<'static, str>] {
        self.expectations.as_deref().unwrap_or(&[])
    }

    pub fn error_position(&self) -> Option<usize> {
        self.error_position
    }
}

impl<C: Cursor> Failure<C> {
    /// Cursor where the failure was detected
    pub fn remainder(&self) -> C {
        self.remainder
    }

    /// True if input was consumed before the failure occurred, judged
    /// against the cursor the parser was invoked with
    pub fn is_partial(&self, from: &C) -> bool {
        self.remainder.position() != from.position()
    }

    /// Merge two failures encountered as alternatives at the same cursor
    ///
    /// With differing remainders the second failure is adopted verbatim; the
    /// first's message and expectations are discarded. This is deliberately
    /// not a furthest-progress heuristic: grammar authors rely on alternation
    /// order for error precedence.
    ///
    /// With equal remainders the expectation lists are concatenated in order
    /// (duplicates preserved), and the surviving message follows the cursor
    /// kind's policy ([`Cursor::MERGE_KEEPS_FIRST_MESSAGE`]).
    pub fn combine(first: Self, second: Self) -> Self {
        if first.remainder.position() != second.remainder.position() {
            return second;
        }

        let message = if C::MERGE_KEEPS_FIRST_MESSAGE {
            first.message
        } else {
            second.message
        };

        let expectations = match (first.expectations, second.expectations) {
            (Some(mut lhs), Some(rhs)) => {
                lhs.extend(rhs);
                Some(lhs)
            }
            (lhs, None) => lhs,
            (None, rhs) => rhs,
        };

        Failure {
            remainder: second.remainder,
            message,
            expectations,
            error_position: second.error_position,
        }
    }

    /// Render the failure as a message fragment, e.g.
    /// `unexpected 'x', expected digit`
    ///
    /// Synthesized only when a human needs to see the failure; combination
    /// never formats eagerly.
    pub fn fragment(&self) -> String {
        if let Some(message) = &self.message {
            return message.to_string();
        }

        let mut out = match self.remainder.value() {
            Some(element) => format!("unexpected {}", C::describe(&element)),
            None => String::from("unexpected end of input"),
        };

        let expectations = self.expectations();
        if !expectations.is_empty() {
            out.push_str(", expected ");
            for (i, expectation) in expectations.iter().enumerate() {
                if i > 0 {
                    out.push_str(" or ");
                }
                out.push_str(expectation);
            }
        }

        out
    }

    /// Convert into an owned, renderable error
    ///
    /// The position is the distinct error position when one was recorded
    /// (bridged sub-grammar failures), otherwise the remainder's position.
    pub fn to_error(&self) -> ParseError {
        let position = self
            .error_position
            .unwrap_or_else(|| self.remainder.position());
        ParseError::new(position, self.fragment())
    }
}

impl<C, T> From<Failure<C>> for ParseResult<C, T> {
    fn from(failure: Failure<C>) -> Self {
        ParseResult::Failure(failure)
    }
}

impl<C, T> ParseResult<C, T> {
    pub fn success(value: T, location: C, remainder: C) -> Self {
        ParseResult::Success(Success {
            value,
            location,
            remainder,
        })
    }

    pub fn has_value(&self) -> bool {
        matches!(self, ParseResult::Success(_))
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            ParseResult::Success(success) => Some(&success.value),
            ParseResult::Failure(_) => None,
        }
    }

    pub fn into_value(self) -> Option<T> {
        match self {
            ParseResult::Success(success) => Some(success.value),
            ParseResult::Failure(_) => None,
        }
    }

    pub fn failure(&self) -> Option<&Failure<C>> {
        match self {
            ParseResult::Success(_) => None,
            ParseResult::Failure(failure) => Some(failure),
        }
    }
}

impl<C: Cursor, T> ParseResult<C, T> {
    /// Cursor after the match on success, or where the failure was detected
    pub fn remainder(&self) -> C {
        match self {
            ParseResult::Success(success) => success.remainder,
            ParseResult::Failure(failure) => failure.remainder,
        }
    }

    /// Convert into a `Result`, rendering a failure into a [`ParseError`]
    pub fn into_result(self) -> Result<T, ParseError> {
        match self {
            ParseResult::Success(success) => Ok(success.value),
            ParseResult::Failure(failure) => Err(failure.to_error()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursors::{TextCursor, TokenCursor};
    use crate::token::Token;
    use std::fmt;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Kind {
        Number,
    }

    impl fmt::Display for Kind {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "number")
        }
    }

    fn labels<C>(failure: &Failure<C>) -> Vec<&str> {
        failure.expectations().iter().map(|e| e.as_ref()).collect()
    }

    #[test]
    fn test_empty_vs_partial() {
        let input = TextCursor::new("abc");

        let empty = Failure::empty(input);
        assert!(!empty.is_partial(&input));

        let partial = Failure::empty(input.next());
        assert!(partial.is_partial(&input));
    }

    #[test]
    fn test_combine_same_remainder_concatenates_expectations() {
        let input = TextCursor::new("abc");

        let first = Failure::expecting(input, "digit");
        let second = Failure::expecting(input, "letter");
        let merged = Failure::combine(first, second);

        assert_eq!(labels(&merged), vec!["digit", "letter"]);
        assert_eq!(merged.remainder(), input);
    }

    #[test]
    fn test_combine_preserves_duplicates_and_order() {
        let input = TextCursor::new("abc");

        let first = Failure::expecting(input, "digit");
        let second = Failure::expecting(input, "digit");
        let merged = Failure::combine(first, second);

        assert_eq!(labels(&merged), vec!["digit", "digit"]);
    }

    #[test]
    fn test_combine_different_remainders_adopts_second_verbatim() {
        let input = TextCursor::new("abc");

        // First progressed further; it is still discarded entirely.
        let first = Failure::expecting(input.next().next(), "digit");
        let second = Failure::expecting(input.next(), "letter");
        let merged = Failure::combine(first, second);

        assert_eq!(labels(&merged), vec!["letter"]);
        assert_eq!(merged.remainder().position(), 1);
    }

    #[test]
    fn test_combine_text_keeps_second_message() {
        let input = TextCursor::new("abc");

        let first = Failure::with_message(input, "first");
        let second = Failure::with_message(input, "second");
        let merged = Failure::combine(first, second);

        assert_eq!(merged.message(), Some("second"));
    }

    #[test]
    fn test_combine_token_keeps_first_message() {
        let tokens = vec![Token::new(Kind::Number, "1", 0)];
        let input = TokenCursor::new(&tokens);

        let first = Failure::with_message(input, "first");
        let second = Failure::with_message(input, "second");
        let merged = Failure::combine(first, second);

        assert_eq!(merged.message(), Some("first"));
    }

    #[test]
    fn test_fragment_prefers_message() {
        let input = TextCursor::new("abc");
        let failure = Failure::with_message(input, "bad input");

        assert_eq!(failure.fragment(), "bad input");
    }

    #[test]
    fn test_fragment_renders_element_and_expectations() {
        let input = TextCursor::new("xyz");
        let failure = Failure::combine(
            Failure::expecting(input, "digit"),
            Failure::expecting(input, "letter"),
        );

        assert_eq!(failure.fragment(), "unexpected 'x', expected digit or letter");
    }

    #[test]
    fn test_fragment_at_end_of_input() {
        let input = TextCursor::new("");
        let failure = Failure::expecting(input, "digit");

        assert_eq!(failure.fragment(), "unexpected end of input, expected digit");
    }

    #[test]
    fn test_to_error_uses_error_position_when_present() {
        let input = TextCursor::new("abc");

        let plain = Failure::with_message(input.next(), "oops");
        assert_eq!(plain.to_error().position, 1);

        let bridged = Failure::at(input, 7, "oops");
        assert_eq!(bridged.to_error().position, 7);
    }

    #[test]
    fn test_into_result() {
        let input = TextCursor::new("a");

        let ok: ParseResult<_, i32> = ParseResult::success(1, input, input.next());
        assert_eq!(ok.into_result().unwrap(), 1);

        let err: ParseResult<_, i32> = Failure::with_message(input, "oops").into();
        let error = err.into_result().unwrap_err();
        assert_eq!(error.message, "oops");
        assert_eq!(error.position, 0);
    }
}
