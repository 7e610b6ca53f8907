use crate::cursor::Cursor;
use crate::cursors::TextCursor;
use crate::parser::Parser;
use crate::result::{Failure, ParseResult};

/// Parser for unsigned 64-bit integers written as a run of ASCII digits
pub struct IntegerU64;

/// Convenience function to create an IntegerU64 parser
pub fn integer_u64() -> IntegerU64 {
    IntegerU64
}

/// Accumulates digits starting at `cursor`, failing on overflow.
/// Returns the magnitude together with the cursor past the last digit.
fn digits(start: TextCursor<'_>) -> ParseResult<TextCursor<'_>, u64> {
    let mut cursor = start;
    let mut value: u64 = 0;
    let mut seen = false;

    while let Some(c) = cursor.value() {
        let Some(digit) = c.to_digit(10) else { break };
        value = match value
            .checked_mul(10)
            .and_then(|v| v.checked_add(digit as u64))
        {
            Some(v) => v,
            None => return Failure::with_message(cursor, "number too large").into(),
        };
        seen = true;
        cursor = cursor.next();
    }

    if seen {
        ParseResult::success(value, start, cursor)
    } else {
        Failure::expecting(start, "digit").into()
    }
}

impl<'src> Parser<'src> for IntegerU64 {
    type Cursor = TextCursor<'src>;
    type Output = u64;

    fn parse(&self, cursor: TextCursor<'src>) -> ParseResult<TextCursor<'src>, u64> {
        digits(cursor)
    }
}

/// Parser for signed 64-bit integers with an optional leading minus sign
pub struct IntegerI64;

/// Convenience function to create an IntegerI64 parser
pub fn integer_i64() -> IntegerI64 {
    IntegerI64
}

impl<'src> Parser<'src> for IntegerI64 {
    type Cursor = TextCursor<'src>;
    type Output = i64;

    fn parse(&self, cursor: TextCursor<'src>) -> ParseResult<TextCursor<'src>, i64> {
        let negative = cursor.value() == Some('-');
        let digits_start = if negative { cursor.next() } else { cursor };

        let success = match digits(digits_start) {
            ParseResult::Success(s) => s,
            ParseResult::Failure(f) => return ParseResult::Failure(f),
        };

        let magnitude = success.value;
        if negative {
            // One more than i64::MAX is representable as a negative value
            if magnitude > i64::MAX as u64 + 1 {
                return Failure::with_message(success.remainder, "number too large").into();
            }
            ParseResult::success((magnitude as i64).wrapping_neg(), cursor, success.remainder)
        } else {
            if magnitude > i64::MAX as u64 {
                return Failure::with_message(success.remainder, "number too large").into();
            }
            ParseResult::success(magnitude as i64, cursor, success.remainder)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::Cursor;

    #[test]
    fn test_u64_simple() {
        let cursor = TextCursor::new("123 rest");
        let result = integer_u64().parse(cursor);

        assert_eq!(result.value(), Some(&123));
        assert_eq!(result.remainder().position(), 3);
    }

    #[test]
    fn test_u64_max() {
        let cursor = TextCursor::new("18446744073709551615");
        let result = integer_u64().parse(cursor);

        assert_eq!(result.value(), Some(&u64::MAX));
    }

    #[test]
    fn test_u64_overflow() {
        let cursor = TextCursor::new("18446744073709551616");
        let result = integer_u64().parse(cursor);

        let failure = result.failure().unwrap();
        assert!(failure.is_partial(&cursor));
        assert_eq!(failure.fragment(), "number too large");
    }

    #[test]
    fn test_u64_no_digit_is_empty_failure() {
        let cursor = TextCursor::new("abc");
        let result = integer_u64().parse(cursor);

        let failure = result.failure().unwrap();
        assert!(!failure.is_partial(&cursor));
        assert_eq!(failure.fragment(), "unexpected 'a', expected digit");
    }

    #[test]
    fn test_i64_negative() {
        let cursor = TextCursor::new("-42");
        let result = integer_i64().parse(cursor);

        assert_eq!(result.value(), Some(&-42));
        assert_eq!(result.remainder().position(), 3);
    }

    #[test]
    fn test_i64_positive() {
        let cursor = TextCursor::new("42");
        let result = integer_i64().parse(cursor);

        assert_eq!(result.value(), Some(&42));
    }

    #[test]
    fn test_i64_min() {
        let cursor = TextCursor::new("-9223372036854775808");
        let result = integer_i64().parse(cursor);

        assert_eq!(result.value(), Some(&i64::MIN));
    }

    #[test]
    fn test_i64_min_minus_one_overflows() {
        let cursor = TextCursor::new("-9223372036854775809");
        let result = integer_i64().parse(cursor);

        let failure = result.failure().unwrap();
        assert_eq!(failure.fragment(), "number too large");
    }

    #[test]
    fn test_i64_max_plus_one_overflows() {
        let cursor = TextCursor::new("9223372036854775808");
        let result = integer_i64().parse(cursor);

        assert!(result.failure().is_some());
    }

    #[test]
    fn test_i64_lone_minus_is_partial() {
        let cursor = TextCursor::new("-x");
        let result = integer_i64().parse(cursor);

        let failure = result.failure().unwrap();
        assert!(failure.is_partial(&cursor));
    }
}
