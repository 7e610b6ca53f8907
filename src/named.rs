use crate::parser::Parser;
use crate::result::{Failure, ParseResult};
use std::borrow::Cow;

/// Parser combinator that labels a parser with the name of the construct it
/// recognizes
///
/// On an *empty* failure the accumulated expectations are replaced with the
/// single label, so callers see "expected expression" rather than the leaf
/// details. Partial failures and successes pass through untouched. A failure
/// that carries a distinct error position (one bridged out of a sub-grammar)
/// keeps that position and its formatted message instead of the bare label.
pub struct Named<P> {
    parser: P,
    name: Cow<'static, str>,
}

impl<P> Named<P> {
    pub fn new(parser: P, name: impl Into<Cow<'static, str>>) -> Self {
        Named {
            parser,
            name: name.into(),
        }
    }
}

impl<'src, P> Parser<'src> for Named<P>
where
    P: Parser<'src>,
{
    type Cursor = P::Cursor;
    type Output = P::Output;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<Self::Cursor, Self::Output> {
        match self.parser.parse(cursor) {
            ParseResult::Success(success) => ParseResult::Success(success),
            ParseResult::Failure(failure) => {
                if failure.is_partial(&cursor) {
                    return ParseResult::Failure(failure);
                }

                if let Some(position) = failure.error_position() {
                    let fragment = failure.fragment();
                    return ParseResult::Failure(Failure::at(
                        failure.remainder(),
                        position,
                        fragment,
                    ));
                }

                ParseResult::Failure(Failure::expecting(failure.remainder(), self.name.clone()))
            }
        }
    }
}

/// Convenience function to create a Named parser
pub fn named<'src, P>(parser: P, name: impl Into<Cow<'static, str>>) -> Named<P>
where
    P: Parser<'src>,
{
    Named::new(parser, name)
}

/// Extension trait to add .named() method support for parsers
pub trait NamedExt<'src>: Parser<'src> + Sized {
    fn named(self, name: impl Into<Cow<'static, str>>) -> Named<Self> {
        Named::new(self, name)
    }
}

/// Implement NamedExt for all parsers
impl<'src, P> NamedExt<'src> for P where P: Parser<'src> {}
