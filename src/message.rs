use crate::parser::Parser;
use crate::result::{Failure, ParseResult};
use std::borrow::Cow;

/// Parser combinator that replaces the message of any failure
///
/// The failure's remainder and error position survive; its expectations do
/// not, since the fixed text supersedes them.
pub struct Message<P> {
    parser: P,
    text: Cow<'static, str>,
}

impl<P> Message<P> {
    pub fn new(parser: P, text: impl Into<Cow<'static, str>>) -> Self {
        Message {
            parser,
            text: text.into(),
        }
    }
}

impl<'src, P> Parser<'src> for Message<P>
where
    P: Parser<'src>,
{
    type Cursor = P::Cursor;
    type Output = P::Output;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<Self::Cursor, Self::Output> {
        match self.parser.parse(cursor) {
            ParseResult::Success(success) => ParseResult::Success(success),
            ParseResult::Failure(failure) => {
                let replaced = match failure.error_position() {
                    Some(position) => {
                        Failure::at(failure.remainder(), position, self.text.clone())
                    }
                    None => Failure::with_message(failure.remainder(), self.text.clone()),
                };
                ParseResult::Failure(replaced)
            }
        }
    }
}

/// Convenience function to create a Message parser
pub fn message<'src, P>(parser: P, text: impl Into<Cow<'static, str>>) -> Message<P>
where
    P: Parser<'src>,
{
    Message::new(parser, text)
}

/// Extension trait to add .message() method support for parsers
pub trait MessageExt<'src>: Parser<'src> + Sized {
    fn message(self, text: impl Into<Cow<'static, str>>) -> Message<Self> {
        Message::new(self, text)
    }
}

/// Implement MessageExt for all parsers
impl<'src, P> MessageExt<'src> for P where P: Parser<'src> {}
