//! # LexiComb - Tokenizing Parser Combinator Library
//!
//! A parser combinator library built around an explicit tokenization pass:
//! a [`Tokenizer`] splits raw text into classified [`Token`]s, and the same
//! combinator algebra then parses either characters or tokens.
//!
//! LexiComb provides composable, type-safe parsers that can be combined to
//! build complex parsing logic from simple building blocks. The library
//! emphasizes:
//!
//! - **Ordered alternation**: `or` commits to a branch once it consumes input,
//!   with `attempt` restoring backtracking where it is wanted
//! - **Rich error reporting**: Failures carry expectations and positions that
//!   render as readable messages with source context
//! - **One algebra, two levels**: The same combinators drive character-level
//!   and token-level grammars, bridged by `apply`

pub mod apply;
pub mod at_end;
pub mod attempt;
pub mod chars;
pub mod cursor;
pub mod cursors;
pub mod error;
pub mod kind;
pub mod many;
pub mod map;
pub mod message;
pub mod named;
pub mod not;
pub mod numerics;
pub mod or;
pub mod parser;
pub mod pure;
pub mod result;
pub mod some;
pub mod then;
pub mod token;
pub mod tokenizer;
pub mod value;

pub use apply::{Apply, ApplyExt, apply};
pub use at_end::{AtEnd, AtEndExt, at_end};
pub use attempt::{Attempt, AttemptExt, attempt};
pub use cursor::Cursor;
pub use cursors::{TextCursor, TokenCursor};
pub use error::{ParseError, SourceLoc};
pub use kind::{IsKind, kind};
pub use many::{Many, ManyExt, many};
pub use map::{Map, MapExt, map};
pub use message::{Message, MessageExt, message};
pub use named::{Named, NamedExt, named};
pub use not::{Not, NotExt, not};
pub use or::{Or, OrExt, or};
pub use parser::Parser;
pub use pure::{Pure, pure};
pub use result::{Expectations, Failure, ParseResult, Success};
pub use some::{Some, SomeExt, some};
pub use then::{Then, ThenExt, then};
pub use token::{Token, TokenKind};
pub use tokenizer::{Tokenizer, Tokens};
pub use value::{Value, ValueExt, value};
