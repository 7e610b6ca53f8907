//! Cursor implementations for the two input kinds: raw text and token
//! streams.

pub mod text;
pub mod token;

pub use text::TextCursor;
pub use token::TokenCursor;
