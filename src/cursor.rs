/// Generic cursor trait for parser combinators
///
/// A cursor is an immutable marker into a sequence of elements (characters or
/// tokens). Advancing never mutates; it returns a new cursor, so any number of
/// cursors into the same input can be held and advanced independently. This
/// abstraction lets the combinators work over different element streams while
/// sharing one implementation.
///
/// Equality compares position and source identity only, never element
/// content. The combinators rely on this to detect that a parser consumed
/// nothing.
pub trait Cursor: Copy + PartialEq + Sized {
    /// The type of elements this cursor iterates over
    type Element;

    /// Whether merging two failed alternatives at the same position keeps the
    /// first branch's message rather than the second's. Token streams report
    /// the first; text reports the second.
    const MERGE_KEEPS_FIRST_MESSAGE: bool;

    /// Get the element at the current cursor position, or `None` at the end
    /// of the sequence
    fn value(&self) -> Option<Self::Element>;

    /// Advance the cursor to the next element
    ///
    /// If already at the end, returns a cursor still positioned at the end
    fn next(self) -> Self;

    /// Advance the cursor by `count` elements
    fn advance(self, count: usize) -> Self {
        let mut cursor = self;
        for _ in 0..count {
            cursor = cursor.next();
        }
        cursor
    }

    /// Get the current position in the sequence
    ///
    /// For end-of-sequence cursors, this returns the length of the sequence
    fn position(&self) -> usize;

    /// Check if the cursor is at the end of the sequence
    fn at_end(&self) -> bool {
        self.value().is_none()
    }

    /// Render one element for failure messages, e.g. `'x'` for a character
    /// or `number '12'` for a token
    fn describe(element: &Self::Element) -> String;
}
