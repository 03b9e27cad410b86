//! # Line Kinds
//!
//! Each non-plain line kind owns the pattern that recognises it and the
//! conversion from a match into a [`LineNode`](crate::parsing::LineNode).
//!
//! ## Types
//!
//! - **`Header`**: `hN. label`, `N` in `1..=5`
//! - **`ListItem`**: a run of `-`, `*` or `#`, optionally indented
//!
//! Labels stop at `\r`, U+2028 and U+2029, the same characters a
//! non-dotall `.` refuses. Nothing else is a line terminator here.
//!
//! Whitespace is the narrower `SPACE` set: it includes U+FEFF, so a
//! leading byte order mark counts as indentation, and excludes U+0085.

pub mod header;
pub mod list_item;

pub use header::Header;
pub use list_item::ListItem;

/// Character class for label text.
pub(crate) const LABEL_CHAR: &str = r"[^\r\n\x{2028}\x{2029}]";

/// Whitespace between markers and labels.
pub(crate) const SPACE: &str =
    r"[\t\n\x0B\f\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}]";
