//! Converts a small line-oriented wiki dialect into HTML.
//!
//! ```text
//! h2. Title        -> <h2>Title</h2>
//! - item           -> &nbsp;&#x25CF; item
//! http://mixi.jp   -> <a href="http://mixi.jp">http://mixi.jp</a>
//! ```
//!
//! Everything is pure and synchronous: [`parse`] builds a [`Document`],
//! [`Document::render`] turns it into HTML, and [`render`] does both.

pub mod parsing;
pub mod render;

pub use parsing::{Document, LineNode, NodeKind, escape_html, inline_markup, parse};

/// Parses and renders `source` in one step.
pub fn render(source: &str) -> String {
    parse(source).render()
}
