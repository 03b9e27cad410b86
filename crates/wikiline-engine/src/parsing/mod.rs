//! # Parsing
//!
//! Source text is split on `\n` and every line is classified on its own.
//! There is no block nesting and no construct spans more than one line.
//!
//! ## Modules
//!
//! - **`nodes`**: `Document`, `LineNode` and `NodeKind`
//! - **`kinds`**: per-kind line patterns (`Header`, `ListItem`)
//! - **`classify`**: `WikiLineClassifier` and its ordered rule table
//! - **`inline`**: escaping plus link and image expansion for free text
//!
//! ## Key Invariants
//!
//! - `parse(s).len() == s.split('\n').count()` for every input
//! - Priority is header, then list item, then plain

pub mod classify;
pub mod inline;
pub mod kinds;
pub mod nodes;

pub use classify::{RULES, Rule, WikiLineClassifier};
pub use inline::{escape_html, inline_markup};
pub use nodes::{Document, LineNode, NodeKind};

/// Parses source text into a [`Document`] with one node per line.
///
/// The empty string is a single empty line.
pub fn parse(source: &str) -> Document {
    let classifier = WikiLineClassifier;
    let lines = source
        .split('\n')
        .map(|line| classifier.classify(line))
        .collect::<Vec<_>>();
    log::debug!("parsed {} lines", lines.len());
    Document::new(lines)
}
