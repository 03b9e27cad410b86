//! # HTML Rendering
//!
//! Each node renders on its own; a document is its nodes joined by `\n`
//! with no trailing newline.
//!
//! | Node       | Output                                             |
//! |------------|----------------------------------------------------|
//! | `Plain`    | [`inline_markup`] of the text, no wrapping tag      |
//! | `Header`   | `<hN>` + [`escape_html`] of the label + `</hN>`     |
//! | `ListItem` | indent per level, bullet, space, label as written   |
//!
//! List labels are emitted raw on purpose; headers only get escaping.

pub mod icons;

use std::fmt;

use crate::parsing::{Document, LineNode, escape_html, inline_markup};

pub use icons::{INDENT, LIST_ICONS, list_icon};

impl LineNode {
    pub fn to_html(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for LineNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plain { text } => f.write_str(&inline_markup(text)),
            Self::Header { label, level } => {
                write!(f, "<h{level}>{}</h{level}>", escape_html(label))
            }
            Self::ListItem { label, level } => {
                for _ in 0..*level {
                    f.write_str(INDENT)?;
                }
                write!(f, "{} {label}", list_icon(*level))
            }
        }
    }
}

impl Document {
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines().iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{line}")?;
        }
        Ok(())
    }
}
