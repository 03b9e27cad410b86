/// The discriminant of a [`LineNode`], handy for assertions and logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Plain,
    Header,
    ListItem,
}

/// One classified source line.
///
/// Every source line maps to exactly one node. Labels hold the raw text;
/// escaping and link expansion happen at render time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineNode {
    /// Any line no other kind claims, kept verbatim (may be empty).
    Plain { text: String },
    /// `hN. label` with `N` in `1..=5`.
    Header { label: String, level: u8 },
    /// A run of `-`, `*` or `#` markers followed by the label.
    ListItem {
        label: String,
        /// Length of the marker run, leading whitespace included.
        level: usize,
    },
}

impl LineNode {
    pub fn plain(text: impl Into<String>) -> Self {
        Self::Plain { text: text.into() }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Plain { .. } => NodeKind::Plain,
            Self::Header { .. } => NodeKind::Header,
            Self::ListItem { .. } => NodeKind::ListItem,
        }
    }

    /// Header rank or list depth; plain lines have no level.
    pub fn level(&self) -> Option<usize> {
        match self {
            Self::Plain { .. } => None,
            Self::Header { level, .. } => Some(usize::from(*level)),
            Self::ListItem { level, .. } => Some(*level),
        }
    }
}

/// A parsed document: one node per source line, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    lines: Vec<LineNode>,
}

impl Document {
    pub fn new(lines: Vec<LineNode>) -> Self {
        Self { lines }
    }

    pub fn lines(&self) -> &[LineNode] {
        &self.lines
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Parsed documents always hold at least one line; only hand-built ones can be empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn into_lines(self) -> Vec<LineNode> {
        self.lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_by_kind() {
        assert_eq!(LineNode::plain("x").level(), None);
        let header = LineNode::Header {
            label: "t".into(),
            level: 3,
        };
        assert_eq!(header.level(), Some(3));
        assert_eq!(header.kind(), NodeKind::Header);
        let item = LineNode::ListItem {
            label: "t".into(),
            level: 7,
        };
        assert_eq!(item.level(), Some(7));
    }

    #[test]
    fn document_accessors() {
        let doc = Document::new(vec![LineNode::plain(""), LineNode::plain("a")]);
        assert_eq!(doc.len(), 2);
        assert!(!doc.is_empty());
        assert_eq!(doc.lines()[1], LineNode::plain("a"));
        assert!(Document::new(vec![]).is_empty());
        assert_eq!(doc.into_lines().len(), 2);
    }
}
