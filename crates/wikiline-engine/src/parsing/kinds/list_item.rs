use std::sync::OnceLock;

use regex::Regex;

use super::{LABEL_CHAR, SPACE};
use crate::parsing::nodes::LineNode;

/// Flat list items: `- a`, `** b`, `# c`.
///
/// Leading whitespace is captured together with the markers, so ` - x`
/// has level 2. Indentation and marker count are not told apart.
pub struct ListItem;

impl ListItem {
    fn pattern() -> &'static Regex {
        static PATTERN: OnceLock<Regex> = OnceLock::new();
        PATTERN.get_or_init(|| {
            Regex::new(&format!(r"^({SPACE}*[-*#]+){SPACE}*({LABEL_CHAR}*)"))
                .expect("Invalid list item regex")
        })
    }

    pub fn try_match(line: &str) -> Option<LineNode> {
        let caps = Self::pattern().captures(line)?;
        Some(LineNode::ListItem {
            label: caps[2].to_string(),
            level: caps[1].chars().count(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("- foo", "foo", 1)]
    #[case(" - bar", "bar", 2)]
    #[case("** double", "double", 2)]
    #[case("#numbered", "numbered", 1)]
    #[case("\t-*# mixed", "mixed", 4)]
    #[case("---", "", 3)]
    #[case("- trailing\r", "trailing", 1)]
    #[case("- <b>raw</b>", "<b>raw</b>", 1)]
    #[case("\u{FEFF}- foo", "foo", 2)]
    fn matches_items(#[case] line: &str, #[case] label: &str, #[case] level: usize) {
        assert_eq!(
            ListItem::try_match(line),
            Some(LineNode::ListItem {
                label: label.to_string(),
                level
            })
        );
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("plain - dash later")]
    #[case("+ plus")]
    #[case("\u{85}- foo")]
    fn rejects_non_items(#[case] line: &str) {
        assert_eq!(ListItem::try_match(line), None);
    }

    #[test]
    fn level_counts_characters_not_bytes() {
        // U+3000 is whitespace and three bytes long.
        let node = ListItem::try_match("\u{3000}- wide").unwrap();
        assert_eq!(node.level(), Some(2));
    }
}
