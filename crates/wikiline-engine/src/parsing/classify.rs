use super::kinds::{Header, ListItem};
use super::nodes::LineNode;

/// A classification rule: recognise a line and build its node in one step.
pub type Rule = fn(&str) -> Option<LineNode>;

/// Rules in priority order. The first one that matches wins; a line no rule
/// claims becomes [`LineNode::Plain`].
pub const RULES: &[(&str, Rule)] = &[
    ("header", Header::try_match as Rule),
    ("list_item", ListItem::try_match as Rule),
];

/// Classifies individual source lines into [`LineNode`]s.
///
/// Classification is total and context free: each line is looked at on its
/// own and always yields exactly one node.
#[derive(Debug, Default, Clone, Copy)]
pub struct WikiLineClassifier;

impl WikiLineClassifier {
    pub fn classify(&self, line: &str) -> LineNode {
        for (name, rule) in RULES {
            if let Some(node) = rule(line) {
                log::trace!("classified {line:?} as {name}");
                return node;
            }
        }
        log::trace!("classified {line:?} as plain");
        LineNode::plain(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::nodes::NodeKind;
    use rstest::rstest;

    #[rstest]
    #[case("h2. Title", NodeKind::Header)]
    #[case("- item", NodeKind::ListItem)]
    #[case("just words", NodeKind::Plain)]
    #[case("", NodeKind::Plain)]
    #[case("h6. not a header", NodeKind::Plain)]
    #[case("h1.missing space", NodeKind::Plain)]
    fn classifies(#[case] line: &str, #[case] kind: NodeKind) {
        assert_eq!(WikiLineClassifier.classify(line).kind(), kind);
    }

    #[test]
    fn header_rule_runs_before_list_rule() {
        assert_eq!(RULES[0].0, "header");
        assert_eq!(RULES[1].0, "list_item");
    }

    #[test]
    fn plain_keeps_text_verbatim() {
        assert_eq!(
            WikiLineClassifier.classify("  a & b\r"),
            LineNode::plain("  a & b\r")
        );
    }
}
