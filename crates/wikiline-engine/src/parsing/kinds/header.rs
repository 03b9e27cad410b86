use std::sync::OnceLock;

use regex::Regex;

use super::{LABEL_CHAR, SPACE};
use crate::parsing::nodes::LineNode;

/// `h1.` .. `h5.` header lines.
pub struct Header;

impl Header {
    pub const MAX_LEVEL: u8 = 5;

    fn pattern() -> &'static Regex {
        static PATTERN: OnceLock<Regex> = OnceLock::new();
        PATTERN.get_or_init(|| {
            Regex::new(&format!(
                r"^h([1-{max}])\.{SPACE}+({LABEL_CHAR}*)$",
                max = Self::MAX_LEVEL
            ))
            .expect("Invalid header regex")
        })
    }

    /// Returns a `Header` node when the whole line is a header.
    pub fn try_match(line: &str) -> Option<LineNode> {
        let caps = Self::pattern().captures(line)?;
        let level = caps[1].parse::<u8>().ok()?;
        Some(LineNode::Header {
            label: caps[2].to_string(),
            level,
        })
    }
}
