//! Source/expected pairs that exercise the renderer end to end.
//!
//! A case file is TOML with one `[[case]]` table per pair:
//!
//! ```toml
//! [[case]]
//! name = "header"
//! source = "h1. foo"
//! expected = "<h1>foo</h1>"
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CaseError {
    #[error("Failed to read case file at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse case file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Case {
    #[serde(default)]
    pub name: Option<String>,
    pub source: String,
    pub expected: String,
}

impl Case {
    fn new(name: &str, source: &str, expected: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            source: source.to_string(),
            expected: expected.to_string(),
        }
    }

    pub fn label(&self) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => format!("{:?}", self.source),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct CaseFile {
    #[serde(rename = "case", default)]
    pub cases: Vec<Case>,
}

impl CaseFile {
    pub fn load(path: &Path) -> Result<Self, CaseError> {
        let content = std::fs::read_to_string(path).map_err(|source| CaseError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| CaseError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// The cases the renderer has always been demonstrated with.
pub fn builtin() -> Vec<Case> {
    vec![
        Case::new("blank lines around text", "\nfoo\n", "\nfoo\n"),
        Case::new("apostrophe", "b'", "b&#x27;"),
        Case::new("header", "h1. foo", "<h1>foo</h1>"),
        Case::new(
            "image",
            "!http://www.host.com/image.gif!",
            r#"<img src="http://www.host.com/image.gif">"#,
        ),
        Case::new(
            "auto link",
            "http://mixi.jp",
            r#"<a href="http://mixi.jp">http://mixi.jp</a>"#,
        ),
        Case::new(
            "list",
            "- foo\n - bar",
            "&nbsp;&#x25CF; foo\n&nbsp;&nbsp;&#x25CB; bar",
        ),
    ]
}

#[derive(Debug)]
pub struct Failure<'a> {
    pub case: &'a Case,
    pub actual: String,
}

/// Renders every case and returns the ones whose output differs.
pub fn check(cases: &[Case]) -> Vec<Failure<'_>> {
    cases
        .iter()
        .filter_map(|case| {
            log::debug!("==> {} <==", case.source.replace('\n', "\\n"));
            let actual = wikiline_engine::render(&case.source);
            (actual != case.expected).then_some(Failure { case, actual })
        })
        .collect()
}
