//! # Inline Markup
//!
//! Free text is rewritten in a single left-to-right scan over one combined
//! pattern with three alternatives, tried in this order at each position:
//!
//! 1. a character that needs escaping (`& ' \` " < >`)
//! 2. an image directive, `!URL!`
//! 3. a bare URL
//!
//! Matches never overlap and replaced text is not scanned again, so a URL
//! inside an image directive is never also turned into a link.

use std::borrow::Cow;
use std::sync::OnceLock;

use regex::{Captures, Regex};

/// `http`/`https` URL with a dotted host and a 2 to 6 letter TLD.
///
/// The boundary after the TLD is ASCII-only, so `http://mixi.jpです` still
/// links `http://mixi.jp`.
const URL: &str = r"https?://(?:www\.)?[-a-zA-Z0-9@:%._\+~#=]{2,256}\.[a-z]{2,6}(?-u:\b)(?:[-a-zA-Z0-9@:%_\+.~#?&/=]*)";

fn markup_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(&format!(r#"([&'`"<>])|!({URL})!|({URL})"#)).expect("Invalid markup regex")
    })
}

fn entity(c: char) -> Option<&'static str> {
    match c {
        '&' => Some("&amp;"),
        '\'' => Some("&#x27;"),
        '`' => Some("&#x60;"),
        '"' => Some("&quot;"),
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        _ => None,
    }
}

/// Replaces the six HTML-significant characters with entities.
///
/// Not idempotent: `&amp;` becomes `&amp;amp;`. Borrows when there is
/// nothing to escape.
pub fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(|c: char| entity(c).is_some()) {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len() + text.len() / 4);
    for c in text.chars() {
        match entity(c) {
            Some(e) => out.push_str(e),
            None => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Escapes `text` and expands `!URL!` into `<img>` and bare URLs into `<a>`.
///
/// The URL is escaped once and the result used for both `href` and link text.
pub fn inline_markup(text: &str) -> Cow<'_, str> {
    markup_pattern().replace_all(text, |caps: &Captures<'_>| {
        if let Some(special) = caps.get(1) {
            escape_html(special.as_str()).into_owned()
        } else if let Some(img) = caps.get(2) {
            format!(r#"<img src="{}">"#, escape_html(img.as_str()))
        } else if let Some(url) = caps.get(3) {
            let href = escape_html(url.as_str());
            format!(r#"<a href="{href}">{href}</a>"#)
        } else {
            caps[0].to_string()
        }
    })
}
