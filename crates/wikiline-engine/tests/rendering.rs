use pretty_assertions::assert_eq;
use rstest::rstest;
use wikiline_engine::{LineNode, NodeKind, parse, render};

/// Literal cases from the demonstration harness.
#[rstest]
#[case::blank_lines_around_text("\nfoo\n", "\nfoo\n")]
#[case::apostrophe("b'", "b&#x27;")]
#[case::header("h1. foo", "<h1>foo</h1>")]
#[case::image(
    "!http://www.host.com/image.gif!",
    r#"<img src="http://www.host.com/image.gif">"#
)]
#[case::auto_link("http://mixi.jp", r#"<a href="http://mixi.jp">http://mixi.jp</a>"#)]
#[case::list("- foo\n - bar", "&nbsp;&#x25CF; foo\n&nbsp;&nbsp;&#x25CB; bar")]
fn harness_cases(#[case] source: &str, #[case] expected: &str) {
    assert_eq!(render(source), expected);
}

#[rstest]
#[case("h2. Title", "<h2>Title</h2>")]
#[case("h5. <deep>", "<h5>&lt;deep&gt;</h5>")]
#[case("h6. Title", "h6. Title")]
#[case("", "")]
#[case("*** star", "&nbsp;&nbsp;&nbsp;&#x2605; star")]
#[case("#### four", "&nbsp;&nbsp;&nbsp;&nbsp;&#x25A0; four")]
#[case::byte_order_mark("\u{FEFF}- foo", "&nbsp;&nbsp;&#x25CB; foo")]
#[case::next_line_is_not_space("\u{85}- foo", "\u{85}- foo")]
#[case::japanese_after_url(
    "http://mixi.jpの日記",
    r#"<a href="http://mixi.jp">http://mixi.jp</a>の日記"#
)]
fn single_lines(#[case] source: &str, #[case] expected: &str) {
    assert_eq!(render(source), expected);
}

#[rstest]
#[case("")]
#[case("\n")]
#[case("one")]
#[case("h1. a\n- b\n\nhttp://mixi.jp\n")]
#[case("\r\n\r\n")]
#[case("- a\n-- b\n--- c\n---- d\n----- e")]
fn output_line_count_matches_input(#[case] source: &str) {
    let doc = parse(source);
    assert_eq!(doc.len(), source.split('\n').count());
    assert_eq!(render(source).split('\n').count(), doc.len());
}

#[test]
fn leading_whitespace_counts_toward_list_level() {
    let doc = parse(" - bar\n  - baz");
    assert_eq!(
        doc.lines(),
        &[
            LineNode::ListItem {
                label: "bar".into(),
                level: 2
            },
            LineNode::ListItem {
                label: "baz".into(),
                level: 3
            },
        ]
    );
}

#[test]
fn header_wins_over_list() {
    // A header label may itself look like a list marker.
    let doc = parse("h1. - not a list");
    assert_eq!(doc.lines()[0].kind(), NodeKind::Header);
    assert_eq!(render("h1. - not a list"), "<h1>- not a list</h1>");
}

#[test]
fn mixed_document() {
    let source = "h3. Links & images\n!http://www.host.com/a.png!\n* see http://mixi.jp\nplain \"text\"";
    insta::assert_snapshot!(
        render(source).replace('\n', " | "),
        @r#"<h3>Links &amp; images</h3> | <img src="http://www.host.com/a.png"> | &nbsp;&#x25CF; see http://mixi.jp | plain &quot;text&quot;"#
    );
}

#[test]
fn parse_is_independent_per_call() {
    let first = render("- a");
    let second = render("- a");
    assert_eq!(first, second);
}
