//! Document-level tests for the parsing module.

use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::parsing::{
    FALLBACK_TITLE, ParseOptions,
    blocks::{BlockKind, LayoutBlock, gaps},
    parse_summary, snapshot,
};

fn options() -> ParseOptions {
    ParseOptions {
        generated_on: NaiveDate::from_ymd_opt(2025, 3, 4).unwrap(),
        ..ParseOptions::default()
    }
}

fn parse(text: &str) -> Vec<LayoutBlock> {
    let blocks = parse_summary(text, &options()).blocks;
    snapshot::invariants(&blocks);
    blocks
}

/// Blocks after the four-block preamble.
fn body(text: &str) -> Vec<LayoutBlock> {
    parse(text).split_off(4)
}

#[rstest]
#[case("### X", LayoutBlock::Heading3("X".into()))]
#[case("## X", LayoutBlock::Heading2("X".into()))]
#[case("# X", LayoutBlock::Heading1("X".into()))]
fn heading_levels_follow_marker_length(#[case] line: &str, #[case] expected: LayoutBlock) {
    assert_eq!(body(line), vec![expected]);
}

#[test]
fn paragraph_accumulates_until_blank_line() {
    assert_eq!(
        body("Line one.\nLine two.\n\n"),
        vec![
            LayoutBlock::Paragraph("Line one. Line two.".into()),
            LayoutBlock::Spacer(gaps::BLANK_LINE),
        ]
    );
}

#[test]
fn banner_title_is_first_and_bare_banner_is_dropped() {
    let blocks = parse("# BOOK SUMMARY: Sample Title - Author\n\n# BOOK SUMMARY\n\nBody.");
    assert_eq!(blocks[0], LayoutBlock::Title("Sample Title - Author".into()));
    assert!(
        !blocks
            .iter()
            .any(|b| b.text() == Some("BOOK SUMMARY")),
        "bare banner must not become a heading"
    );
}

#[test]
fn bullet_with_bold_key() {
    assert_eq!(
        body("* **Key:** value"),
        vec![LayoutBlock::Bullet("• <b>Key:</b> value".into())]
    );
}

#[rstest]
#[case(r#"> "Already quoted.""#, r#""Already quoted.""#)]
#[case("> Not quoted.", r#""Not quoted.""#)]
fn quote_is_wrapped_once(#[case] line: &str, #[case] expected: &str) {
    assert_eq!(body(line), vec![LayoutBlock::Quote(expected.into())]);
}

#[test]
fn trailing_paragraph_is_flushed_at_end_of_input() {
    assert_eq!(
        body("## Section\nLast words\nwithout a blank line"),
        vec![
            LayoutBlock::Heading2("Section".into()),
            LayoutBlock::Paragraph("Last words without a blank line".into()),
        ]
    );
}

#[test]
fn empty_document_yields_only_preamble() {
    assert_eq!(
        parse(""),
        vec![
            LayoutBlock::Title(FALLBACK_TITLE.into()),
            LayoutBlock::Spacer(gaps::AFTER_TITLE),
            LayoutBlock::GeneratedDate("Generated on March 04, 2025".into()),
            LayoutBlock::Spacer(gaps::AFTER_DATE),
        ]
    );
}

#[test]
fn banner_with_title_is_kept_as_heading() {
    assert_eq!(
        body("# BOOK SUMMARY: T"),
        vec![LayoutBlock::Heading1("BOOK SUMMARY: T".into())]
    );
}

#[test]
fn nested_bullets_flatten_to_items() {
    assert_eq!(
        body("* **Key takeaways:**\n    * First\n    - Second"),
        vec![
            LayoutBlock::Bullet("• <b>Key takeaways:</b>".into()),
            LayoutBlock::Bullet("• First".into()),
            LayoutBlock::Bullet("• Second".into()),
        ]
    );
}

#[test]
fn crlf_line_endings() {
    assert_eq!(
        body("a\r\nb\r\n\r\n"),
        vec![
            LayoutBlock::Paragraph("a b".into()),
            LayoutBlock::Spacer(gaps::BLANK_LINE),
        ]
    );
}

#[test]
fn block_order_follows_line_order() {
    let kinds: Vec<BlockKind> = body("# A\ntext\n* b\n> q\n## C")
        .iter()
        .map(LayoutBlock::kind)
        .collect();
    assert_eq!(
        kinds,
        vec![
            BlockKind::Heading1,
            BlockKind::Paragraph,
            BlockKind::Bullet,
            BlockKind::Quote,
            BlockKind::Heading2,
        ]
    );
}

#[test]
fn parses_are_independent() {
    let first = parse("* item\n");
    let mut second = parse("text");
    assert_eq!(
        second.split_off(4),
        vec![LayoutBlock::Paragraph("text".into())],
        "list state from a previous document must not leak"
    );
    assert_eq!(first.len(), 5);
}

#[test]
fn custom_date_format() {
    let options = ParseOptions {
        date_format: "%Y-%m-%d".into(),
        ..options()
    };
    assert_eq!(options.generated_line(), "Generated on 2025-03-04");
}

#[test]
fn unusable_date_format_falls_back() {
    let options = ParseOptions {
        date_format: "%H:%M".into(),
        ..options()
    };
    assert_eq!(options.generated_line(), "Generated on March 04, 2025");
}

#[test]
fn custom_fallback_title() {
    let options = ParseOptions {
        fallback_title: "Untitled".into(),
        ..options()
    };
    let blocks = parse_summary("no heading", &options).blocks;
    assert_eq!(blocks[0], LayoutBlock::Title("Untitled".into()));
}
