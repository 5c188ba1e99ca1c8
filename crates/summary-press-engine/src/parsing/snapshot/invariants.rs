use crate::parsing::{
    blocks::{BlockKind, LayoutBlock},
    inline::emphasize_bold,
};

/// Validates parser output invariants.
///
/// Asserts that:
/// - The sequence opens with `Title`, `Spacer`, `GeneratedDate`, `Spacer`
/// - `Title` and `GeneratedDate` appear exactly once
/// - No paragraph is empty
/// - Bullet text holds no untransformed `**span**` (paragraph fragments are
///   transformed before joining, so a joined paragraph may legitimately
///   contain a pair that spans two source lines)
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(blocks: &[LayoutBlock]) {
    let head: Vec<BlockKind> = blocks.iter().take(4).map(LayoutBlock::kind).collect();
    assert_eq!(
        head,
        [
            BlockKind::Title,
            BlockKind::Spacer,
            BlockKind::GeneratedDate,
            BlockKind::Spacer
        ],
        "preamble malformed: {head:?}"
    );

    for kind in [BlockKind::Title, BlockKind::GeneratedDate] {
        let count = blocks.iter().filter(|b| b.kind() == kind).count();
        assert_eq!(count, 1, "expected exactly one {kind:?}, found {count}");
    }

    for b in blocks {
        match b {
            LayoutBlock::Paragraph(text) => assert!(!text.is_empty(), "empty paragraph emitted"),
            LayoutBlock::Bullet(text) => assert_no_bold_markup(text),
            _ => {}
        }
    }
}

fn assert_no_bold_markup(text: &str) {
    assert_eq!(
        emphasize_bold(text),
        text,
        "bold markup left untransformed in {text:?}"
    );
}
