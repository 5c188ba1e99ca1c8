/// The kind tag of a [`LayoutBlock`], used as the style-table key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    Title,
    GeneratedDate,
    Heading1,
    Heading2,
    Heading3,
    Bullet,
    Quote,
    Paragraph,
    Spacer,
}

impl BlockKind {
    /// Every kind, in the order the style table lists them.
    pub const ALL: [BlockKind; 9] = [
        BlockKind::Title,
        BlockKind::GeneratedDate,
        BlockKind::Heading1,
        BlockKind::Heading2,
        BlockKind::Heading3,
        BlockKind::Bullet,
        BlockKind::Quote,
        BlockKind::Paragraph,
        BlockKind::Spacer,
    ];

    pub fn name(self) -> &'static str {
        match self {
            BlockKind::Title => "Title",
            BlockKind::GeneratedDate => "GeneratedDate",
            BlockKind::Heading1 => "Heading1",
            BlockKind::Heading2 => "Heading2",
            BlockKind::Heading3 => "Heading3",
            BlockKind::Bullet => "Bullet",
            BlockKind::Quote => "Quote",
            BlockKind::Paragraph => "Paragraph",
            BlockKind::Spacer => "Spacer",
        }
    }
}

/// A unit of parser output, consumed once by the renderer.
///
/// `Bullet` and `Paragraph` text may carry emphasis delimiters
/// (see [`crate::parsing::inline::Emphasis`]).
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutBlock {
    Title(String),
    GeneratedDate(String),
    Heading1(String),
    Heading2(String),
    Heading3(String),
    Bullet(String),
    Quote(String),
    Paragraph(String),
    /// Vertical gap in points.
    Spacer(f32),
}

impl LayoutBlock {
    pub fn kind(&self) -> BlockKind {
        match self {
            LayoutBlock::Title(_) => BlockKind::Title,
            LayoutBlock::GeneratedDate(_) => BlockKind::GeneratedDate,
            LayoutBlock::Heading1(_) => BlockKind::Heading1,
            LayoutBlock::Heading2(_) => BlockKind::Heading2,
            LayoutBlock::Heading3(_) => BlockKind::Heading3,
            LayoutBlock::Bullet(_) => BlockKind::Bullet,
            LayoutBlock::Quote(_) => BlockKind::Quote,
            LayoutBlock::Paragraph(_) => BlockKind::Paragraph,
            LayoutBlock::Spacer(_) => BlockKind::Spacer,
        }
    }

    /// Text content, or `None` for spacers.
    pub fn text(&self) -> Option<&str> {
        match self {
            LayoutBlock::Title(t)
            | LayoutBlock::GeneratedDate(t)
            | LayoutBlock::Heading1(t)
            | LayoutBlock::Heading2(t)
            | LayoutBlock::Heading3(t)
            | LayoutBlock::Bullet(t)
            | LayoutBlock::Quote(t)
            | LayoutBlock::Paragraph(t) => Some(t),
            LayoutBlock::Spacer(_) => None,
        }
    }

    /// Builds a heading block for a level in `1..=3`; deeper levels clamp to 3.
    pub fn heading(level: u8, text: String) -> Self {
        match level {
            0 | 1 => LayoutBlock::Heading1(text),
            2 => LayoutBlock::Heading2(text),
            _ => LayoutBlock::Heading3(text),
        }
    }
}
