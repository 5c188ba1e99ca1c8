//! # Block Styles
//!
//! Fixed mapping from [`BlockKind`] to the visual style the renderer applies.
//! Lookup is an exhaustive `match`, so a new block kind cannot be added
//! without choosing its style.

use crate::parsing::blocks::BlockKind;

/// Built-in font faces available to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontFace {
    Regular,
    Bold,
    Oblique,
}

impl FontFace {
    /// Face used for an emphasised run set in this face.
    pub fn emphasized(self) -> FontFace {
        match self {
            FontFace::Regular | FontFace::Bold => FontFace::Bold,
            FontFace::Oblique => FontFace::Oblique,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Center,
    Justify,
}

/// An sRGB colour with components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    /// Builds a colour from a `0xRRGGBB` literal.
    pub const fn hex(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xFF) as f32 / 255.0,
            g: ((rgb >> 8) & 0xFF) as f32 / 255.0,
            b: (rgb & 0xFF) as f32 / 255.0,
        }
    }
}

/// Visual style of one block kind. Sizes and distances are in points.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockStyle {
    pub font: FontFace,
    pub size: f32,
    /// Baseline-to-baseline distance; `None` means 1.2 × `size`.
    pub leading: Option<f32>,
    pub color: Rgb,
    pub space_before: f32,
    pub space_after: f32,
    pub left_indent: f32,
    pub right_indent: f32,
    pub alignment: Alignment,
}

impl BlockStyle {
    pub fn line_height(&self) -> f32 {
        self.leading.unwrap_or(self.size * 1.2)
    }

    const fn heading(size: f32, color: u32, before: f32, after: f32) -> Self {
        Self {
            font: FontFace::Bold,
            size,
            leading: None,
            color: Rgb::hex(color),
            space_before: before,
            space_after: after,
            left_indent: 0.0,
            right_indent: 0.0,
            alignment: Alignment::Left,
        }
    }
}

/// The style for every block kind.
#[derive(Debug, Clone)]
pub struct StyleTable {
    title: BlockStyle,
    heading1: BlockStyle,
    heading2: BlockStyle,
    heading3: BlockStyle,
    body: BlockStyle,
    bullet: BlockStyle,
    quote: BlockStyle,
    spacer: BlockStyle,
}

impl StyleTable {
    /// The house style: Helvetica faces on a muted blue-grey palette.
    pub fn standard() -> Self {
        let body = BlockStyle {
            font: FontFace::Regular,
            size: 11.0,
            leading: Some(14.0),
            color: Rgb::hex(0x3B4252),
            space_before: 6.0,
            space_after: 6.0,
            left_indent: 0.0,
            right_indent: 0.0,
            alignment: Alignment::Justify,
        };
        Self {
            title: BlockStyle {
                font: FontFace::Bold,
                size: 24.0,
                leading: None,
                color: Rgb::hex(0x2E3440),
                space_before: 0.0,
                space_after: 30.0,
                left_indent: 0.0,
                right_indent: 0.0,
                alignment: Alignment::Center,
            },
            heading1: BlockStyle::heading(16.0, 0x5E81AC, 20.0, 12.0),
            heading2: BlockStyle::heading(14.0, 0x81A1C1, 15.0, 10.0),
            heading3: BlockStyle::heading(12.0, 0x88C0D0, 12.0, 8.0),
            bullet: BlockStyle {
                leading: None,
                space_before: 4.0,
                space_after: 4.0,
                left_indent: 20.0,
                alignment: Alignment::Left,
                ..body.clone()
            },
            quote: BlockStyle {
                font: FontFace::Oblique,
                leading: None,
                color: Rgb::hex(0x4C566A),
                space_before: 12.0,
                space_after: 12.0,
                left_indent: 30.0,
                right_indent: 30.0,
                ..body.clone()
            },
            spacer: BlockStyle {
                size: 0.0,
                leading: Some(0.0),
                space_before: 0.0,
                space_after: 0.0,
                ..body.clone()
            },
            body,
        }
    }

    pub fn style(&self, kind: BlockKind) -> &BlockStyle {
        match kind {
            BlockKind::Title => &self.title,
            BlockKind::Heading1 => &self.heading1,
            BlockKind::Heading2 => &self.heading2,
            BlockKind::Heading3 => &self.heading3,
            BlockKind::GeneratedDate | BlockKind::Paragraph => &self.body,
            BlockKind::Bullet => &self.bullet,
            BlockKind::Quote => &self.quote,
            BlockKind::Spacer => &self.spacer,
        }
    }
}

impl Default for StyleTable {
    fn default() -> Self {
        Self::standard()
    }
}
