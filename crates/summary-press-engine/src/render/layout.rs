//! Pagination and line breaking over layout blocks.
//!
//! Positions are in points with the origin at the bottom-left of the page,
//! matching PDF user space.

use crate::{
    parsing::{
        blocks::{BlockKind, LayoutBlock},
        inline::{TextRun, split_runs},
    },
    style::{Alignment, BlockStyle, FontFace, Rgb, StyleTable},
};

use super::metrics::glyph_width;
pub use super::metrics::text_width;

/// Paper sizes understood by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageSize {
    #[default]
    A4,
    Letter,
}

impl PageSize {
    /// `(width, height)` in points.
    pub fn dimensions(self) -> (f32, f32) {
        match self {
            PageSize::A4 => (595.28, 841.89),
            PageSize::Letter => (612.0, 792.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub width: f32,
    pub height: f32,
    pub margin_left: f32,
    pub margin_right: f32,
    pub margin_top: f32,
    pub margin_bottom: f32,
}

impl PageGeometry {
    /// Geometry with the same margin on all four sides.
    pub fn new(size: PageSize, margin: f32) -> Self {
        let (width, height) = size.dimensions();
        Self {
            width,
            height,
            margin_left: margin,
            margin_right: margin,
            margin_top: margin,
            margin_bottom: margin,
        }
    }

    pub fn content_width(&self) -> f32 {
        self.width - self.margin_left - self.margin_right
    }

    pub fn content_height(&self) -> f32 {
        self.height - self.margin_top - self.margin_bottom
    }
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self::new(PageSize::A4, 72.0)
    }
}

/// A run of text at a fixed baseline position.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedRun {
    pub text: String,
    pub font: FontFace,
    pub size: f32,
    pub color: Rgb,
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub runs: Vec<PlacedRun>,
}

/// One unbreakable word, possibly mixing faces (`<b>Key:</b>,` is one word).
#[derive(Debug, Default)]
struct Word {
    segments: Vec<(String, FontFace)>,
}

impl Word {
    fn push(&mut self, c: char, font: FontFace) {
        match self.segments.last_mut() {
            Some((text, f)) if *f == font => text.push(c),
            _ => self.segments.push((c.to_string(), font)),
        }
    }

    fn width(&self, size: f32) -> f32 {
        self.segments
            .iter()
            .map(|(text, font)| text_width(text, *font, size))
            .sum()
    }

    /// Breaks the word between characters so each piece fits `available`.
    fn split_to_fit(self, size: f32, available: f32) -> Vec<Word> {
        let mut pieces = vec![];
        let mut current = Word::default();
        let mut width = 0.0;
        for (text, font) in self.segments {
            for c in text.chars() {
                let w = f32::from(glyph_width(c, font)) * size / 1000.0;
                if !current.segments.is_empty() && width + w > available {
                    pieces.push(std::mem::take(&mut current));
                    width = 0.0;
                }
                current.push(c, font);
                width += w;
            }
        }
        if !current.segments.is_empty() {
            pieces.push(current);
        }
        pieces
    }
}

/// Inline emphasis applies to body text only; other kinds keep their text verbatim.
fn runs_for(kind: BlockKind, text: &str) -> Vec<TextRun> {
    match kind {
        BlockKind::Bullet | BlockKind::Paragraph => split_runs(text),
        _ => vec![TextRun::plain(text)],
    }
}

fn words(runs: &[TextRun], base: FontFace) -> Vec<Word> {
    let mut out = vec![];
    let mut current = Word::default();
    for run in runs {
        let font = if run.bold { base.emphasized() } else { base };
        for c in run.text.chars() {
            if c.is_whitespace() {
                if !current.segments.is_empty() {
                    out.push(std::mem::take(&mut current));
                }
            } else {
                current.push(c, font);
            }
        }
    }
    if !current.segments.is_empty() {
        out.push(current);
    }
    out
}

/// Greedy line filling; a word wider than `available` is broken across lines.
fn break_lines(words: Vec<Word>, size: f32, space: f32, available: f32) -> Vec<Vec<Word>> {
    let mut lines: Vec<Vec<Word>> = vec![];
    let mut line: Vec<Word> = vec![];
    let mut width = 0.0;
    let fitted = words.into_iter().flat_map(|word| {
        if word.width(size) > available {
            word.split_to_fit(size, available)
        } else {
            vec![word]
        }
    });
    for word in fitted {
        let w = word.width(size);
        if !line.is_empty() && width + space + w > available {
            lines.push(std::mem::take(&mut line));
            width = 0.0;
        }
        if !line.is_empty() {
            width += space;
        }
        width += w;
        line.push(word);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

struct Cursor {
    pages: Vec<Page>,
    /// Distance from the top of the content area.
    y: f32,
}

impl Cursor {
    fn at_page_top(&self) -> bool {
        self.y == 0.0
    }

    fn new_page(&mut self) {
        self.pages.push(Page::default());
        self.y = 0.0;
    }

    fn page(&mut self) -> &mut Page {
        if self.pages.is_empty() {
            self.pages.push(Page::default());
        }
        let last = self.pages.len() - 1;
        &mut self.pages[last]
    }
}

/// Lays out `blocks` into pages.
///
/// Always returns at least one page. Spacers and leading block space are
/// dropped at the top of a page; a page is only opened for a line that
/// does not fit, so no trailing blank page is produced.
pub fn layout(blocks: &[LayoutBlock], styles: &StyleTable, geometry: &PageGeometry) -> Vec<Page> {
    let mut cur = Cursor {
        pages: vec![Page::default()],
        y: 0.0,
    };
    for block in blocks {
        let style = styles.style(block.kind());
        match block {
            LayoutBlock::Spacer(height) => {
                if cur.at_page_top() {
                    continue;
                }
                cur.y += height;
            }
            other => {
                let runs = runs_for(other.kind(), other.text().unwrap_or_default());
                place_text(&mut cur, &runs, style, geometry);
            }
        }
    }
    cur.pages
}

fn place_text(cur: &mut Cursor, runs: &[TextRun], style: &BlockStyle, geometry: &PageGeometry) {
    let content_height = geometry.content_height();
    if !cur.at_page_top() {
        cur.y += style.space_before;
    }

    let available = geometry.content_width() - style.left_indent - style.right_indent;
    let space = text_width(" ", style.font, style.size);
    let line_height = style.line_height();
    let lines = break_lines(words(runs, style.font), style.size, space, available);
    let last = lines.len().saturating_sub(1);

    for (i, line) in lines.into_iter().enumerate() {
        if cur.y + line_height > content_height && !cur.at_page_top() {
            cur.new_page();
        }
        let word_width: f32 = line.iter().map(|w| w.width(style.size)).sum();
        let gaps = line.len().saturating_sub(1) as f32;
        let line_width = word_width + space * gaps;
        let (offset, gap) = match style.alignment {
            Alignment::Center => (((available - line_width) / 2.0).max(0.0), space),
            // The last line of a justified block stays ragged.
            Alignment::Justify if i < last && gaps > 0.0 => {
                (0.0, (available - word_width) / gaps)
            }
            Alignment::Left | Alignment::Justify => (0.0, space),
        };
        let baseline = geometry.height - geometry.margin_top - cur.y - line_height * 0.8;
        let x = geometry.margin_left + style.left_indent + offset;
        place_line(cur.page(), line, style, space, gap, x, baseline);
        cur.y += line_height;
    }

    cur.y += style.space_after;
}

/// Emits one run per stretch of same-face text on a line.
///
/// Words are `gap` apart. When the gap is wider than a space (justified
/// lines) each word gets its own run so its position is exact.
fn place_line(
    page: &mut Page,
    line: Vec<Word>,
    style: &BlockStyle,
    space: f32,
    gap: f32,
    x: f32,
    y: f32,
) {
    let stretched = gap > space;
    let mut pending: Option<PlacedRun> = None;
    let mut x = x;
    for (i, word) in line.into_iter().enumerate() {
        if i > 0 {
            x += gap;
        }
        for (j, (text, font)) in word.segments.into_iter().enumerate() {
            let lead = if i > 0 && j == 0 && !stretched { " " } else { "" };
            match pending.as_mut() {
                Some(run) if run.font == font && (j > 0 || !stretched) => {
                    run.text.push_str(lead);
                    run.text.push_str(&text);
                }
                _ => {
                    if let Some(run) = pending.take() {
                        page.runs.push(run);
                    }
                    // a merged leading space starts the run one space early
                    let start = if lead.is_empty() { x } else { x - space };
                    pending = Some(PlacedRun {
                        text: format!("{lead}{text}"),
                        font,
                        size: style.size,
                        color: style.color,
                        x: start,
                        y,
                    });
                }
            }
            x += text_width(&text, font, style.size);
        }
    }
    if let Some(run) = pending {
        page.runs.push(run);
    }
}
