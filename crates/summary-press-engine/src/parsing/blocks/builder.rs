use crate::parsing::inline::emphasize_bold;

use super::{
    classify::LineClass,
    kinds::{BlockQuote, Bullet, Paragraph},
    types::LayoutBlock,
};

/// Spacer heights in points.
pub mod gaps {
    /// After the title block.
    pub const AFTER_TITLE: f32 = 20.0;
    /// After the generated-date line.
    pub const AFTER_DATE: f32 = 30.0;
    /// Emitted for each blank line.
    pub const BLANK_LINE: f32 = 6.0;
    /// Between a bullet list and the text that follows it.
    pub const AFTER_LIST: f32 = 6.0;
}

/// Builds the layout block sequence for one document.
///
/// Holds the per-document parse state: the pending paragraph fragments and
/// whether the last non-blank line was a bullet. A builder is created per
/// document and consumed by [`BlockBuilder::finish`].
pub struct BlockBuilder {
    current_paragraph: Vec<String>,
    in_bullet_list: bool,
    out: Vec<LayoutBlock>,
}

impl BlockBuilder {
    /// Starts a document with the title and generated-date preamble.
    pub fn new(title: String, generated: String) -> Self {
        Self {
            current_paragraph: vec![],
            in_bullet_list: false,
            out: vec![
                LayoutBlock::Title(title),
                LayoutBlock::Spacer(gaps::AFTER_TITLE),
                LayoutBlock::GeneratedDate(generated),
                LayoutBlock::Spacer(gaps::AFTER_DATE),
            ],
        }
    }

    pub fn push(&mut self, c: LineClass<'_>) {
        match c {
            LineClass::Blank => {
                self.flush_paragraph();
                self.out.push(LayoutBlock::Spacer(gaps::BLANK_LINE));
                self.in_bullet_list = false;
            }
            LineClass::Suppressed => {}
            LineClass::Heading { level, text } => {
                self.flush_paragraph();
                self.out.push(LayoutBlock::heading(level, text.to_string()));
                self.in_bullet_list = false;
            }
            LineClass::Bullet { text } => {
                self.flush_paragraph();
                let text = emphasize_bold(text);
                self.out.push(LayoutBlock::Bullet(Bullet::decorate(&text)));
                self.in_bullet_list = true;
            }
            LineClass::Quote { text } => {
                self.flush_paragraph();
                let text = BlockQuote::unwrap_quotes(text);
                self.out.push(LayoutBlock::Quote(BlockQuote::wrap(text)));
                self.in_bullet_list = false;
            }
            LineClass::Text { text } => {
                if self.in_bullet_list {
                    self.out.push(LayoutBlock::Spacer(gaps::AFTER_LIST));
                    self.in_bullet_list = false;
                }
                self.current_paragraph
                    .push(emphasize_bold(text).into_owned());
            }
        }
    }

    pub fn finish(mut self) -> Vec<LayoutBlock> {
        // EOF flush
        self.flush_paragraph();
        self.out
    }

    fn flush_paragraph(&mut self) {
        if self.current_paragraph.is_empty() {
            return;
        }
        let text = Paragraph::join(&self.current_paragraph);
        self.current_paragraph.clear();
        self.out.push(LayoutBlock::Paragraph(text));
    }
}
