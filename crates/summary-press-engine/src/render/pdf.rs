use std::{fs, path::Path};

use printpdf::{BuiltinFont, Color, IndirectFontRef, Mm, PdfDocument};

use crate::{
    parsing::blocks::LayoutBlock,
    style::{FontFace, Rgb, StyleTable},
};

use super::{
    RenderError, Renderer,
    layout::{PageGeometry, layout},
};

const LAYER_NAME: &str = "Layer 1";

fn mm(points: f32) -> Mm {
    Mm(points * 25.4 / 72.0)
}

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    oblique: IndirectFontRef,
}

impl Fonts {
    fn get(&self, face: FontFace) -> &IndirectFontRef {
        match face {
            FontFace::Regular => &self.regular,
            FontFace::Bold => &self.bold,
            FontFace::Oblique => &self.oblique,
        }
    }
}

fn pdf_err(e: impl std::fmt::Display) -> RenderError {
    RenderError::Pdf(e.to_string())
}

fn fill(color: Rgb) -> Color {
    Color::Rgb(printpdf::Rgb::new(color.r, color.g, color.b, None))
}

/// Renders layout blocks to PDF with the Helvetica built-in faces.
#[derive(Debug, Clone, Default)]
pub struct PdfRenderer {
    pub geometry: PageGeometry,
}

impl PdfRenderer {
    pub fn new(geometry: PageGeometry) -> Self {
        Self { geometry }
    }

    /// Renders to an in-memory PDF.
    pub fn render_to_bytes(
        &self,
        blocks: &[LayoutBlock],
        styles: &StyleTable,
    ) -> Result<Vec<u8>, RenderError> {
        let pages = layout(blocks, styles, &self.geometry);
        let title = blocks
            .iter()
            .find_map(|b| match b {
                LayoutBlock::Title(t) => Some(t.clone()),
                _ => None,
            })
            .unwrap_or_default();

        let (w, h) = (mm(self.geometry.width), mm(self.geometry.height));
        let (doc, first_page, first_layer) = PdfDocument::new(title, w, h, LAYER_NAME);
        let fonts = Fonts {
            regular: doc.add_builtin_font(BuiltinFont::Helvetica).map_err(pdf_err)?,
            bold: doc
                .add_builtin_font(BuiltinFont::HelveticaBold)
                .map_err(pdf_err)?,
            oblique: doc
                .add_builtin_font(BuiltinFont::HelveticaOblique)
                .map_err(pdf_err)?,
        };

        for (i, page) in pages.iter().enumerate() {
            let (page_idx, layer_idx) = if i == 0 {
                (first_page, first_layer)
            } else {
                doc.add_page(w, h, LAYER_NAME)
            };
            let layer = doc.get_page(page_idx).get_layer(layer_idx);
            for run in &page.runs {
                layer.set_fill_color(fill(run.color));
                layer.use_text(
                    run.text.as_str(),
                    run.size,
                    mm(run.x),
                    mm(run.y),
                    fonts.get(run.font),
                );
            }
        }

        log::debug!("Rendered {} page(s)", pages.len());
        doc.save_to_bytes().map_err(pdf_err)
    }
}

impl Renderer for PdfRenderer {
    fn render(
        &self,
        blocks: &[LayoutBlock],
        styles: &StyleTable,
        output: &Path,
    ) -> Result<(), RenderError> {
        let bytes = self.render_to_bytes(blocks, styles)?;
        fs::write(output, bytes).map_err(|source| RenderError::Unwritable {
            path: output.to_path_buf(),
            source,
        })
    }
}
