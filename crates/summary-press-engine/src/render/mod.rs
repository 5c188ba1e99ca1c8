//! # Rendering
//!
//! Turns a layout block sequence into a paginated PDF.
//!
//! - **`layout`**: pure pagination and line breaking into positioned runs
//! - **`metrics`**: Helvetica advance widths used to measure lines
//! - **`pdf`**: writes laid-out pages with `printpdf` built-in fonts

pub mod layout;
pub mod metrics;
pub mod pdf;

use std::path::{Path, PathBuf};

use crate::{parsing::blocks::LayoutBlock, style::StyleTable};

pub use layout::{Page, PageGeometry, PageSize, PlacedRun, layout};
pub use metrics::text_width;
pub use pdf::PdfRenderer;

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Failed to build PDF: {0}")]
    Pdf(String),
    #[error("Cannot write {path}: {source}")]
    Unwritable {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Produces a document artifact from layout blocks.
pub trait Renderer {
    fn render(
        &self,
        blocks: &[LayoutBlock],
        styles: &StyleTable,
        output: &Path,
    ) -> Result<(), RenderError>;
}
