pub mod convert;
pub mod io;
pub mod parsing;
pub mod render;
pub mod style;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use convert::{BatchReport, ConvertError, Converter};
pub use io::*;
pub use parsing::{
    DEFAULT_DATE_FORMAT, FALLBACK_TITLE, ParseOptions, ParsedSummary,
    blocks::{BlockKind, LayoutBlock},
    parse_summary,
};
pub use render::{PageGeometry, PageSize, PdfRenderer, RenderError, Renderer};
pub use style::{BlockStyle, StyleTable};
