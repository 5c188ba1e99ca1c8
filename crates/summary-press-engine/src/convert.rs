//! Conversion pipeline: summary text in, rendered document out.

use std::fs;
use std::path::{Path, PathBuf};

use crate::{
    io::{self, IoError},
    parsing::{ParseOptions, parse_summary},
    render::{PdfRenderer, RenderError, Renderer},
    style::StyleTable,
};

#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("Input unavailable: {0}")]
    InputUnavailable(#[from] IoError),
    #[error("Render failed: {0}")]
    RenderFailure(#[from] RenderError),
}

/// Outcome of a folder conversion.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// `(input, output)` pairs that were written.
    pub succeeded: Vec<(PathBuf, PathBuf)>,
    pub failed: Vec<(PathBuf, ConvertError)>,
}

impl BatchReport {
    pub fn total(&self) -> usize {
        self.succeeded.len() + self.failed.len()
    }

    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Parses and renders summaries with a fixed set of options.
///
/// Every call parses with fresh state, so one converter can serve many
/// documents.
pub struct Converter<R = PdfRenderer> {
    pub options: ParseOptions,
    pub styles: StyleTable,
    pub renderer: R,
}

impl Converter<PdfRenderer> {
    pub fn new(options: ParseOptions, renderer: PdfRenderer) -> Self {
        Self::with_renderer(options, renderer)
    }
}

impl Default for Converter<PdfRenderer> {
    fn default() -> Self {
        Self::new(ParseOptions::default(), PdfRenderer::default())
    }
}

impl<R: Renderer> Converter<R> {
    pub fn with_renderer(options: ParseOptions, renderer: R) -> Self {
        Self {
            options,
            styles: StyleTable::standard(),
            renderer,
        }
    }

    pub fn convert_text(&self, text: &str, output: &Path) -> Result<(), ConvertError> {
        let parsed = parse_summary(text, &self.options);
        self.renderer.render(&parsed.blocks, &self.styles, output)?;
        Ok(())
    }

    pub fn convert_file(&self, input: &Path, output: &Path) -> Result<(), ConvertError> {
        let text = io::read_summary(input)?;
        self.convert_text(&text, output)?;
        log::info!("Created {} from {}", output.display(), input.display());
        Ok(())
    }

    /// Converts every matching file in `input_dir` into `output_dir`.
    ///
    /// A failing file is recorded in the report and the batch moves on.
    /// Only an unusable input folder or an output folder that cannot be
    /// created fails the whole batch.
    pub fn convert_folder(
        &self,
        input_dir: &Path,
        output_dir: &Path,
        extension: &str,
    ) -> Result<BatchReport, IoError> {
        let inputs = io::discover_inputs(input_dir, extension)?;
        fs::create_dir_all(output_dir).map_err(|source| IoError::Io {
            path: output_dir.to_path_buf(),
            source,
        })?;

        let mut report = BatchReport::default();
        if inputs.is_empty() {
            log::warn!(
                "No .{extension} files found in {}",
                input_dir.display()
            );
            return Ok(report);
        }
        log::info!("Found {} file(s) to process", inputs.len());

        for input in inputs {
            let output = io::output_path_for(&input, output_dir);
            match self.convert_file(&input, &output) {
                Ok(()) => report.succeeded.push((input, output)),
                Err(e) => {
                    log::warn!("Failed to convert {}: {e}", input.display());
                    report.failed.push((input, e));
                }
            }
        }
        Ok(report)
    }
}
