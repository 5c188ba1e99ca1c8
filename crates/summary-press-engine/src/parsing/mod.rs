pub mod blocks;
pub mod inline;
pub mod snapshot;
pub mod title;

#[cfg(test)]
mod tests;

use std::fmt::Write;

use chrono::{Local, NaiveDate};

use blocks::{BlockBuilder, LayoutBlock, SummaryLineClassifier};

pub use title::{FALLBACK_TITLE, extract_title};

/// Default `strftime` pattern for the generated-date line, e.g. `March 04, 2025`.
pub const DEFAULT_DATE_FORMAT: &str = "%B %d, %Y";

/// Per-document inputs that do not come from the text itself.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Date shown on the generated-date line.
    pub generated_on: NaiveDate,
    /// `strftime` pattern for `generated_on`.
    pub date_format: String,
    /// Title used when the document has no primary heading.
    pub fallback_title: String,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            generated_on: Local::now().date_naive(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            fallback_title: FALLBACK_TITLE.to_string(),
        }
    }
}

impl ParseOptions {
    /// Renders the generated-date line.
    ///
    /// An unusable `date_format` falls back to [`DEFAULT_DATE_FORMAT`].
    pub fn generated_line(&self) -> String {
        let mut date = String::new();
        if write!(date, "{}", self.generated_on.format(&self.date_format)).is_err() {
            log::warn!(
                "Unusable date format {:?}, using {DEFAULT_DATE_FORMAT:?}",
                self.date_format
            );
            date = self.generated_on.format(DEFAULT_DATE_FORMAT).to_string();
        }
        format!("Generated on {date}")
    }
}

#[derive(Debug)]
pub struct ParsedSummary {
    pub blocks: Vec<LayoutBlock>,
}

/// Parses summary text into the ordered layout block sequence.
///
/// Total over any input: every line that is not structural becomes
/// paragraph text, and an empty document yields only the preamble.
pub fn parse_summary(text: &str, options: &ParseOptions) -> ParsedSummary {
    let classifier = SummaryLineClassifier;
    let title = extract_title(text, &options.fallback_title);
    let mut builder = BlockBuilder::new(title, options.generated_line());

    for line in text.lines() {
        builder.push(classifier.classify(line));
    }

    let blocks = builder.finish();
    log::debug!("Parsed summary into {} layout blocks", blocks.len());
    ParsedSummary { blocks }
}
