use super::kinds::{BlockQuote, Bullet, Heading};

/// Structural role of a single line, decided from the line alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass<'a> {
    /// Empty after trimming.
    Blank,
    /// The bare `# BOOK SUMMARY` banner, dropped entirely.
    Suppressed,
    /// `#`, `##` or `###` heading with its trimmed text.
    Heading { level: u8, text: &'a str },
    /// `*` or `-` item with the marker stripped.
    Bullet { text: &'a str },
    /// `>` quote with the prefix stripped.
    Quote { text: &'a str },
    /// Anything else; paragraph text.
    Text { text: &'a str },
}

/// Classifies individual lines for block construction.
pub struct SummaryLineClassifier;

impl SummaryLineClassifier {
    /// Classifies a line into a [`LineClass`].
    ///
    /// The line is trimmed first. Prefixes are tested in priority order
    /// (blank, banner, heading, bullet, quote); the first match wins and
    /// everything else is paragraph text.
    pub fn classify<'a>(&self, line: &'a str) -> LineClass<'a> {
        let line = line.trim();

        if line.is_empty() {
            return LineClass::Blank;
        }
        if Heading::is_suppressed(line) {
            return LineClass::Suppressed;
        }
        if let Some((level, text)) = Heading::split(line) {
            return LineClass::Heading { level, text };
        }
        if let Some(text) = Bullet::strip_marker(line) {
            return LineClass::Bullet { text };
        }
        if let Some(text) = BlockQuote::strip_prefix(line) {
            return LineClass::Quote { text };
        }
        LineClass::Text { text: line }
    }
}
