//! Title extraction from the document's first primary heading.

use super::blocks::kinds::Heading;

/// Title used when the document has no usable primary heading.
pub const FALLBACK_TITLE: &str = "eBook Summary";

/// Primary heading marker, including the separating space.
const PRIMARY_MARKER: &str = "# ";

/// Prefix of the banner form `# BOOK SUMMARY: <title>`.
const BANNER_PREFIX: &str = "# BOOK SUMMARY: ";

/// Returns the document title, or `fallback` when none qualifies.
///
/// Lines are trimmed and scanned in order. The first primary heading wins:
/// `# BOOK SUMMARY: <rest>` yields `<rest>`, any other `# <text>` yields
/// `<text>`. The bare `# BOOK SUMMARY` banner is skipped.
pub fn extract_title(text: &str, fallback: &str) -> String {
    for line in text.lines().map(str::trim) {
        if !line.starts_with(PRIMARY_MARKER) || Heading::is_suppressed(line) {
            continue;
        }
        if let Some(rest) = line.strip_prefix(BANNER_PREFIX) {
            return rest.trim().to_string();
        }
        return line[PRIMARY_MARKER.len()..].trim().to_string();
    }
    fallback.to_string()
}
