/// Heading block type with owned marker constants.
pub struct Heading;

impl Heading {
    /// The heading marker character.
    pub const MARKER: char = '#';

    /// Deepest heading level recognised; longer marker runs still count as this level.
    pub const MAX_LEVEL: u8 = 3;

    /// The bare summary banner. It is dropped from the block stream entirely.
    pub const SUPPRESSED: &'static str = "# BOOK SUMMARY";

    /// Splits a trimmed heading line into `(level, text)`.
    ///
    /// Returns `None` when the line does not start with [`Self::MARKER`].
    /// Only the first [`Self::MAX_LEVEL`] markers are consumed, so
    /// `#### Deep` yields level 3 with text `# Deep`.
    pub fn split(line: &str) -> Option<(u8, &str)> {
        if !line.starts_with(Self::MARKER) {
            return None;
        }
        let level = line
            .chars()
            .take(Self::MAX_LEVEL as usize)
            .take_while(|&c| c == Self::MARKER)
            .count();
        Some((level as u8, line[level..].trim()))
    }

    pub fn is_suppressed(line: &str) -> bool {
        line == Self::SUPPRESSED
    }
}
