/// Bullet list item type with owned marker constants.
pub struct Bullet;

impl Bullet {
    /// Characters that open a bullet item.
    pub const MARKERS: [char; 2] = ['*', '-'];

    /// Prefix put in front of the item text in the emitted block.
    pub const GLYPH: &'static str = "• ";

    /// Strips one leading marker and trims, or `None` when the line is not a bullet.
    ///
    /// A leading `*` always opens a bullet, even when it is the start of
    /// `**bold**` text.
    pub fn strip_marker(line: &str) -> Option<&str> {
        line.strip_prefix(Self::MARKERS).map(str::trim)
    }

    pub fn decorate(text: &str) -> String {
        format!("{}{text}", Self::GLYPH)
    }
}
