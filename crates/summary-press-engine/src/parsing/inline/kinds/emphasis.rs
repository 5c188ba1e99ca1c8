/// Bold emphasis inline type with owned delimiter constants.
///
/// Source text marks bold spans with `**`; emitted block text carries
/// the renderer-level `<b>`/`</b>` pair instead.
pub struct Emphasis;

impl Emphasis {
    /// Markdown delimiter around a bold span.
    pub const MARKDOWN: &'static str = "**";
    /// Opening delimiter in block text.
    pub const OPEN: &'static str = "<b>";
    /// Closing delimiter in block text.
    pub const CLOSE: &'static str = "</b>";

    /// Wraps `text` in the block-text delimiter pair.
    pub fn wrap(text: &str) -> String {
        format!("{}{text}{}", Self::OPEN, Self::CLOSE)
    }
}
