/// Paragraph block type (marker struct).
///
/// Paragraphs have no delimiters - they are the default leaf block
/// when no other block opener matches. Consecutive text lines are
/// buffered and joined into one paragraph.
pub struct Paragraph;

impl Paragraph {
    /// Separator placed between buffered line fragments.
    pub const JOIN: &'static str = " ";

    pub fn join(fragments: &[String]) -> String {
        fragments.join(Self::JOIN)
    }
}
