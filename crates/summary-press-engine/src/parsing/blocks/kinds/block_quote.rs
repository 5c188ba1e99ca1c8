/// Blockquote block type with owned delimiter constants.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    /// Straight double quote wrapped around every emitted quote.
    pub const QUOTE_MARK: char = '"';

    /// Strips the prefix and trims, or `None` when the line is not a quote.
    pub fn strip_prefix(line: &str) -> Option<&str> {
        line.strip_prefix(Self::PREFIX).map(str::trim)
    }

    /// Removes exactly one outer pair of straight double quotes, if present.
    pub fn unwrap_quotes(text: &str) -> &str {
        if text.len() >= 2
            && let Some(inner) = text
                .strip_prefix(Self::QUOTE_MARK)
                .and_then(|t| t.strip_suffix(Self::QUOTE_MARK))
        {
            return inner;
        }
        text
    }

    /// Re-wraps quote text in straight double quotes.
    pub fn wrap(text: &str) -> String {
        format!("{q}{text}{q}", q = Self::QUOTE_MARK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_single_prefix() {
        assert_eq!(BlockQuote::strip_prefix(">  hello "), Some("hello"));
    }

    #[test]
    fn strip_non_quote() {
        assert_eq!(BlockQuote::strip_prefix("hello"), None);
    }

    #[test]
    fn unwrap_one_pair_only() {
        assert_eq!(BlockQuote::unwrap_quotes("\"said\""), "said");
        assert_eq!(BlockQuote::unwrap_quotes("\"\"twice\"\""), "\"twice\"");
    }

    #[test]
    fn unwrap_leaves_unbalanced_text() {
        assert_eq!(BlockQuote::unwrap_quotes("\"open"), "\"open");
        assert_eq!(BlockQuote::unwrap_quotes("\""), "\"");
    }

    #[test]
    fn wrap_adds_pair() {
        assert_eq!(BlockQuote::wrap("x"), "\"x\"");
    }
}
