use std::borrow::Cow;
use std::sync::OnceLock;

use regex::Regex;

use super::{cursor::Cursor, kinds::Emphasis, types::TextRun};

/// Replaces every `**span**` with the emphasis-delimited form of `span`.
///
/// Matching is non-greedy and requires a non-empty span, so `**a** and **b**`
/// yields two emphasised spans while `****` and an unpaired `**` are left as
/// they are. Returns the input unchanged (borrowed) when nothing matches.
pub fn emphasize_bold(text: &str) -> Cow<'_, str> {
    static BOLD_REGEX: OnceLock<Regex> = OnceLock::new();
    let bold_regex = BOLD_REGEX
        .get_or_init(|| Regex::new(r"\*\*(.+?)\*\*").expect("Invalid bold regex"));

    bold_regex.replace_all(text, |caps: &regex::Captures<'_>| Emphasis::wrap(&caps[1]))
}

/// Splits emphasis-delimited block text into weighted runs.
///
/// An opening delimiter without a matching close is kept as plain text.
/// Empty runs are never produced.
pub fn split_runs(s: &str) -> Vec<TextRun> {
    let mut cur = Cursor::new(s);
    let mut out = vec![];
    let mut text_start = cur.pos();

    // Helper to flush accumulated text as a plain run
    fn flush_text(out: &mut Vec<TextRun>, s: &str, start: usize, end: usize) {
        if end > start {
            out.push(TextRun::plain(&s[start..end]));
        }
    }

    while !cur.eof() {
        if cur.starts_with(Emphasis::OPEN) {
            let open_at = cur.pos();
            let inner_start = open_at + Emphasis::OPEN.len();
            cur.seek(inner_start);
            if let Some(close_at) = cur.find(Emphasis::CLOSE) {
                flush_text(&mut out, s, text_start, open_at);
                if close_at > inner_start {
                    out.push(TextRun::bold(&s[inner_start..close_at]));
                }
                cur.seek(close_at + Emphasis::CLOSE.len());
                text_start = cur.pos();
                continue;
            }
            // Not closed, the delimiter stays in the plain text
            continue;
        }
        cur.bump();
    }

    flush_text(&mut out, s, text_start, cur.pos());
    out
}
