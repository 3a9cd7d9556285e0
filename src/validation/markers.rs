/*!
 * Inline marker collapsing for bilingual segments.
 *
 * memoQ exports inline formatting and placeholders as bracketed tags:
 * - `<...>` for HTML-like tags (`<br>`, `<b>`, `</i>`)
 * - `[...]` for numbered inline tags (`[1}`, `[uf]`)
 * - `{...}` for placeholders (`{1}`, `{bold}`)
 *
 * Each tag marks a position where the displayed text may break, so every
 * tag is collapsed into a single `\n`. The resulting pieces are the logical
 * lines that get measured against the character limit.
 */

use once_cell::sync::Lazy;
use regex::Regex;

/// Any inline tag. Tag bodies never span a line break, which keeps the
/// collapse idempotent: the `\n` it inserts can never be part of a new tag.
static MARKER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"<[^>\n]+>|\[[^\]\n]+?\]|\{[^}\n]+\}").expect("Invalid marker regex")
});

/// Carriage returns, alone or as part of CRLF
static LINE_ENDING_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\r\n?").expect("Invalid line ending regex")
});

/// Replace every inline marker with a line break and normalise line endings.
pub fn normalize_markers(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let unified = LINE_ENDING_REGEX.replace_all(text, "\n");
    MARKER_REGEX.replace_all(&unified, "\n").into_owned()
}

/// Count inline markers in raw text
pub fn count_markers(text: &str) -> usize {
    MARKER_REGEX.find_iter(text).count()
}

/// Iterate over the logical lines of already-normalised text.
///
/// Lines are yielded lazily in order; empty pieces (two adjacent markers,
/// a leading marker) are kept so positions stay stable for rendering.
pub fn logical_lines(normalized: &str) -> impl Iterator<Item = &str> {
    normalized.split('\n')
}
