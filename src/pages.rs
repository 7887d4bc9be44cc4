//! Page handling for the host's paginated text format.
//!
//! Long texts embed page-break markers so the host can show one screen of
//! text at a time. Two marker spellings exist (`<page>` and `<hpage>`) and
//! the host treats them identically, so this module does too. A text with no
//! markers is a single implicit page.

use std::sync::OnceLock;

use regex::Regex;

/// Page-break marker emitted between pages when re-joining.
pub const PAGE_BREAK: &str = "<page>";

/// Alternate page-break marker; equivalent to [`PAGE_BREAK`] when splitting.
pub const HARD_PAGE_BREAK: &str = "<hpage>";

/// Line-break marker placed between the two languages inside one page.
pub const INLINE_BREAK: &str = "<br>";

fn page_break_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"<page>|<hpage>").unwrap())
}

/// Split a text into its ordered pages.
///
/// Splits on either page-break marker, discards the markers and trims each
/// piece. Pieces that trim to nothing are dropped, but only when at least one
/// marker was present; a marker-free text always comes back as exactly one
/// (trimmed) page, even if that page is empty.
///
/// An empty input yields an empty vector. Callers pairing two texts must
/// treat that as one implicit empty page, not as zero pages, or the page
/// indices of the other language drift.
pub fn split_pages(text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }
    let pattern = page_break_pattern();
    if !pattern.is_match(text) {
        return vec![text.trim().to_string()];
    }
    pattern
        .split(text)
        .map(str::trim)
        .filter(|page| !page.is_empty())
        .map(str::to_string)
        .collect()
}

/// Re-join pages with [`PAGE_BREAK`] between them, never before the first.
pub fn join_pages(pages: &[String]) -> String {
    pages.join(PAGE_BREAK)
}
