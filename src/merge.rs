//! Page-aware merging of two language renderings into one bilingual text.

use crate::pages::{INLINE_BREAK, join_pages, split_pages};

/// Merge a primary-language text and its secondary-language rendering into a
/// single paginated bilingual text.
///
/// Both texts are split into pages and paired positionally. Within a page the
/// primary text comes first, then [`INLINE_BREAK`], then the secondary text.
/// A page present in only one language is emitted verbatim; a page present in
/// neither stays as an empty page so page indices keep lining up with
/// whatever else the host keys on them (voice-line cues, page sounds). The
/// result always spans as many pages as the longer input.
///
/// Callers check both texts are non-empty first; if one slips through empty,
/// the primary comes back verbatim rather than failing.
pub fn merge_bilingual(primary: &str, secondary: &str) -> String {
    if primary.is_empty() || secondary.is_empty() {
        return primary.to_string();
    }

    let mut primary_pages = split_pages(primary);
    let mut secondary_pages = split_pages(secondary);
    // A text that reduced to nothing is one implicit empty page, never zero
    // pages; the other language's page indices depend on it.
    if primary_pages.is_empty() {
        primary_pages.push(String::new());
    }
    if secondary_pages.is_empty() {
        secondary_pages.push(String::new());
    }

    let page_count = primary_pages.len().max(secondary_pages.len());
    let mut merged = Vec::with_capacity(page_count);
    for i in 0..page_count {
        let first = primary_pages.get(i).map(String::as_str).unwrap_or("");
        let second = secondary_pages.get(i).map(String::as_str).unwrap_or("");
        let page = match (first.is_empty(), second.is_empty()) {
            (false, false) => format!("{}{}{}", first, INLINE_BREAK, second),
            (false, true) => first.to_string(),
            (true, false) => second.to_string(),
            (true, true) => String::new(),
        };
        merged.push(page);
    }
    join_pages(&merged)
}
