//! Sheet/key eligibility policy.
//!
//! Not every lookup is worth pairing with a second language: menu labels and
//! credits read fine untranslated, and some sheets mix flavor descriptions
//! (worth pairing) with short item names (not worth it). The lists are
//! configuration, injected from [`Settings`](crate::Settings); this module
//! only implements the decision.

/// Substring that marks a key as a description entry, matched
/// case-insensitively within description-only sheets.
pub const DESCRIPTION_KEY_MARKER: &str = "DESC";

/// Decides which `(sheet, key)` pairs get a bilingual merge.
#[derive(Debug, Clone)]
pub struct EligibilityFilter {
    excluded: Vec<String>,
    description_only: Vec<String>,
}

impl EligibilityFilter {
    /// Build a filter from configured sheet lists. Matching is
    /// case-insensitive, so the lists can be written in the host's mixed
    /// casing.
    pub fn new(excluded: &[String], description_only: &[String]) -> Self {
        EligibilityFilter {
            excluded: excluded.iter().map(|s| s.to_lowercase()).collect(),
            description_only: description_only.iter().map(|s| s.to_lowercase()).collect(),
        }
    }

    /// Whether the entry under `(sheet, key)` should be processed.
    ///
    /// An empty sheet is never eligible. Excluded sheets are never eligible.
    /// Description-only sheets are eligible only for keys containing
    /// [`DESCRIPTION_KEY_MARKER`]; an empty key counts as absent. Everything
    /// else is eligible. Total over all inputs; malformed input just means
    /// "not eligible".
    pub fn is_eligible(&self, sheet: &str, key: &str) -> bool {
        if sheet.is_empty() {
            return false;
        }
        let sheet = sheet.to_lowercase();
        if self.excluded.iter().any(|s| *s == sheet) {
            return false;
        }
        if self.description_only.iter().any(|s| *s == sheet) {
            return !key.is_empty()
                && key.to_uppercase().contains(DESCRIPTION_KEY_MARKER);
        }
        true
    }
}
