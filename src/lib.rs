//! dualsub pairs localized game text with a second language.
//!
//! The host resolves text by `(sheet, key)` against one process-wide active
//! locale. This crate hooks in after each lookup, fetches the same entry in
//! a configured secondary locale (briefly switching the active locale and
//! always switching it back), and rewrites the result into a bilingual
//! string, page by page. Lookups that should stay monolingual (menus,
//! credits, entries with no real translation) pass through untouched.

pub mod intercept;
pub mod locale;
pub mod merge;
pub mod pages;
pub mod settings;

pub use intercept::{
    CaptureSink, CapturedPair, EligibilityFilter, FileCaptureLog, Interceptor, LatestCapture,
    LocaleSwitchGuard, LocalizationStore, MemoryStore, SecondaryText, StoreError, StoreResult,
};
pub use locale::Locale;
pub use merge::merge_bilingual;
pub use pages::{HARD_PAGE_BREAK, INLINE_BREAK, PAGE_BREAK, split_pages};
pub use settings::Settings;
