//! Scoped switch to the secondary locale.
//!
//! The host keeps one process-wide active locale. To fetch a second-language
//! rendering of an entry, the guard saves the current locale, switches to
//! the secondary one, runs the lookup and switches back. "Leave it exactly
//! as found" is the whole contract: the restore and the recursion-flag
//! cleanup run on every exit path, lookup failure and panic included.

use std::cell::Cell;

use crate::intercept::error::StoreResult;
use crate::intercept::store::LocalizationStore;
use crate::locale::Locale;

/// Outcome of a secondary-locale lookup.
///
/// The three cases a caller must tell apart: a usable translation, "the
/// secondary locale was already active so there is nothing to pair", and
/// "no translation came back". The latter two must never be merged or
/// captured as if they were text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SecondaryText {
    /// A non-empty translation fetched under the secondary locale
    Translation(String),
    /// The active locale already was the secondary locale
    AlreadyActive,
    /// The lookup failed or produced no text
    NotFound,
}

impl SecondaryText {
    /// Human-readable form for logs and overlays, using the secondary
    /// locale's own phrasing for the two non-translation outcomes.
    pub fn display_text(&self, secondary: Locale) -> &str {
        match self {
            SecondaryText::Translation(text) => text,
            SecondaryText::AlreadyActive => secondary.already_active_message(),
            SecondaryText::NotFound => secondary.not_found_message(),
        }
    }
}

/// Clears the recursion flag when the guarded scope ends.
struct FlagReset<'a>(&'a Cell<bool>);

impl Drop for FlagReset<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

/// Puts the saved locale back when the guarded scope ends, unless something
/// external already moved it off the secondary locale.
struct LocaleRestore<'a, S: LocalizationStore> {
    store: &'a S,
    secondary: Locale,
    saved: Locale,
}

impl<S: LocalizationStore> Drop for LocaleRestore<'_, S> {
    fn drop(&mut self) {
        if self.store.active_locale() != self.secondary {
            return;
        }
        if let Err(err) = self.store.set_active_locale(self.saved) {
            // The host is now stuck in the secondary locale. Nothing more
            // can be done here; the caller's own lookups will surface it.
            tracing::error!(
                saved = %self.saved,
                error = %err,
                "failed to restore locale after secondary lookup"
            );
        }
    }
}

/// Save/switch/restore protocol around one secondary-locale lookup.
pub struct LocaleSwitchGuard<'a, S: LocalizationStore> {
    store: &'a S,
    secondary: Locale,
    in_secondary_lookup: &'a Cell<bool>,
}

impl<'a, S: LocalizationStore> LocaleSwitchGuard<'a, S> {
    /// Create a guard over `store`. `in_secondary_lookup` is the shared
    /// recursion flag the interception hook checks before doing any work.
    pub fn new(store: &'a S, secondary: Locale, in_secondary_lookup: &'a Cell<bool>) -> Self {
        LocaleSwitchGuard {
            store,
            secondary,
            in_secondary_lookup,
        }
    }

    /// Run `lookup` with the secondary locale active, restoring the previous
    /// locale afterwards no matter how the lookup ends.
    ///
    /// The recursion flag is raised before anything else, so any lookup the
    /// locale switch itself triggers is recognized as secondary work and
    /// skipped by the hook. Lookup failures are absorbed into
    /// [`SecondaryText::NotFound`]; this function never returns an error.
    pub fn with_secondary_locale<F>(&self, lookup: F) -> SecondaryText
    where
        F: FnOnce() -> StoreResult<String>,
    {
        self.in_secondary_lookup.set(true);
        let _flag = FlagReset(self.in_secondary_lookup);

        let saved = self.store.active_locale();
        if saved == self.secondary {
            tracing::debug!(locale = %saved, "secondary locale already active");
            return SecondaryText::AlreadyActive;
        }

        if let Err(err) = self.store.set_active_locale(self.secondary) {
            tracing::warn!(
                locale = %self.secondary,
                error = %err,
                "could not switch to secondary locale"
            );
            return SecondaryText::NotFound;
        }
        // Declared after _flag so it drops first: restore the locale, then
        // release the flag. A restore failure cannot skip the flag cleanup.
        let _restore = LocaleRestore {
            store: self.store,
            secondary: self.secondary,
            saved,
        };

        match lookup() {
            Ok(text) if !text.is_empty() => SecondaryText::Translation(text),
            Ok(_) => SecondaryText::NotFound,
            Err(err) => {
                tracing::warn!(error = %err, "secondary lookup failed");
                SecondaryText::NotFound
            }
        }
    }
}
