//! Mock localization store for testing
//!
//! A deterministic store that can simulate the host-side faults the
//! interception layer has to survive: lookups that fail, a locale setting
//! that refuses to change back, and lookups whose side effects re-enter the
//! interception hook.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use crate::intercept::error::{StoreError, StoreResult};
use crate::intercept::store::LocalizationStore;
use crate::locale::Locale;

/// Fault modes for [`MockStore`]
#[derive(Debug, Clone)]
pub enum MockMode {
    /// Behave like a plain in-memory store
    Normal,
    /// Every lookup fails with the given message
    FailLookup(String),
    /// `set_active_locale` rejects this one locale.
    ///
    /// Rejecting the secondary locale simulates a switch that never happens;
    /// rejecting the primary simulates a restore that fails and leaves the
    /// secondary locale stuck.
    RejectLocale(Locale),
}

type GetHook = Box<dyn Fn(&str, &str)>;

/// Scriptable localization store for tests.
///
/// Records every locale change and lookup so tests can assert on the exact
/// switch/restore sequence. An optional `on_get` hook runs inside every
/// lookup, which is how tests reproduce the host re-entering the
/// interception hook mid-lookup.
pub struct MockStore {
    entries: HashMap<(Locale, String, String), String>,
    active: Cell<Locale>,
    mode: MockMode,
    on_get: RefCell<Option<GetHook>>,
    locale_changes: RefCell<Vec<Locale>>,
    lookups: RefCell<Vec<(String, String, Locale)>>,
}

impl MockStore {
    /// Create a store in [`MockMode::Normal`] with `active` as the current locale.
    pub fn new(active: Locale) -> Self {
        Self::with_mode(active, MockMode::Normal)
    }

    /// Create a store with an explicit fault mode.
    pub fn with_mode(active: Locale, mode: MockMode) -> Self {
        MockStore {
            entries: HashMap::new(),
            active: Cell::new(active),
            mode,
            on_get: RefCell::new(None),
            locale_changes: RefCell::new(Vec::new()),
            lookups: RefCell::new(Vec::new()),
        }
    }

    /// Insert one entry.
    pub fn with_entry(&mut self, locale: Locale, sheet: &str, key: &str, text: &str) -> &mut Self {
        self.entries
            .insert((locale, sheet.to_owned(), key.to_owned()), text.to_owned());
        self
    }

    /// Install a hook that runs inside every `get`, after the lookup is
    /// recorded. Used to simulate lookups whose side effects call back into
    /// the interception layer.
    pub fn set_on_get<F>(&self, hook: F)
    where
        F: Fn(&str, &str) + 'static,
    {
        *self.on_get.borrow_mut() = Some(Box::new(hook));
    }

    /// Every locale passed to `set_active_locale`, accepted or not.
    pub fn locale_changes(&self) -> Vec<Locale> {
        self.locale_changes.borrow().clone()
    }

    /// Every `(key, sheet, locale-at-lookup)` triple seen by `get`.
    pub fn lookups(&self) -> Vec<(String, String, Locale)> {
        self.lookups.borrow().clone()
    }
}

impl LocalizationStore for MockStore {
    fn get(&self, key: &str, sheet: &str) -> StoreResult<String> {
        let locale = self.active.get();
        self.lookups
            .borrow_mut()
            .push((key.to_owned(), sheet.to_owned(), locale));
        if let Some(hook) = self.on_get.borrow().as_ref() {
            hook(key, sheet);
        }
        if let MockMode::FailLookup(msg) = &self.mode {
            return Err(StoreError::Backend(msg.clone()));
        }
        self.entries
            .get(&(locale, sheet.to_owned(), key.to_owned()))
            .cloned()
            .ok_or_else(|| StoreError::MissingEntry {
                sheet: sheet.to_owned(),
                key: key.to_owned(),
            })
    }

    fn active_locale(&self) -> Locale {
        self.active.get()
    }

    fn set_active_locale(&self, locale: Locale) -> StoreResult<()> {
        self.locale_changes.borrow_mut().push(locale);
        if let MockMode::RejectLocale(rejected) = self.mode {
            if locale == rejected {
                return Err(StoreError::UnsupportedLocale(locale.code().to_owned()));
            }
        }
        self.active.set(locale);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normal_mode_lookup() {
        let mut store = MockStore::new(Locale::En);
        store.with_entry(Locale::En, "Dialogue", "A", "text");
        assert_eq!(store.get("A", "Dialogue").unwrap(), "text");
        assert_eq!(
            store.lookups(),
            vec![("A".to_string(), "Dialogue".to_string(), Locale::En)]
        );
    }

    #[test]
    fn test_fail_lookup_mode() {
        let store = MockStore::with_mode(Locale::En, MockMode::FailLookup("boom".to_string()));
        let err = store.get("A", "Dialogue").unwrap_err();
        assert_eq!(err, StoreError::Backend("boom".to_string()));
    }

    #[test]
    fn test_reject_locale_mode_records_attempt() {
        let store = MockStore::with_mode(Locale::En, MockMode::RejectLocale(Locale::Ru));
        assert!(store.set_active_locale(Locale::Ru).is_err());
        assert_eq!(store.active_locale(), Locale::En);
        assert_eq!(store.locale_changes(), vec![Locale::Ru]);
    }

    #[test]
    fn test_on_get_hook_runs_inside_lookup() {
        use std::cell::Cell;
        use std::rc::Rc;

        let store = MockStore::new(Locale::En);
        let fired = Rc::new(Cell::new(false));
        let seen = fired.clone();
        store.set_on_get(move |key, sheet| {
            assert_eq!(key, "A");
            assert_eq!(sheet, "Dialogue");
            seen.set(true);
        });
        let _ = store.get("A", "Dialogue");
        assert!(fired.get());
    }
}
