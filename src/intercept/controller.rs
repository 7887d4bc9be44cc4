//! The post-lookup hook that turns ordinary lookups into bilingual ones.
//!
//! The host calls its store, gets a result, and hands `(key, sheet, result)`
//! to [`Interceptor::post_get`]. If the entry is worth pairing, the
//! interceptor fetches the same entry in the secondary locale under the
//! switch guard, merges the two texts page by page and overwrites the result
//! in place. Every other outcome leaves the result untouched; the original
//! lookup must keep working no matter what goes wrong in here.

use std::cell::Cell;
use std::rc::Rc;

use crate::intercept::capture::{CaptureSink, CapturedPair};
use crate::intercept::filter::EligibilityFilter;
use crate::intercept::guard::{LocaleSwitchGuard, SecondaryText};
use crate::intercept::store::LocalizationStore;
use crate::locale::Locale;
use crate::merge::merge_bilingual;
use crate::settings::Settings;

/// Orchestrates eligibility, the guarded secondary lookup and the merge.
///
/// Created disarmed; the surrounding lifecycle calls [`arm`](Self::arm) once
/// the host has finished starting up. While a secondary lookup is in flight
/// the hook recognizes its own re-entrant invocations through the recursion
/// flag and steps aside.
pub struct Interceptor<S: LocalizationStore> {
    store: Rc<S>,
    secondary: Locale,
    filter: EligibilityFilter,
    verbose: bool,
    armed: Cell<bool>,
    in_secondary_lookup: Cell<bool>,
    sinks: Vec<Rc<dyn CaptureSink>>,
}

impl<S: LocalizationStore> Interceptor<S> {
    pub fn new(store: Rc<S>, settings: &Settings) -> Self {
        Interceptor {
            store,
            secondary: settings.secondary_locale,
            filter: EligibilityFilter::new(
                &settings.excluded_sheets,
                &settings.description_only_sheets,
            ),
            verbose: settings.verbose,
            armed: Cell::new(false),
            in_secondary_lookup: Cell::new(false),
            sinks: Vec::new(),
        }
    }

    /// Register a consumer for captured pairs.
    pub fn add_sink(&mut self, sink: Rc<dyn CaptureSink>) -> &mut Self {
        self.sinks.push(sink);
        self
    }

    /// Start intercepting. Until armed, `post_get` is a no-op.
    pub fn arm(&self) {
        self.armed.set(true);
        tracing::info!(secondary = %self.secondary, "interception armed");
    }

    /// Stop intercepting without tearing anything down.
    pub fn disarm(&self) {
        self.armed.set(false);
    }

    pub fn is_armed(&self) -> bool {
        self.armed.get()
    }

    /// The language paired with every eligible lookup.
    pub fn secondary_locale(&self) -> Locale {
        self.secondary
    }

    /// Post-lookup hook: may overwrite `result` with its bilingual form.
    ///
    /// Checks run in order: disarmed or re-entered ⇒ untouched; empty result
    /// ⇒ untouched; ineligible sheet/key ⇒ untouched; secondary lookup that
    /// yields no usable translation ⇒ untouched. Only a real translation
    /// that differs from the primary text triggers the merge, the in-place
    /// overwrite and the capture sinks.
    pub fn post_get(&self, key: &str, sheet: &str, result: &mut String) {
        if !self.armed.get() || self.in_secondary_lookup.get() {
            return;
        }
        if result.is_empty() {
            return;
        }
        if !self.filter.is_eligible(sheet, key) {
            if self.verbose {
                tracing::debug!(sheet, key, "skipped: not eligible");
            }
            return;
        }

        let guard = LocaleSwitchGuard::new(
            self.store.as_ref(),
            self.secondary,
            &self.in_secondary_lookup,
        );
        let secondary = guard.with_secondary_locale(|| self.store.get(key, sheet));

        match secondary {
            SecondaryText::Translation(text) if text != *result => {
                let merged = merge_bilingual(result, &text);
                let pair = CapturedPair {
                    sheet: sheet.to_owned(),
                    key: key.to_owned(),
                    primary: std::mem::replace(result, merged),
                    secondary: text,
                };
                if self.verbose {
                    tracing::debug!(sheet, key, "merged bilingual text");
                }
                for sink in &self.sinks {
                    sink.record(&pair);
                }
            }
            SecondaryText::Translation(_) => {
                // The secondary table fell back to the primary strings;
                // merging would only duplicate the text.
                if self.verbose {
                    tracing::debug!(sheet, key, "skipped: secondary text identical");
                }
            }
            outcome @ (SecondaryText::AlreadyActive | SecondaryText::NotFound) => {
                if self.verbose {
                    tracing::debug!(sheet, key, outcome = ?outcome, "no secondary text");
                }
            }
        }
    }
}
