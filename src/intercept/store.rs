//! The host localization store boundary.
//!
//! The host owns a table of localized text keyed by `(sheet, key)` and a
//! process-wide "active locale" setting that every lookup resolves against.
//! This module defines the trait the rest of the crate talks to, plus an
//! in-memory implementation that can be filled from per-locale JSON files
//! for tools and tests.
//!
//! # Locale files
//!
//! One JSON file per locale, named by its code (`en.json`, `ru.json`), each
//! holding sheets of key/text pairs:
//!
//! ```json
//! {
//!     "Dialogue": {
//!         "HORNET_GREETING": "Hello<page>Welcome"
//!     },
//!     "UI": {
//!         "PAUSE_RESUME": "Resume"
//!     }
//! }
//! ```
//!
//! Top-level keys starting with `@` are metadata and are skipped.

use std::cell::Cell;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::intercept::error::{StoreError, StoreResult};
use crate::locale::Locale;

/// Sheets of key/text pairs for one locale.
pub type SheetTable = HashMap<String, HashMap<String, String>>;

/// Access to the host's localization store.
///
/// The active locale is process-wide mutable state owned by the host; the
/// trait exposes it through `&self` methods so implementations carry the
/// interior mutability, matching how the host actually behaves. `get`
/// resolves against whichever locale is active at call time.
pub trait LocalizationStore {
    /// Look up the text stored under `(sheet, key)` in the active locale.
    fn get(&self, key: &str, sheet: &str) -> StoreResult<String>;

    /// The locale lookups currently resolve against.
    fn active_locale(&self) -> Locale;

    /// Change the active locale. May fail if the store cannot serve the
    /// requested locale; the active locale is unchanged on failure.
    fn set_active_locale(&self, locale: Locale) -> StoreResult<()>;
}

/// In-memory localization store.
///
/// Stands in for the host store in the demo binary and in tests. Locales
/// without a loaded table are rejected by [`set_active_locale`], which is
/// exactly the failure mode the switch/restore guard has to survive.
///
/// [`set_active_locale`]: LocalizationStore::set_active_locale
pub struct MemoryStore {
    tables: HashMap<Locale, SheetTable>,
    active: Cell<Locale>,
}

impl MemoryStore {
    /// Create an empty store whose active locale is `primary`.
    pub fn new(primary: Locale) -> Self {
        let mut tables = HashMap::new();
        tables.insert(primary, SheetTable::new());
        MemoryStore {
            tables,
            active: Cell::new(primary),
        }
    }

    /// Insert one entry, creating the locale and sheet tables as needed.
    pub fn with_entry(&mut self, locale: Locale, sheet: &str, key: &str, text: &str) -> &mut Self {
        self.tables
            .entry(locale)
            .or_default()
            .entry(sheet.to_owned())
            .or_default()
            .insert(key.to_owned(), text.to_owned());
        self
    }

    /// Install a whole sheet table for `locale`, replacing any previous one.
    pub fn with_table(&mut self, locale: Locale, table: SheetTable) -> &mut Self {
        self.tables.insert(locale, table);
        self
    }

    /// Load every `<code>.json` file in `dir` as a locale table.
    ///
    /// The file stem names the locale (`ru.json` → `RU`). Files whose stem is
    /// not a known language code are skipped with a warning rather than
    /// failing the whole load.
    pub fn load_from_dir(dir: &Path, primary: Locale) -> StoreResult<Self> {
        if !dir.is_dir() {
            return Err(StoreError::Io(format!(
                "Not a locale directory: {}",
                dir.display()
            )));
        }

        let mut store = MemoryStore::new(primary);
        let entries = fs::read_dir(dir)
            .map_err(|e| StoreError::Io(format!("Failed to read {}: {}", dir.display(), e)))?;
        for entry in entries {
            let entry =
                entry.map_err(|e| StoreError::Io(format!("Error reading directory entry: {}", e)))?;
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }
            let stem = path.file_stem().and_then(|stem| stem.to_str()).unwrap_or("");
            let locale: Locale = match stem.parse() {
                Ok(locale) => locale,
                Err(_) => {
                    tracing::warn!(file = %path.display(), "skipping locale file with unknown code");
                    continue;
                }
            };
            let table = load_sheet_table(&path)?;
            store.with_table(locale, table);
        }
        Ok(store)
    }

    /// Locales this store can serve.
    pub fn locales(&self) -> Vec<Locale> {
        let mut locales: Vec<Locale> = self.tables.keys().copied().collect();
        locales.sort_by_key(|l| l.code());
        locales
    }
}

impl LocalizationStore for MemoryStore {
    fn get(&self, key: &str, sheet: &str) -> StoreResult<String> {
        let locale = self.active.get();
        self.tables
            .get(&locale)
            .and_then(|table| table.get(sheet))
            .and_then(|entries| entries.get(key))
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
        if !self.tables.contains_key(&locale) {
            return Err(StoreError::UnsupportedLocale(locale.code().to_owned()));
        }
        self.active.set(locale);
        Ok(())
    }
}

/// Load one locale's sheet table from a JSON file.
pub fn load_sheet_table(path: &Path) -> StoreResult<SheetTable> {
    let content = fs::read_to_string(path)
        .map_err(|e| StoreError::Io(format!("Failed to read {}: {}", path.display(), e)))?;
    let json: Value = serde_json::from_str(&content)
        .map_err(|e| StoreError::Parse(format!("Invalid JSON in {}: {}", path.display(), e)))?;
    let sheets = json.as_object().ok_or_else(|| {
        StoreError::Parse(format!(
            "Invalid locale file {}: root must be an object",
            path.display()
        ))
    })?;

    let mut table = SheetTable::new();
    for (sheet, entries) in sheets {
        // Skip metadata
        if sheet.starts_with('@') {
            continue;
        }
        let Some(entries) = entries.as_object() else {
            tracing::warn!(sheet = %sheet, file = %path.display(), "sheet is not an object, skipping");
            continue;
        };
        let mut texts = HashMap::new();
        for (key, value) in entries {
            if let Some(text) = value.as_str() {
                texts.insert(key.clone(), text.to_owned());
            } else {
                tracing::warn!(sheet = %sheet, key = %key, "entry is not a string, skipping");
            }
        }
        table.insert(sheet.clone(), texts);
    }
    Ok(table)
}
