//! End-to-end tests of the interception pipeline: a JSON-backed store, an
//! armed interceptor, capture sinks and the file log working together.

use std::fs;
use std::rc::Rc;

use crate::intercept::capture::{FileCaptureLog, LatestCapture};
use crate::intercept::controller::Interceptor;
use crate::intercept::store::{LocalizationStore, MemoryStore};
use crate::locale::Locale;
use crate::settings::Settings;

fn write_locale_fixtures(dir: &std::path::Path) {
    fs::write(
        dir.join("en.json"),
        r#"{
            "Dialogue": {
                "HORNET_GREETING": "Hello<page>Come closer",
                "HORNET_NAME": "Hornet"
            },
            "Quests": {
                "HUNT_DESC": "Track the beast to its lair",
                "HUNT_NAME": "The Hunt"
            },
            "MainMenu": {
                "START": "Start Game"
            }
        }"#,
    )
    .unwrap();
    fs::write(
        dir.join("ru.json"),
        r#"{
            "Dialogue": {
                "HORNET_GREETING": "Привет<page>Подойди ближе",
                "HORNET_NAME": "Hornet"
            },
            "Quests": {
                "HUNT_DESC": "Выследи зверя до его логова",
                "HUNT_NAME": "Охота"
            },
            "MainMenu": {
                "START": "Начать игру"
            }
        }"#,
    )
    .unwrap();
}

/// Run the host side of one lookup: resolve the entry, then hand the result
/// to the hook the way the host's patched `get` would.
fn host_get(interceptor: &Interceptor<MemoryStore>, store: &MemoryStore, key: &str, sheet: &str) -> String {
    let mut result = store.get(key, sheet).unwrap_or_default();
    interceptor.post_get(key, sheet, &mut result);
    result
}

#[test]
fn test_full_pipeline_from_json_store_to_capture_log() {
    let dir = tempfile::tempdir().unwrap();
    write_locale_fixtures(dir.path());
    let log_path = dir.path().join("pairs.txt");

    let store = Rc::new(MemoryStore::load_from_dir(dir.path(), Locale::En).unwrap());
    let settings = Settings::default();
    let latest = Rc::new(LatestCapture::new());
    let mut interceptor = Interceptor::new(store.clone(), &settings);
    interceptor
        .add_sink(Rc::new(FileCaptureLog::new(
            log_path.clone(),
            settings.secondary_locale,
        )))
        .add_sink(latest.clone());
    interceptor.arm();

    // Paginated dialogue merges page by page
    let merged = host_get(&interceptor, &store, "HORNET_GREETING", "Dialogue");
    assert_eq!(
        merged,
        "Hello<br>Привет<page>Come closer<br>Подойди ближе"
    );

    // Identical text in both languages stays single
    let name = host_get(&interceptor, &store, "HORNET_NAME", "Dialogue");
    assert_eq!(name, "Hornet");

    // Description-only sheet: descriptions merge, names do not
    let desc = host_get(&interceptor, &store, "HUNT_DESC", "Quests");
    assert_eq!(desc, "Track the beast to its lair<br>Выследи зверя до его логова");
    let quest_name = host_get(&interceptor, &store, "HUNT_NAME", "Quests");
    assert_eq!(quest_name, "The Hunt");

    // Excluded sheet untouched
    let start = host_get(&interceptor, &store, "START", "MainMenu");
    assert_eq!(start, "Start Game");

    // The store is back in the primary locale after all of it
    assert_eq!(store.active_locale(), Locale::En);

    // Two merges happened; the log has one line each, the overlay holds the last
    let log = fs::read_to_string(&log_path).unwrap();
    let lines: Vec<&str> = log.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("Dialogue.HORNET_GREETING"));
    assert!(lines[0].contains("EN: Hello<page>Come closer"));
    assert!(lines[0].contains("RU: Привет<page>Подойди ближе"));
    assert_eq!(latest.latest().unwrap().key, "HUNT_DESC");
}

#[test]
fn test_pipeline_with_secondary_locale_missing_from_store() {
    let dir = tempfile::tempdir().unwrap();
    // Only the primary table exists; switching to RU must fail cleanly
    fs::write(
        dir.path().join("en.json"),
        r#"{ "Dialogue": { "A": "Hello" } }"#,
    )
    .unwrap();

    let store = Rc::new(MemoryStore::load_from_dir(dir.path(), Locale::En).unwrap());
    let mut interceptor = Interceptor::new(store.clone(), &Settings::default());
    interceptor.arm();

    let merged = host_get(&interceptor, &store, "A", "Dialogue");
    assert_eq!(merged, "Hello");
    assert_eq!(store.active_locale(), Locale::En);
}

#[test]
fn test_pipeline_respects_settings_overrides() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("en.json"),
        r#"{ "Dialogue": { "A": "Hello" } }"#,
    )
    .unwrap();
    fs::write(
        dir.path().join("de.json"),
        r#"{ "Dialogue": { "A": "Hallo" } }"#,
    )
    .unwrap();

    let settings = Settings {
        secondary_locale: Locale::De,
        excluded_sheets: vec!["Dialogue".to_string()],
        ..Settings::default()
    };

    let store = Rc::new(MemoryStore::load_from_dir(dir.path(), Locale::En).unwrap());
    let mut interceptor = Interceptor::new(store.clone(), &settings);
    interceptor.arm();

    // Dialogue is excluded by the override, so nothing merges
    let merged = host_get(&interceptor, &store, "A", "Dialogue");
    assert_eq!(merged, "Hello");

    // Drop the exclusion and the German pairing kicks in
    let settings = Settings {
        secondary_locale: Locale::De,
        excluded_sheets: Vec::new(),
        ..Settings::default()
    };
    let mut interceptor = Interceptor::new(store.clone(), &settings);
    interceptor.arm();
    let merged = host_get(&interceptor, &store, "A", "Dialogue");
    assert_eq!(merged, "Hello<br>Hallo");
}

#[test]
fn test_disarm_stops_merging() {
    let dir = tempfile::tempdir().unwrap();
    write_locale_fixtures(dir.path());
    let store = Rc::new(MemoryStore::load_from_dir(dir.path(), Locale::En).unwrap());
    let mut interceptor = Interceptor::new(store.clone(), &Settings::default());
    interceptor.arm();

    assert!(host_get(&interceptor, &store, "HORNET_GREETING", "Dialogue").contains("<br>"));

    interceptor.disarm();
    let plain = host_get(&interceptor, &store, "HORNET_GREETING", "Dialogue");
    assert_eq!(plain, "Hello<page>Come closer");
}
