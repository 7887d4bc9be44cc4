//! Build/deploy-time configuration.
//!
//! Everything tunable lives here: which language to pair with the primary
//! text, which sheets to leave alone, and the study-log location. Defaults
//! match a Russian-learning setup; a JSON file can override any field:
//!
//! ```json
//! {
//!     "secondary_locale": "de",
//!     "excluded_sheets": ["MainMenu"],
//!     "verbose": true
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::locale::Locale;

/// Configuration for the interception layer.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Language fetched alongside every eligible lookup.
    pub secondary_locale: Locale,
    /// Sheets never processed (menus, credits and other UI chrome).
    pub excluded_sheets: Vec<String>,
    /// Sheets processed only for keys marked as descriptions.
    pub description_only_sheets: Vec<String>,
    /// Emit per-lookup debug traces.
    pub verbose: bool,
    /// Append captured pairs to this file, when set.
    pub capture_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            secondary_locale: Locale::Ru,
            excluded_sheets: vec![
                "MainMenu".to_string(),
                "Credits List".to_string(),
                "Achievements".to_string(),
            ],
            description_only_sheets: vec![
                "Quests".to_string(),
                "Journal".to_string(),
                "Tools".to_string(),
            ],
            verbose: false,
            capture_file: None,
        }
    }
}

impl Settings {
    /// Load settings from a JSON file. Fields not present in the file keep
    /// their defaults.
    pub fn load(path: &Path) -> Result<Settings, String> {
        let content = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read settings '{}': {}", path.display(), e))?;
        serde_json::from_str(&content)
            .map_err(|e| format!("Failed to parse settings '{}': {}", path.display(), e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.secondary_locale, Locale::Ru);
        assert!(settings.excluded_sheets.contains(&"MainMenu".to_string()));
        assert!(settings
            .description_only_sheets
            .contains(&"Quests".to_string()));
        assert!(!settings.verbose);
        assert!(settings.capture_file.is_none());
    }

    #[test]
    fn test_load_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::with_suffix(".json").unwrap();
        write!(file, r#"{{ "secondary_locale": "de", "verbose": true }}"#).unwrap();

        let settings = Settings::load(file.path()).unwrap();
        assert_eq!(settings.secondary_locale, Locale::De);
        assert!(settings.verbose);
        // Untouched fields fall back to defaults
        assert!(settings.excluded_sheets.contains(&"MainMenu".to_string()));
    }

    #[test]
    fn test_load_missing_file() {
        let err = Settings::load(Path::new("/nonexistent/settings.json")).unwrap_err();
        assert!(err.contains("Failed to read"));
    }

    #[test]
    fn test_load_invalid_json() {
        let mut file = tempfile::NamedTempFile::with_suffix(".json").unwrap();
        write!(file, "not json").unwrap();
        let err = Settings::load(file.path()).unwrap_err();
        assert!(err.contains("Failed to parse"));
    }

    #[test]
    fn test_load_rejects_unknown_locale() {
        let mut file = tempfile::NamedTempFile::with_suffix(".json").unwrap();
        write!(file, r#"{{ "secondary_locale": "xx" }}"#).unwrap();
        assert!(Settings::load(file.path()).is_err());
    }
}
