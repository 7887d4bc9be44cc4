//! Language codes recognized by the host localization store.
//!
//! The host keeps exactly one locale active at a time; every lookup resolves
//! against it. This crate reads and (briefly) rewrites that setting, so the
//! set of codes is closed and mirrors the host's own language table.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A language recognized by the host's localization store.
///
/// `En` is the primary language; one of the others is chosen as the
/// secondary language in [`Settings`](crate::Settings).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    En,
    Fr,
    De,
    Es,
    It,
    Ja,
    Ko,
    Pt,
    Ru,
    Zh,
}

impl Locale {
    /// All locales the host supports, in its own table order.
    pub const ALL: [Locale; 10] = [
        Locale::En,
        Locale::Fr,
        Locale::De,
        Locale::Es,
        Locale::It,
        Locale::Ja,
        Locale::Ko,
        Locale::Pt,
        Locale::Ru,
        Locale::Zh,
    ];

    /// The two-letter code the host uses for this language (e.g. `"RU"`).
    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "EN",
            Locale::Fr => "FR",
            Locale::De => "DE",
            Locale::Es => "ES",
            Locale::It => "IT",
            Locale::Ja => "JA",
            Locale::Ko => "KO",
            Locale::Pt => "PT",
            Locale::Ru => "RU",
            Locale::Zh => "ZH",
        }
    }

    /// Display string shown when a secondary lookup finds no translation,
    /// phrased in the language the reader selected.
    pub fn not_found_message(&self) -> &'static str {
        match self {
            Locale::En => "<translation not found>",
            Locale::Fr => "<traduction introuvable>",
            Locale::De => "<Übersetzung nicht gefunden>",
            Locale::Es => "<traducción no encontrada>",
            Locale::It => "<traduzione non trovata>",
            Locale::Ja => "<翻訳が見つかりません>",
            Locale::Ko => "<번역을 찾을 수 없음>",
            Locale::Pt => "<tradução não encontrada>",
            Locale::Ru => "<перевод не найден>",
            Locale::Zh => "<未找到翻译>",
        }
    }

    /// Display string shown when the game is already running in this
    /// language, so there is nothing to pair the text with.
    pub fn already_active_message(&self) -> &'static str {
        match self {
            Locale::En => "<already playing in English>",
            Locale::Fr => "<déjà en français>",
            Locale::De => "<bereits auf Deutsch>",
            Locale::Es => "<ya está en español>",
            Locale::It => "<già in italiano>",
            Locale::Ja => "<すでに日本語です>",
            Locale::Ko => "<이미 한국어입니다>",
            Locale::Pt => "<já em português>",
            Locale::Zh => "<已是中文>",
            Locale::Ru => "<игра уже на русском>",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = String;

    /// Parse a language code, case-insensitively (`"ru"`, `"RU"`, `"Ru"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "EN" => Ok(Locale::En),
            "FR" => Ok(Locale::Fr),
            "DE" => Ok(Locale::De),
            "ES" => Ok(Locale::Es),
            "IT" => Ok(Locale::It),
            "JA" => Ok(Locale::Ja),
            "KO" => Ok(Locale::Ko),
            "PT" => Ok(Locale::Pt),
            "RU" => Ok(Locale::Ru),
            "ZH" => Ok(Locale::Zh),
            other => Err(format!("Unknown language code: {}", other)),
        }
    }
}
