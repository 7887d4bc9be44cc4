//! Consumers of successfully merged pairs.
//!
//! Every merge produces a `(primary, secondary)` pair that is interesting
//! beyond the merged string itself: a study log on disk, the most recent
//! pair for an on-screen overlay. Sinks receive pairs after the merge has
//! already been applied, so a failing sink can never break the lookup.

use std::cell::RefCell;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::locale::Locale;

/// One captured translation pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedPair {
    pub sheet: String,
    pub key: String,
    pub primary: String,
    pub secondary: String,
}

/// Receives each successfully merged pair.
pub trait CaptureSink {
    fn record(&self, pair: &CapturedPair);
}

/// Append-only study log of captured pairs.
///
/// One line per merge:
///
/// ```text
/// 2026-08-08 21:14:03 | Dialogue.HORNET_GREETING | EN: Hello | RU: Привет
/// ```
///
/// The file is opened in append mode for every write, so the log survives
/// host restarts and external truncation. Write failures are logged and
/// swallowed.
pub struct FileCaptureLog {
    path: PathBuf,
    secondary_code: &'static str,
}

impl FileCaptureLog {
    pub fn new(path: PathBuf, secondary: Locale) -> Self {
        FileCaptureLog {
            path,
            secondary_code: secondary.code(),
        }
    }

    fn format_line(&self, pair: &CapturedPair, timestamp: &str) -> String {
        format!(
            "{} | {}.{} | EN: {} | {}: {}\n",
            timestamp, pair.sheet, pair.key, pair.primary, self.secondary_code, pair.secondary
        )
    }
}

impl CaptureSink for FileCaptureLog {
    fn record(&self, pair: &CapturedPair) {
        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        let line = self.format_line(pair, &timestamp);
        let result = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .and_then(|mut file| file.write_all(line.as_bytes()));
        if let Err(err) = result {
            tracing::warn!(path = %self.path.display(), error = %err, "failed to write capture log");
        }
    }
}

/// Keeps the most recent pair and when it arrived, for overlay-style
/// consumers that only show fresh captures.
#[derive(Default)]
pub struct LatestCapture {
    last: RefCell<Option<(CapturedPair, Instant)>>,
}

impl LatestCapture {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recent pair, if any was captured.
    pub fn latest(&self) -> Option<CapturedPair> {
        self.last.borrow().as_ref().map(|(pair, _)| pair.clone())
    }

    /// The most recent pair, only if it arrived within `within`.
    pub fn recent(&self, within: Duration) -> Option<CapturedPair> {
        self.last
            .borrow()
            .as_ref()
            .filter(|(_, at)| at.elapsed() <= within)
            .map(|(pair, _)| pair.clone())
    }
}

impl CaptureSink for LatestCapture {
    fn record(&self, pair: &CapturedPair) {
        *self.last.borrow_mut() = Some((pair.clone(), Instant::now()));
    }
}
