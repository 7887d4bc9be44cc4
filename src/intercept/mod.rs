//! Lookup Interception Module
//!
//! This module implements the interception pipeline that turns a host
//! lookup's single-language result into a bilingual one:
//!
//! 1. **Store boundary** - The [`LocalizationStore`] trait modeling the
//!    host's key/sheet tables and its process-wide active locale
//! 2. **Eligibility** - [`EligibilityFilter`] decides which entries are
//!    worth pairing at all
//! 3. **Switch guard** - [`LocaleSwitchGuard`] fetches the second-language
//!    rendering and guarantees the active locale is left as found
//! 4. **Controller** - [`Interceptor`] wires the above into the post-lookup
//!    hook and overwrites eligible results with their merged form
//! 5. **Capture** - [`CaptureSink`] consumers receive each merged pair
//!    (study log on disk, latest-pair overlay)
//!
//! # Example
//!
//! ```ignore
//! use std::rc::Rc;
//! use dualsub::{Interceptor, MemoryStore, Settings, Locale};
//!
//! let mut store = MemoryStore::new(Locale::En);
//! store
//!     .with_entry(Locale::En, "Dialogue", "GREETING", "Hello")
//!     .with_entry(Locale::Ru, "Dialogue", "GREETING", "Привет");
//!
//! let interceptor = Interceptor::new(Rc::new(store), &Settings::default());
//! interceptor.arm();
//!
//! let mut result = "Hello".to_string();
//! interceptor.post_get("GREETING", "Dialogue", &mut result);
//! assert_eq!(result, "Hello<br>Привет");
//! ```

pub mod capture;
pub mod controller;
pub mod error;
pub mod filter;
pub mod guard;
pub mod mock;
pub mod store;

#[cfg(test)]
mod integration_tests;

pub use capture::{CaptureSink, CapturedPair, FileCaptureLog, LatestCapture};
pub use controller::Interceptor;
pub use error::{StoreError, StoreResult};
pub use filter::{DESCRIPTION_KEY_MARKER, EligibilityFilter};
pub use guard::{LocaleSwitchGuard, SecondaryText};
pub use mock::{MockMode, MockStore};
pub use store::{LocalizationStore, MemoryStore, SheetTable, load_sheet_table};
