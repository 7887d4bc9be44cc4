/// Error types for the host localization store boundary
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The store has no data for the requested locale
    UnsupportedLocale(String),
    /// No text exists under (sheet, key) in the active locale
    MissingEntry { sheet: String, key: String },
    /// The store backend itself failed (host-side fault)
    Backend(String),
    /// Error reading a locale table from disk
    Io(String),
    /// Error decoding a locale table
    Parse(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::UnsupportedLocale(code) => write!(f, "Unsupported locale: {}", code),
            StoreError::MissingEntry { sheet, key } => {
                write!(f, "No entry for {}.{}", sheet, key)
            }
            StoreError::Backend(msg) => write!(f, "Store backend error: {}", msg),
            StoreError::Io(msg) => write!(f, "I/O error: {}", msg),
            StoreError::Parse(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;
