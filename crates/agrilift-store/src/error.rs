//! # Store Error Types
//!
//! Error types for the persistence port.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error / serde_json::Error                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StorageError (this module) ← adds the storage key as context          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Store operation returns Err ← only for WRITE-side failures            │
//! │                                                                         │
//! │  Decode failures on LOAD never reach the caller: the store logs a      │
//! │  warning, resets to empty, and overwrites the bad record.              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Persistence-port failures.
///
/// These surface only for write-side problems (disk full, permissions, an
/// unserializable record). Malformed data found while loading is recovered
/// in-store per the marketplace's degrade-to-empty policy.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the underlying store failed.
    #[error("storage I/O failed for key '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// Encoding a record to JSON failed.
    #[error("failed to encode record for key '{key}': {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

impl StorageError {
    /// Creates an Io error for a given storage key.
    pub fn io(key: impl Into<String>, source: std::io::Error) -> Self {
        StorageError::Io {
            key: key.into(),
            source,
        }
    }

    /// Creates an Encode error for a given storage key.
    pub fn encode(key: impl Into<String>, source: serde_json::Error) -> Self {
        StorageError::Encode {
            key: key.into(),
            source,
        }
    }
}

/// Convenience type alias for Results with StorageError.
pub type StoreResult<T> = Result<T, StorageError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_message_carries_key() {
        let err = StorageError::io(
            "agrilift-cart",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(err.to_string().contains("agrilift-cart"));
        assert!(err.to_string().contains("denied"));
    }
}
