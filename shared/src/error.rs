//! Error types for storage backends and the store.

use thiserror::Error;

/// Failure of the underlying key-value backend.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing a backing file failed.
    #[error("I/O error on `{key}`: {source}")]
    Io {
        /// Storage key being accessed.
        key: String,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The browser exposes no `localStorage` (private mode, no window).
    #[error("local storage is unavailable: {0}")]
    Unavailable(String),
    /// The backend refused the write, e.g. quota exceeded.
    #[error("storage rejected write to `{key}`: {reason}")]
    Rejected {
        /// Storage key being written.
        key: String,
        /// Backend-provided reason.
        reason: String,
    },
}

/// Errors surfaced by [`crate::NewsStore`].
///
/// Reads never fail on data shape: a missing key or corrupt JSON degrades to
/// an empty collection, and undecodable records are skipped. Writes refuse to
/// replace a collection that did not decode cleanly, see [`Self::Corrupt`].
#[derive(Error, Debug)]
pub enum StoreError {
    /// The key-value backend failed.
    #[error(transparent)]
    Storage(#[from] StorageError),
    /// The stored collection holds data this version cannot decode; writing
    /// it back would drop those records.
    #[error("refusing to overwrite `{key}`: {detail}")]
    Corrupt {
        /// Storage key of the collection.
        key: String,
        /// What failed to decode.
        detail: String,
    },
    /// Encoding a collection failed before it reached storage.
    #[error("failed to encode `{key}`: {source}")]
    Encode {
        /// Storage key of the collection.
        key: String,
        /// Underlying serializer failure.
        #[source]
        source: serde_json::Error,
    },
}

/// Result alias used by every store operation.
pub type StoreResult<T> = Result<T, StoreError>;
