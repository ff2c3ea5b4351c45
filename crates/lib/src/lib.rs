//! Dotted-key nested maps with auto-vivification and map proxying.
//!
//! This library provides ergonomic nested, configuration-style data entry: a
//! single flat call can populate a multi-level structure, and flat and
//! path-style access read and write the same underlying data.
//!
//! ## Core Concepts
//!
//! * **[`DotMap`]**: a string-keyed map of [`Value`]s where a key containing
//!   `'.'` denotes a path through nested maps, created automatically at
//!   assignment time.
//! * **[`Value`]**: the value enum — leaf scalars, lists, and nested maps.
//!   JSON objects convert into nested maps recursively, so plain mappings
//!   become dotted-capable when inserted.
//! * **[`Path`]/[`PathBuf`]**: borrowed/owned dotted-path types; any `&str`
//!   works where a path is expected.
//! * **Auto-vivification**: [`DotMap::auto`] builds a map where missing
//!   levels spring into existence on access, to unbounded depth.
//! * **[`Proxy`]**: map-style access forwarded to a foreign [`MapStore`]
//!   target without copying its data.
//!
//! ```
//! use dotmap::DotMap;
//!
//! let mut config = DotMap::new();
//! config
//!     .update([("server.host", "localhost"), ("server.port", "8080")])?
//!     .update([("server.tls", "off")])?;
//!
//! assert_eq!(config["server"]["host"], "localhost");
//! assert_eq!(config.get_as::<&str>("server.tls"), Some("off"));
//! # Ok::<(), dotmap::MapError>(())
//! ```

pub mod map;

pub use map::{DotMap, MapError, MapStore, Path, PathBuf, Proxy, Value};

/// Result type used throughout the library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Structured map errors from the map module
    #[error(transparent)]
    Map(#[from] MapError),
}

impl Error {
    /// Check if this error indicates a missing key or path.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::Map(map_err) => map_err.is_not_found(),
            _ => false,
        }
    }

    /// Check if this error is a type mismatch.
    pub fn is_type_error(&self) -> bool {
        match self {
            Error::Map(map_err) => map_err.is_type_error(),
            _ => false,
        }
    }

    /// Check if this error is serialization-related.
    pub fn is_serialization_error(&self) -> bool {
        matches!(self, Error::Serialize(_))
    }
}
