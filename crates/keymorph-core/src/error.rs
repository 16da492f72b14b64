//! Error types for keymorph-core

use thiserror::Error;

/// Result type alias for keymorph-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in keymorph-core
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration named an option that does not exist
    #[error("unknown option '{name}'")]
    UnknownOption {
        /// Option name as given by the caller
        name: String,
    },

    /// Configuration option carried a value of the wrong shape
    #[error("invalid value for option '{name}': {message}")]
    InvalidOption {
        /// Option name
        name: String,
        /// Description of what's invalid
        message: String,
    },

    /// Failed to parse a YAML configuration document
    #[error("failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    /// Input nested deeper than the configured limit
    #[error("input nesting exceeds the depth limit of {limit}")]
    DepthLimitExceeded {
        /// Configured `max_depth`
        limit: usize,
    },

    /// Symbol table refused to intern another symbol
    #[error("symbol table is full ({capacity} symbols)")]
    SymbolTableFull {
        /// Capacity of the exhausted table
        capacity: usize,
    },
}
