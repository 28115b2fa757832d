//! Error types for edbinds
//!
//! This module defines the error hierarchy used throughout the library.
//! We use `thiserror` for library-style errors with clear error chains.
//!
//! Only unreadable files and malformed content are errors. Unresolved
//! device lookups, missing action metadata and missing secondary bindings
//! degrade to fallback values in the projector instead.

use std::io;
use std::path::PathBuf;

/// Main error type for the edbinds library
#[derive(Debug, thiserror::Error)]
pub enum EdBindsError {
    /// Binding file errors
    #[error("Binding file error: {0}")]
    Binding(#[from] BindingError),

    /// Action or device mapping errors
    #[error("Mapping error: {0}")]
    Mapping(#[from] MappingError),

    /// Export errors
    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Errors raised while opening a `.binds` file
#[derive(Debug, thiserror::Error)]
pub enum BindingError {
    /// File missing or unreadable
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Content is not a well-formed binding document
    #[error("Malformed binding file {}: {message}", .path.display())]
    Format { path: PathBuf, message: String },
}

/// Errors raised while loading action mappings or device maps
#[derive(Debug, thiserror::Error)]
pub enum MappingError {
    /// File or directory missing or unreadable
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// JSON did not match the expected record layout
    #[error("Malformed mapping file {}: {source}", .path.display())]
    Format {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors raised while serializing views
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("CSV export failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("Export produced invalid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

/// Configuration loading/parsing errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Home directory not found
    #[error("Could not determine home directory")]
    NoHomeDir,

    /// Config file could not be read
    #[error("Failed to read configuration {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Failed to parse TOML
    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Specialized Result type for edbinds operations
pub type Result<T> = std::result::Result<T, EdBindsError>;

/// Specialized Result type for binding file operations
pub type BindingResult<T> = std::result::Result<T, BindingError>;

/// Specialized Result type for mapping table operations
pub type MappingResult<T> = std::result::Result<T, MappingError>;

/// Specialized Result type for export operations
pub type ExportResult<T> = std::result::Result<T, ExportError>;

/// Specialized Result type for config operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
