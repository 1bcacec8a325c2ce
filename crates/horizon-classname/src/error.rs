//! Error types for resolver configuration.
//!
//! Token resolution itself never fails; these errors only arise while
//! building a [`ResolverConfig`](crate::ResolverConfig).

use std::path::PathBuf;

/// Result type alias for configuration operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading resolver configuration.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The configuration document could not be decoded.
    #[error("Invalid resolver configuration: {message}")]
    Config { message: String },

    /// File I/O error.
    #[error("Failed to read resolver configuration '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A palette or gradient entry is not a valid color.
    #[error("Invalid color for '{name}': '{value}'")]
    InvalidColor { name: String, value: String },

    /// A unit scale is not a finite, positive number.
    #[error("Invalid unit scale for '{name}': {value}")]
    InvalidUnit { name: String, value: f32 },
}

impl Error {
    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a color error.
    pub fn invalid_color(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidColor {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Create a unit scale error.
    pub fn invalid_unit(name: impl Into<String>, value: f32) -> Self {
        Self::InvalidUnit {
            name: name.into(),
            value,
        }
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Self::config(err.to_string())
    }
}
