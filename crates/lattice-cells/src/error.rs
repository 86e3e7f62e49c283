//! Error types for Lattice Cells.
//!
//! Control construction itself never fails. The errors here come from the
//! edges of the crate: value converters, which the binding runtime reports
//! as validation errors on the bound control, and factory configuration
//! loading.

use std::path::PathBuf;

/// Result type alias for Lattice Cells operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in Lattice Cells.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A value converter rejected its input.
    #[error(transparent)]
    Conversion(#[from] ConversionError),

    /// Configuration text could not be parsed.
    #[error("Invalid factory configuration: {message}")]
    Config { message: String },

    /// Configuration file I/O error.
    #[error("Failed to read factory configuration '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
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
}

/// Failure of a single value conversion.
///
/// Bindings built by the factory request that these surface as validation
/// errors on the control rather than being swallowed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{converter} cannot convert {found}: {message}")]
pub struct ConversionError {
    /// Name of the converter that failed.
    pub converter: &'static str,
    /// Type name of the rejected value.
    pub found: &'static str,
    /// Details.
    pub message: String,
}

impl ConversionError {
    /// Create a conversion error.
    pub fn new(converter: &'static str, found: &'static str, message: impl Into<String>) -> Self {
        Self {
            converter,
            found,
            message: message.into(),
        }
    }

    /// The converter does not support converting back to the source.
    pub fn unsupported_back(converter: &'static str, found: &'static str) -> Self {
        Self::new(converter, found, "converting back is not supported")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversion_error_message() {
        let err = ConversionError::new("ColorToBrushConverter", "int", "expected a color");
        assert_eq!(
            err.to_string(),
            "ColorToBrushConverter cannot convert int: expected a color"
        );

        let err: Error = err.into();
        assert!(matches!(err, Error::Conversion(_)));
    }

    #[test]
    fn test_config_error_message() {
        let err = Error::config("unknown field `foo`");
        assert_eq!(
            err.to_string(),
            "Invalid factory configuration: unknown field `foo`"
        );
    }
}
