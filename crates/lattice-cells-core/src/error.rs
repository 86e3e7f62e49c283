//! Error types for Lattice Cells core primitives.

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while parsing core primitives.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A color string could not be parsed.
    #[error("Invalid color '{input}': {reason}")]
    InvalidColor { input: String, reason: String },

    /// A culture tag is empty or contains characters outside `[A-Za-z0-9-]`.
    #[error("Invalid culture tag '{tag}'")]
    InvalidCulture { tag: String },
}

impl Error {
    /// Create a color parse error.
    pub fn invalid_color(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidColor {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Create a culture parse error.
    pub fn invalid_culture(tag: impl Into<String>) -> Self {
        Self::InvalidCulture { tag: tag.into() }
    }
}
