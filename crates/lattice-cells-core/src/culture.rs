//! Culture tags for value conversion.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A culture (locale) tag such as `en-US` or `de`.
///
/// Cultures are attached to a binding only when a cell definition sets one
/// explicitly. There is no built-in default culture: an absent culture means
/// the binding runtime uses its ambient culture.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Culture(String);

impl Culture {
    /// Parse a culture tag.
    ///
    /// Tags must be non-empty and consist of ASCII letters, digits and `-`.
    /// `_` separators are normalized to `-`.
    pub fn new(tag: impl AsRef<str>) -> crate::Result<Self> {
        let tag = tag.as_ref().trim();
        let valid = !tag.is_empty()
            && !tag.starts_with(['-', '_'])
            && !tag.ends_with(['-', '_'])
            && tag
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(Error::invalid_culture(tag));
        }
        Ok(Self(tag.replace('_', "-")))
    }

    /// The normalized tag.
    pub fn tag(&self) -> &str {
        &self.0
    }

    /// The language subtag (the part before the first `-`).
    pub fn language(&self) -> &str {
        self.0.split('-').next().unwrap_or(&self.0)
    }
}

impl FromStr for Culture {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Culture {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Culture> for String {
    fn from(culture: Culture) -> Self {
        culture.0
    }
}

impl fmt::Display for Culture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_culture_parse() {
        let culture = Culture::new("en_US").unwrap();
        assert_eq!(culture.tag(), "en-US");
        assert_eq!(culture.language(), "en");

        let culture: Culture = "de".parse().unwrap();
        assert_eq!(culture.language(), "de");
    }

    #[test]
    fn test_culture_invalid() {
        assert!(Culture::new("").is_err());
        assert!(Culture::new("en US").is_err());
        assert!(Culture::new("-en").is_err());
    }
}
