//! Factory presentation configuration.
//!
//! [`FactoryStyle`] holds the presentation knobs the builders apply on top
//! of what a cell definition declares: paddings, swatch size, how check
//! cells are shown, and the border of inline editors. Every field has a
//! default, so a configuration file only needs the keys it changes.
//!
//! # Example
//!
//! ```
//! use lattice_cells::{CheckStyle, FactoryStyle};
//!
//! let style = FactoryStyle::from_toml_str(r#"
//!     swatch_size = 16.0
//!     check_style = "toggle"
//! "#).unwrap();
//!
//! assert_eq!(style.swatch_size, 16.0);
//! assert_eq!(style.check_style, CheckStyle::Toggle);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::control::Thickness;
use crate::error::{Error, Result};

/// How check cells are displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckStyle {
    /// A check glyph that takes no input; the grid toggles the value.
    #[default]
    Glyph,
    /// A standard toggle control bound per the definition's read-only flag.
    Toggle,
}

/// Presentation configuration for the control factory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FactoryStyle {
    /// Padding inside display text blocks.
    pub text_padding: Thickness,
    /// Edge length of color preview swatches, in pixels.
    pub swatch_size: f32,
    /// How check cells are displayed.
    pub check_style: CheckStyle,
    /// Border thickness of inline text editors.
    pub editor_border_thickness: f32,
}

impl Default for FactoryStyle {
    fn default() -> Self {
        Self {
            text_padding: Thickness::symmetric(4.0, 2.0),
            swatch_size: 14.0,
            check_style: CheckStyle::Glyph,
            editor_border_thickness: 0.0,
        }
    }
}

impl FactoryStyle {
    /// Parse a style from TOML text.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let style: Self = toml::from_str(s).map_err(|e| Error::config(e.to_string()))?;
        style.validate()?;
        Ok(style)
    }

    /// Read a style from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let style = Self::from_toml_str(&content)?;
        tracing::debug!(target: "lattice_cells::config", path = %path.display(), "loaded factory style");
        Ok(style)
    }

    /// Serialize the style as TOML text.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| Error::config(e.to_string()))
    }

    /// Set the text padding using builder pattern.
    pub fn with_text_padding(mut self, padding: impl Into<Thickness>) -> Self {
        self.text_padding = padding.into();
        self
    }

    /// Set the swatch size using builder pattern.
    pub fn with_swatch_size(mut self, size: f32) -> Self {
        self.swatch_size = size;
        self
    }

    /// Set the check style using builder pattern.
    pub fn with_check_style(mut self, style: CheckStyle) -> Self {
        self.check_style = style;
        self
    }

    /// Set the editor border thickness using builder pattern.
    pub fn with_editor_border_thickness(mut self, thickness: f32) -> Self {
        self.editor_border_thickness = thickness;
        self
    }

    fn validate(&self) -> Result<()> {
        if !(self.swatch_size.is_finite() && self.swatch_size > 0.0) {
            return Err(Error::config(format!(
                "swatch_size must be positive, got {}",
                self.swatch_size
            )));
        }
        if !(self.editor_border_thickness.is_finite() && self.editor_border_thickness >= 0.0) {
            return Err(Error::config(format!(
                "editor_border_thickness must not be negative, got {}",
                self.editor_border_thickness
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_style() {
        let style = FactoryStyle::default();
        assert_eq!(style.swatch_size, 14.0);
        assert_eq!(style.check_style, CheckStyle::Glyph);
        assert_eq!(style.editor_border_thickness, 0.0);
        assert_eq!(style.text_padding, Thickness::symmetric(4.0, 2.0));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let style = FactoryStyle::from_toml_str("swatch_size = 20.0").unwrap();
        assert_eq!(style.swatch_size, 20.0);
        assert_eq!(style.check_style, CheckStyle::Glyph);
    }

    #[test]
    fn test_padding_table() {
        let style = FactoryStyle::from_toml_str(
            "text_padding = { left = 6.0, top = 1.0, right = 6.0, bottom = 1.0 }",
        )
        .unwrap();
        assert_eq!(style.text_padding, Thickness::symmetric(6.0, 1.0));
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = FactoryStyle::from_toml_str("swatch = 3.0").unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(FactoryStyle::from_toml_str("swatch_size = 0.0").is_err());
        assert!(FactoryStyle::from_toml_str("editor_border_thickness = -1.0").is_err());
        assert!(FactoryStyle::from_toml_str("check_style = \"switch\"").is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let style = FactoryStyle::default()
            .with_check_style(CheckStyle::Toggle)
            .with_swatch_size(18.0);
        let text = style.to_toml_string().unwrap();
        assert_eq!(FactoryStyle::from_toml_str(&text).unwrap(), style);
    }
}
