//! Value converters applied by bindings.
//!
//! A converter sits between the bound source property and the control
//! property. Cell definitions may carry one user converter; the factory adds
//! its own layer on top where a control needs a different value shape than
//! the cell holds (a color swatch is filled with a brush, not a color).
//!
//! Converters are evaluated by the external binding runtime, never by the
//! factory. A failing conversion returns a [`ConversionError`], which the
//! runtime reports as a validation error on the control.

use std::fmt;
use std::sync::Arc;

use lattice_cells_core::{Brush, Color, Culture};

use crate::error::ConversionError;
use crate::value::CellValue;

/// A shared, thread-safe converter reference.
pub type SharedConverter = Arc<dyn ValueConverter>;

/// Converts values between a binding source and a control property.
pub trait ValueConverter: Send + Sync + fmt::Debug {
    /// Name used in error messages and logs.
    fn name(&self) -> &'static str;

    /// Convert a source value for display in the control.
    fn convert(
        &self,
        value: &CellValue,
        parameter: Option<&CellValue>,
        culture: Option<&Culture>,
    ) -> Result<CellValue, ConversionError>;

    /// Convert a control value back to the source.
    ///
    /// The default rejects the conversion, which makes a two-way binding
    /// through this converter report a validation error on write.
    fn convert_back(
        &self,
        value: &CellValue,
        _parameter: Option<&CellValue>,
        _culture: Option<&Culture>,
    ) -> Result<CellValue, ConversionError> {
        Err(ConversionError::unsupported_back(
            self.name(),
            value.type_name(),
        ))
    }
}

/// Converts colors to solid fill brushes.
///
/// Accepts colors, brushes (passed through) and `#RRGGBB[AA]` strings.
/// An empty value converts to an empty value so an unset cell paints
/// nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct ColorToBrushConverter;

impl ValueConverter for ColorToBrushConverter {
    fn name(&self) -> &'static str {
        "ColorToBrushConverter"
    }

    fn convert(
        &self,
        value: &CellValue,
        _parameter: Option<&CellValue>,
        _culture: Option<&Culture>,
    ) -> Result<CellValue, ConversionError> {
        match value {
            CellValue::None => Ok(CellValue::None),
            CellValue::Color(color) => Ok(CellValue::Brush(Brush::solid(*color))),
            CellValue::Brush(brush) => Ok(CellValue::Brush(*brush)),
            CellValue::String(text) => text
                .parse::<Color>()
                .map(|color| CellValue::Brush(Brush::solid(color)))
                .map_err(|err| ConversionError::new(self.name(), "string", err.to_string())),
            other => Err(ConversionError::new(
                self.name(),
                other.type_name(),
                "expected a color",
            )),
        }
    }

    fn convert_back(
        &self,
        value: &CellValue,
        _parameter: Option<&CellValue>,
        _culture: Option<&Culture>,
    ) -> Result<CellValue, ConversionError> {
        match value {
            CellValue::None => Ok(CellValue::None),
            CellValue::Brush(brush) => Ok(CellValue::Color(brush.color())),
            other => Err(ConversionError::new(
                self.name(),
                other.type_name(),
                "expected a brush",
            )),
        }
    }
}

/// Runs one converter, then feeds its output into another.
///
/// The converter parameter belongs to the first converter only; the second
/// stage sees no parameter. Both stages share the culture.
#[derive(Debug, Clone)]
pub struct ChainedConverter {
    first: SharedConverter,
    then: SharedConverter,
}

impl ChainedConverter {
    /// Chain `first` into `then`.
    pub fn new(first: SharedConverter, then: SharedConverter) -> Self {
        Self { first, then }
    }

    /// The converter that runs first.
    pub fn first(&self) -> &SharedConverter {
        &self.first
    }

    /// The converter that runs on the first converter's output.
    pub fn then(&self) -> &SharedConverter {
        &self.then
    }
}

impl ValueConverter for ChainedConverter {
    fn name(&self) -> &'static str {
        "ChainedConverter"
    }

    fn convert(
        &self,
        value: &CellValue,
        parameter: Option<&CellValue>,
        culture: Option<&Culture>,
    ) -> Result<CellValue, ConversionError> {
        let intermediate = self.first.convert(value, parameter, culture)?;
        self.then.convert(&intermediate, None, culture)
    }

    fn convert_back(
        &self,
        value: &CellValue,
        parameter: Option<&CellValue>,
        culture: Option<&Culture>,
    ) -> Result<CellValue, ConversionError> {
        let intermediate = self.then.convert_back(value, None, culture)?;
        self.first.convert_back(&intermediate, parameter, culture)
    }
}

type ConvertFn =
    dyn Fn(&CellValue, Option<&CellValue>, Option<&Culture>) -> Result<CellValue, ConversionError>
        + Send
        + Sync;

/// A one-way converter built from a closure.
///
/// # Example
///
/// ```
/// use lattice_cells::{CellValue, FnConverter, ValueConverter};
///
/// let upper = FnConverter::new("Upper", |value, _, _| {
///     Ok(CellValue::from(value.as_str().unwrap_or_default().to_uppercase()))
/// });
/// let out = upper.convert(&CellValue::from("abc"), None, None).unwrap();
/// assert_eq!(out.as_str(), Some("ABC"));
/// ```
#[derive(Clone)]
pub struct FnConverter {
    name: &'static str,
    convert: Arc<ConvertFn>,
}

impl FnConverter {
    /// Create a converter from a name and a conversion closure.
    pub fn new<F>(name: &'static str, convert: F) -> Self
    where
        F: Fn(&CellValue, Option<&CellValue>, Option<&Culture>) -> Result<CellValue, ConversionError>
            + Send
            + Sync
            + 'static,
    {
        Self {
            name,
            convert: Arc::new(convert),
        }
    }
}

impl fmt::Debug for FnConverter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnConverter").field("name", &self.name).finish()
    }
}

impl ValueConverter for FnConverter {
    fn name(&self) -> &'static str {
        self.name
    }

    fn convert(
        &self,
        value: &CellValue,
        parameter: Option<&CellValue>,
        culture: Option<&Culture>,
    ) -> Result<CellValue, ConversionError> {
        (self.convert)(value, parameter, culture)
    }
}
