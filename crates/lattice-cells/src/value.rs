//! Values flowing through cell definitions and converters.
//!
//! [`CellValue`] is the type-erased container used wherever the factory has
//! to carry a piece of data it does not interpret itself: converter
//! parameters, inline items of a select cell, the comparison value of an
//! enablement rule, and converter inputs and outputs.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use lattice_cells_core::{Brush, Color};

/// Type-erased container for cell data.
///
/// # Example
///
/// ```
/// use lattice_cells::CellValue;
///
/// let value = CellValue::from("Hello");
/// assert_eq!(value.as_str(), Some("Hello"));
///
/// let value = CellValue::new(42u32);
/// assert_eq!(value.downcast::<u32>(), Some(&42));
/// ```
#[derive(Clone, Default)]
pub enum CellValue {
    /// No value.
    #[default]
    None,
    /// Boolean value.
    Bool(bool),
    /// Integer value.
    Int(i64),
    /// Floating point value.
    Float(f64),
    /// String value.
    String(String),
    /// Color value.
    Color(Color),
    /// Fill brush.
    Brush(Brush),
    /// A list of values.
    List(Vec<CellValue>),
    /// Custom data (type-erased, shared).
    Custom(Arc<dyn Any + Send + Sync>),
}

impl CellValue {
    /// Creates new custom data from any type.
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        CellValue::Custom(Arc::new(value))
    }

    /// Returns `true` if this is `CellValue::None`.
    pub fn is_none(&self) -> bool {
        matches!(self, CellValue::None)
    }

    /// Returns `true` if this contains some data.
    pub fn is_some(&self) -> bool {
        !self.is_none()
    }

    /// Attempts to get the value as a string slice.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            CellValue::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Attempts to get the value as an integer.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            CellValue::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to get the value as a float. Integers widen.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            CellValue::Float(n) => Some(*n),
            CellValue::Int(n) => Some(*n as f64),
            _ => None,
        }
    }

    /// Attempts to get the value as a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            CellValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Attempts to get the value as a color.
    pub fn as_color(&self) -> Option<Color> {
        match self {
            CellValue::Color(c) => Some(*c),
            _ => None,
        }
    }

    /// Attempts to get the value as a brush.
    pub fn as_brush(&self) -> Option<Brush> {
        match self {
            CellValue::Brush(b) => Some(*b),
            _ => None,
        }
    }

    /// Attempts to get the value as a list.
    pub fn as_list(&self) -> Option<&[CellValue]> {
        match self {
            CellValue::List(items) => Some(items),
            _ => None,
        }
    }

    /// Attempts to downcast custom data to the specified type.
    pub fn downcast<T: Any>(&self) -> Option<&T> {
        match self {
            CellValue::Custom(data) => data.downcast_ref::<T>(),
            _ => None,
        }
    }

    /// Short name of the variant, used in conversion error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            CellValue::None => "none",
            CellValue::Bool(_) => "bool",
            CellValue::Int(_) => "int",
            CellValue::Float(_) => "float",
            CellValue::String(_) => "string",
            CellValue::Color(_) => "color",
            CellValue::Brush(_) => "brush",
            CellValue::List(_) => "list",
            CellValue::Custom(_) => "custom",
        }
    }
}

impl PartialEq for CellValue {
    /// Custom values compare by identity.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (CellValue::None, CellValue::None) => true,
            (CellValue::Bool(a), CellValue::Bool(b)) => a == b,
            (CellValue::Int(a), CellValue::Int(b)) => a == b,
            (CellValue::Float(a), CellValue::Float(b)) => a == b,
            (CellValue::String(a), CellValue::String(b)) => a == b,
            (CellValue::Color(a), CellValue::Color(b)) => a == b,
            (CellValue::Brush(a), CellValue::Brush(b)) => a == b,
            (CellValue::List(a), CellValue::List(b)) => a == b,
            (CellValue::Custom(a), CellValue::Custom(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Debug for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::None => f.write_str("None"),
            CellValue::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            CellValue::Int(n) => f.debug_tuple("Int").field(n).finish(),
            CellValue::Float(n) => f.debug_tuple("Float").field(n).finish(),
            CellValue::String(s) => f.debug_tuple("String").field(s).finish(),
            CellValue::Color(c) => f.debug_tuple("Color").field(c).finish(),
            CellValue::Brush(b) => f.debug_tuple("Brush").field(b).finish(),
            CellValue::List(items) => f.debug_tuple("List").field(items).finish(),
            CellValue::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::String(s)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::String(s.to_string())
    }
}

impl From<i64> for CellValue {
    fn from(n: i64) -> Self {
        CellValue::Int(n)
    }
}

impl From<i32> for CellValue {
    fn from(n: i32) -> Self {
        CellValue::Int(n as i64)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Float(n)
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Bool(b)
    }
}

impl From<Color> for CellValue {
    fn from(c: Color) -> Self {
        CellValue::Color(c)
    }
}

impl From<Brush> for CellValue {
    fn from(b: Brush) -> Self {
        CellValue::Brush(b)
    }
}

impl<T: Into<CellValue>> From<Vec<T>> for CellValue {
    fn from(items: Vec<T>) -> Self {
        CellValue::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(CellValue::None, Into::into)
    }
}
