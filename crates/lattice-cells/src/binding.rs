//! Binding descriptors.
//!
//! A [`BindingDescriptor`] is the plain-data description of how one control
//! property stays synchronized with a property of the row object. The factory
//! produces descriptors; the external binding runtime interprets them.
//!
//! # Direction
//!
//! | Context | Read-only definition | Editable definition |
//! |---------|----------------------|---------------------|
//! | display | one-way              | one-way             |
//! | edit    | one-way              | two-way             |
//!
//! # Example
//!
//! ```
//! use lattice_cells::{build_binding, BindingMode, CellDefinition};
//!
//! let def = CellDefinition::text("Total").with_format("N2");
//!
//! let display = build_binding(&def, true);
//! assert_eq!(display.mode, BindingMode::OneWay);
//! assert_eq!(display.string_format.as_deref(), Some("{0:N2}"));
//!
//! let edit = build_binding(&def, false);
//! assert_eq!(edit.mode, BindingMode::TwoWay);
//! ```

use lattice_cells_core::Culture;

use crate::converter::SharedConverter;
use crate::definition::{CellDefinition, EnablementRule, UpdateTrigger};
use crate::value::CellValue;

/// Direction of a binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BindingMode {
    /// Source to control only.
    OneWay,
    /// Source to control and control back to source.
    TwoWay,
}

/// The control property a binding drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BindingTarget {
    /// Checked state of a check glyph or check box.
    IsChecked,
    /// Fill brush of a color swatch.
    Fill,
    /// Selected color of a color picker.
    SelectedColor,
    /// Text of a text block, text box or editable combo box.
    Text,
    /// Selected value of a non-editable combo box.
    SelectedValue,
    /// Data context of a template host.
    DataContext,
}

/// Plain-data description of a binding between a row property and a control
/// property.
#[derive(Debug, Clone)]
pub struct BindingDescriptor {
    /// Source property path. `None` binds to the row object itself.
    pub path: Option<String>,
    /// Direction.
    pub mode: BindingMode,
    /// When edits are written back (two-way only).
    pub update_trigger: UpdateTrigger,
    /// Converter between source and control values.
    pub converter: Option<SharedConverter>,
    /// Parameter for the converter.
    pub converter_parameter: Option<CellValue>,
    /// Culture for the converter and the format. `None` means ambient.
    pub converter_culture: Option<Culture>,
    /// Composite format string applied to the converted value.
    pub string_format: Option<String>,
    /// Report data-validation errors of the source as control errors.
    pub validates_on_data_errors: bool,
    /// Report conversion failures as control errors.
    pub validates_on_exceptions: bool,
    /// Raise the control's source-updated notification on external updates.
    pub notify_on_source_updated: bool,
}

impl BindingDescriptor {
    /// A one-way binding to `path` with no converter or format.
    pub fn new(path: Option<String>, mode: BindingMode) -> Self {
        Self {
            path,
            mode,
            update_trigger: UpdateTrigger::Default,
            converter: None,
            converter_parameter: None,
            converter_culture: None,
            string_format: None,
            validates_on_data_errors: true,
            validates_on_exceptions: true,
            notify_on_source_updated: true,
        }
    }

    /// Returns `true` if the binding never writes back.
    pub fn is_one_way(&self) -> bool {
        self.mode == BindingMode::OneWay
    }

    /// Returns `true` if the binding writes back to the source.
    pub fn is_two_way(&self) -> bool {
        self.mode == BindingMode::TwoWay
    }
}

/// Normalize a format string into composite form.
///
/// - empty or absent: no format
/// - starts with `{`: already composite, used verbatim
/// - anything else: wrapped as `{0:<format>}`
///
/// ```
/// use lattice_cells::normalize_format;
///
/// assert_eq!(normalize_format(Some("N2")).as_deref(), Some("{0:N2}"));
/// assert_eq!(normalize_format(Some("{0:N2}")).as_deref(), Some("{0:N2}"));
/// assert_eq!(normalize_format(Some("")), None);
/// ```
pub fn normalize_format(format: Option<&str>) -> Option<String> {
    match format {
        None | Some("") => None,
        Some(f) if f.starts_with('{') => Some(f.to_string()),
        Some(f) => Some(format!("{{0:{f}}}")),
    }
}

/// Build the binding descriptor for a definition.
///
/// The binding is one-way when `for_display` is set or the definition is
/// read-only, two-way otherwise. Converter, parameter and culture pass
/// through unchanged; the culture is only present when the definition sets
/// one.
pub fn build_binding(definition: &CellDefinition, for_display: bool) -> BindingDescriptor {
    let mode = if for_display || definition.read_only {
        BindingMode::OneWay
    } else {
        BindingMode::TwoWay
    };

    let descriptor = BindingDescriptor {
        path: definition.binding_path.clone(),
        mode,
        update_trigger: definition.update_trigger,
        converter: definition.converter.clone(),
        converter_parameter: definition.converter_parameter.clone(),
        converter_culture: definition.converter_culture.clone(),
        string_format: normalize_format(definition.string_format.as_deref()),
        validates_on_data_errors: true,
        validates_on_exceptions: true,
        notify_on_source_updated: true,
    };

    tracing::trace!(
        target: "lattice_cells::binding",
        path = ?descriptor.path,
        mode = ?descriptor.mode,
        format = ?descriptor.string_format,
        has_converter = descriptor.converter.is_some(),
        "built binding"
    );

    descriptor
}

/// Build a binding that never writes back, whatever the definition says.
///
/// Used for display-only views of editable values, such as a color preview
/// bound to the same path as an editable color picker.
pub fn build_one_way_binding(definition: &CellDefinition) -> BindingDescriptor {
    let mut descriptor = build_binding(definition, true);
    descriptor.mode = BindingMode::OneWay;
    descriptor
}

/// Binding of a control's enabled state to an external property.
#[derive(Debug, Clone, PartialEq)]
pub struct EnablementBinding {
    /// Path of the property that decides enablement.
    pub path: String,
    /// Value that property must have for the control to be enabled.
    pub expected: CellValue,
}

impl EnablementBinding {
    /// Compute the enabled state from the property's current value.
    pub fn evaluate(&self, current: &CellValue) -> bool {
        *current == self.expected
    }
}

impl From<&EnablementRule> for EnablementBinding {
    fn from(rule: &EnablementRule) -> Self {
        Self {
            path: rule.path.clone(),
            expected: rule.value.clone(),
        }
    }
}
