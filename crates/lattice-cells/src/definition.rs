//! Cell definitions.
//!
//! A [`CellDefinition`] is the declarative description of one column's cells:
//! which row property they bind to, how values are formatted and converted,
//! whether they may be edited, and which kind of cell they are. The grid's
//! configuration layer builds definitions once per column; the factory only
//! ever borrows them.
//!
//! # Example
//!
//! ```
//! use lattice_cells::{CellDefinition, HorizontalAlignment, VariantTag};
//!
//! let price = CellDefinition::text("Price")
//!     .with_format("N2")
//!     .with_alignment(HorizontalAlignment::Right)
//!     .with_max_length(12);
//!
//! assert_eq!(price.variant(), VariantTag::Text);
//! assert_eq!(price.binding_path.as_deref(), Some("Price"));
//! ```

use std::fmt;

use lattice_cells_core::{Color, Culture};

use crate::converter::SharedConverter;
use crate::template::CellTemplate;
use crate::value::CellValue;

/// Horizontal alignment of a control within its cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HorizontalAlignment {
    /// Align to the left edge.
    #[default]
    Left,
    /// Align to the center.
    Center,
    /// Align to the right edge.
    Right,
    /// Fill the available width.
    Stretch,
}

/// Vertical alignment of a control within its cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VerticalAlignment {
    /// Align to the top edge.
    Top,
    /// Align to the center.
    #[default]
    Center,
    /// Align to the bottom edge.
    Bottom,
    /// Fill the available height.
    Stretch,
}

/// When a two-way binding writes the control value back to the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum UpdateTrigger {
    /// Whatever the target property's default is.
    #[default]
    Default,
    /// On every change of the control value.
    PropertyChanged,
    /// When the control loses focus.
    LostFocus,
    /// Only when the runtime is told to update explicitly.
    Explicit,
}

/// Enables a control only while an external property equals a value.
#[derive(Debug, Clone, PartialEq)]
pub struct EnablementRule {
    /// Path of the property that decides enablement.
    pub path: String,
    /// Value that property must have for the control to be enabled.
    pub value: CellValue,
}

impl EnablementRule {
    /// Create a new enablement rule.
    pub fn new(path: impl Into<String>, value: impl Into<CellValue>) -> Self {
        Self {
            path: path.into(),
            value: value.into(),
        }
    }
}

/// Which control the factory is asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellMode {
    /// The read-path control shown while the cell is not being edited.
    Display,
    /// The write-path control shown while the cell is being edited.
    Edit,
}

impl fmt::Display for CellMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellMode::Display => f.write_str("display"),
            CellMode::Edit => f.write_str("edit"),
        }
    }
}

/// Dispatch tag of a [`CellKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariantTag {
    /// A definition without variant data.
    Base,
    /// Boolean cell.
    Check,
    /// Color cell.
    Color,
    /// Text or scalar cell.
    Text,
    /// Selection from a list of items.
    Select,
    /// Caller-templated content.
    Template,
}

impl VariantTag {
    /// All tags, in declaration order.
    pub const ALL: [VariantTag; 6] = [
        VariantTag::Base,
        VariantTag::Check,
        VariantTag::Color,
        VariantTag::Text,
        VariantTag::Select,
        VariantTag::Template,
    ];
}

impl fmt::Display for VariantTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            VariantTag::Base => "base",
            VariantTag::Check => "check",
            VariantTag::Color => "color",
            VariantTag::Text => "text",
            VariantTag::Select => "select",
            VariantTag::Template => "template",
        };
        f.write_str(name)
    }
}

/// Where a combo box gets its items from.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ItemsSource {
    /// No items configured.
    #[default]
    None,
    /// Items carried by the definition itself.
    Inline(Vec<CellValue>),
    /// Items bound from a property path on the row.
    Bound {
        /// Path of the items property.
        path: String,
    },
}

/// Variant data of a select cell.
#[derive(Debug, Clone, Default)]
pub struct SelectCell {
    /// Allow free text alongside selection.
    pub editable: bool,
    /// Inline items. Take precedence over `items_path`.
    pub items: Option<Vec<CellValue>>,
    /// Path to an externally bound items source.
    pub items_path: Option<String>,
    /// Path used to extract the value from a selected item.
    pub selected_value_path: Option<String>,
    /// Path used to extract the text shown for an item.
    pub display_member_path: Option<String>,
}

impl SelectCell {
    /// Create an empty, non-editable select cell.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder pattern: set whether free text is allowed.
    pub fn with_editable(mut self, editable: bool) -> Self {
        self.editable = editable;
        self
    }

    /// Builder pattern: set the inline items.
    pub fn with_items<I, T>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<CellValue>,
    {
        self.items = Some(items.into_iter().map(Into::into).collect());
        self
    }

    /// Builder pattern: bind the items from a row property.
    pub fn with_items_path(mut self, path: impl Into<String>) -> Self {
        self.items_path = Some(path.into());
        self
    }

    /// Builder pattern: set the selected value path.
    pub fn with_selected_value_path(mut self, path: impl Into<String>) -> Self {
        self.selected_value_path = Some(path.into());
        self
    }

    /// Builder pattern: set the display member path.
    pub fn with_display_member_path(mut self, path: impl Into<String>) -> Self {
        self.display_member_path = Some(path.into());
        self
    }

    /// Resolve the items source. Inline items win over a bound path.
    pub fn items_source(&self) -> ItemsSource {
        match (&self.items, &self.items_path) {
            (Some(items), _) => ItemsSource::Inline(items.clone()),
            (None, Some(path)) => ItemsSource::Bound { path: path.clone() },
            (None, None) => ItemsSource::None,
        }
    }
}

/// Variant data of a template cell.
#[derive(Debug, Clone)]
pub struct TemplateCell {
    /// Template used in display mode.
    pub display: CellTemplate,
    /// Template used in edit mode. Falls back to `display` when absent.
    pub edit: Option<CellTemplate>,
}

impl TemplateCell {
    /// Create a template cell with only a display template.
    pub fn new(display: CellTemplate) -> Self {
        Self {
            display,
            edit: None,
        }
    }

    /// Builder pattern: set the edit template.
    pub fn with_edit(mut self, edit: CellTemplate) -> Self {
        self.edit = Some(edit);
        self
    }

    /// The template to use for a mode.
    pub fn template_for(&self, mode: CellMode) -> &CellTemplate {
        match mode {
            CellMode::Display => &self.display,
            CellMode::Edit => self.edit.as_ref().unwrap_or(&self.display),
        }
    }
}

/// The kind of a cell, with its variant-specific data.
#[derive(Debug, Clone)]
pub enum CellKind {
    /// No variant data. Always rendered through the text fallback.
    Base,
    /// Boolean cell.
    Check,
    /// Color cell.
    Color,
    /// Text or scalar cell.
    Text {
        /// Maximum input length; `0` means unlimited.
        max_length: usize,
    },
    /// Selection from a list of items.
    Select(SelectCell),
    /// Caller-templated content.
    Template(TemplateCell),
}

impl CellKind {
    /// The dispatch tag of this kind.
    pub fn tag(&self) -> VariantTag {
        match self {
            CellKind::Base => VariantTag::Base,
            CellKind::Check => VariantTag::Check,
            CellKind::Color => VariantTag::Color,
            CellKind::Text { .. } => VariantTag::Text,
            CellKind::Select(_) => VariantTag::Select,
            CellKind::Template(_) => VariantTag::Template,
        }
    }
}

/// Declarative description of a cell's binding and presentation rules.
#[derive(Debug, Clone)]
pub struct CellDefinition {
    /// Horizontal alignment of the control (or its content, for text boxes).
    pub horizontal_alignment: HorizontalAlignment,
    /// Path of the row property this cell binds to.
    pub binding_path: Option<String>,
    /// When edits are written back.
    pub update_trigger: UpdateTrigger,
    /// Whether the cell may be edited.
    pub read_only: bool,
    /// Raw (`N2`) or composite (`{0:N2}`) format string.
    pub string_format: Option<String>,
    /// User converter applied by the binding.
    pub converter: Option<SharedConverter>,
    /// Parameter handed to the user converter.
    pub converter_parameter: Option<CellValue>,
    /// Culture for the conversion. Absent means the runtime's ambient culture.
    pub converter_culture: Option<Culture>,
    /// Row background painted behind the control.
    pub background: Option<Color>,
    /// External enablement rule, applied to display controls.
    pub enabled_when: Option<EnablementRule>,
    /// The variant.
    pub kind: CellKind,
}

impl CellDefinition {
    /// Create a definition of the given kind with default attributes.
    pub fn new(kind: CellKind) -> Self {
        Self {
            horizontal_alignment: HorizontalAlignment::default(),
            binding_path: None,
            update_trigger: UpdateTrigger::default(),
            read_only: false,
            string_format: None,
            converter: None,
            converter_parameter: None,
            converter_culture: None,
            background: None,
            enabled_when: None,
            kind,
        }
    }

    /// A definition without variant data bound to `path`.
    pub fn base(path: impl Into<String>) -> Self {
        Self::new(CellKind::Base).with_binding_path(path)
    }

    /// A boolean cell bound to `path`.
    pub fn check(path: impl Into<String>) -> Self {
        Self::new(CellKind::Check).with_binding_path(path)
    }

    /// A color cell bound to `path`.
    pub fn color(path: impl Into<String>) -> Self {
        Self::new(CellKind::Color).with_binding_path(path)
    }

    /// A text cell bound to `path`, with unlimited input length.
    pub fn text(path: impl Into<String>) -> Self {
        Self::new(CellKind::Text { max_length: 0 }).with_binding_path(path)
    }

    /// A select cell bound to `path`.
    pub fn select(path: impl Into<String>, select: SelectCell) -> Self {
        Self::new(CellKind::Select(select)).with_binding_path(path)
    }

    /// A template cell. Templates may be static, so no path is required.
    pub fn template(template: TemplateCell) -> Self {
        Self::new(CellKind::Template(template))
    }

    /// The dispatch tag of this definition.
    pub fn variant(&self) -> VariantTag {
        self.kind.tag()
    }

    /// Builder pattern: set the horizontal alignment.
    pub fn with_alignment(mut self, alignment: HorizontalAlignment) -> Self {
        self.horizontal_alignment = alignment;
        self
    }

    /// Builder pattern: set the binding path.
    pub fn with_binding_path(mut self, path: impl Into<String>) -> Self {
        self.binding_path = Some(path.into());
        self
    }

    /// Builder pattern: set the update trigger.
    pub fn with_update_trigger(mut self, trigger: UpdateTrigger) -> Self {
        self.update_trigger = trigger;
        self
    }

    /// Builder pattern: set the read-only flag.
    pub fn with_read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    /// Builder pattern: set the format string.
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.string_format = Some(format.into());
        self
    }

    /// Builder pattern: set the user converter.
    pub fn with_converter(mut self, converter: SharedConverter) -> Self {
        self.converter = Some(converter);
        self
    }

    /// Builder pattern: set the converter parameter.
    pub fn with_converter_parameter(mut self, parameter: impl Into<CellValue>) -> Self {
        self.converter_parameter = Some(parameter.into());
        self
    }

    /// Builder pattern: set the converter culture.
    pub fn with_converter_culture(mut self, culture: Culture) -> Self {
        self.converter_culture = Some(culture);
        self
    }

    /// Builder pattern: set the background color.
    pub fn with_background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    /// Builder pattern: enable the display control only while the property
    /// at `path` equals `value`.
    pub fn with_enabled_when(mut self, path: impl Into<String>, value: impl Into<CellValue>) -> Self {
        self.enabled_when = Some(EnablementRule::new(path, value));
        self
    }

    /// Builder pattern: set the maximum input length of a text cell.
    ///
    /// Has no effect on other kinds.
    pub fn with_max_length(mut self, max: usize) -> Self {
        if let CellKind::Text { max_length } = &mut self.kind {
            *max_length = max;
        }
        self
    }
}
