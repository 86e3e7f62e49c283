//! Control factory and binding engine for data-grid cells.
//!
//! This crate turns declarative cell definitions into bound controls:
//!
//! - **Definitions**: [`CellDefinition`] describes a cell's binding path,
//!   format, converter, read-only flag and variant ([`CellKind`])
//! - **Factory**: [`CellControlFactory`] builds the display control and the
//!   edit control for a definition
//! - **Bindings**: [`BindingDescriptor`] is the plain-data binding each
//!   control carries, interpreted by the host's binding runtime
//! - **Builders**: the [`builders`] table maps each variant and mode to a
//!   builder function that can be replaced individually
//! - **Focus**: [`FocusRouter`] returns focus to the grid when a combo box
//!   commits
//! - **Style**: [`FactoryStyle`] holds presentation settings, loadable from
//!   TOML
//!
//! # Example
//!
//! ```
//! use lattice_cells::prelude::*;
//!
//! let factory = CellControlFactory::new();
//! let def = CellDefinition::color("Tint").with_read_only(true);
//!
//! // The preview swatch is always bound one-way.
//! let display = factory.create_display_control(&def);
//! let fill = display.leaf().binding(BindingTarget::Fill).unwrap();
//! assert_eq!(fill.mode, BindingMode::OneWay);
//!
//! // Read-only forces one-way on the edit path too.
//! let edit = factory.create_edit_control(&def).unwrap();
//! let selected = edit.binding(BindingTarget::SelectedColor).unwrap();
//! assert_eq!(selected.mode, BindingMode::OneWay);
//! ```

mod binding;
pub mod builders;
mod control;
mod converter;
mod definition;
mod error;
mod factory;
mod focus;
mod style;
mod template;
mod value;

pub use binding::{
    build_binding, build_one_way_binding, normalize_format, BindingDescriptor, BindingMode,
    BindingTarget, EnablementBinding,
};
pub use control::{ComboBoxConfig, Control, ControlKind, ControlSignals, Thickness};
pub use converter::{
    ChainedConverter, ColorToBrushConverter, FnConverter, SharedConverter, ValueConverter,
};
pub use definition::{
    CellDefinition, CellKind, CellMode, EnablementRule, HorizontalAlignment, ItemsSource,
    SelectCell, TemplateCell, UpdateTrigger, VariantTag, VerticalAlignment,
};
pub use error::{ConversionError, Error, Result};
pub use factory::{CellControlFactory, CellControlSource};
pub use focus::{FocusRouter, FocusTarget};
pub use style::{CheckStyle, FactoryStyle};
pub use template::CellTemplate;
pub use value::CellValue;

pub use lattice_cells_core::{Brush, Color, Culture};

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::binding::{BindingDescriptor, BindingMode, BindingTarget};
    pub use crate::control::{Control, ControlKind};
    pub use crate::converter::{FnConverter, ValueConverter};
    pub use crate::definition::{
        CellDefinition, CellKind, CellMode, HorizontalAlignment, SelectCell, TemplateCell,
        VariantTag,
    };
    pub use crate::factory::{CellControlFactory, CellControlSource};
    pub use crate::focus::{FocusRouter, FocusTarget};
    pub use crate::style::{CheckStyle, FactoryStyle};
    pub use crate::template::CellTemplate;
    pub use crate::value::CellValue;
    pub use lattice_cells_core::Color;
}
