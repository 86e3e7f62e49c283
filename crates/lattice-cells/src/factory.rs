//! The cell control factory.
//!
//! A grid asks the [`CellControlFactory`] for the control shown in a cell
//! while it is displayed and for the control used while it is edited. The
//! factory dispatches on the definition's variant through its
//! [`BuilderTable`], so every call is independent and depends only on the
//! definition and the factory configuration.
//!
//! # Display path
//!
//! | Variant  | Control                                   |
//! |----------|-------------------------------------------|
//! | check    | check glyph (or toggle, per style)        |
//! | color    | color swatch in a background wrapper      |
//! | template | content host with the display template    |
//! | other    | padded text block in a background wrapper |
//!
//! When the definition declares an enablement rule, the display control
//! gets an enablement binding for it.
//!
//! # Edit path
//!
//! | Variant  | Control                                        |
//! |----------|------------------------------------------------|
//! | select   | combo box                                      |
//! | check    | none; the display control is edited in place   |
//! | color    | color picker                                   |
//! | template | content host with the edit (or display) template |
//! | text     | text box                                       |
//! | other    | the display path                               |
//!
//! The edit path never attaches an enablement binding.
//!
//! # Example
//!
//! ```
//! use lattice_cells::{BindingMode, BindingTarget, CellControlFactory, CellDefinition, ControlKind};
//!
//! let factory = CellControlFactory::new();
//! let def = CellDefinition::text("Quantity").with_max_length(5);
//!
//! let display = factory.create_display_control(&def);
//! assert!(matches!(display.leaf().kind(), ControlKind::TextBlock));
//!
//! let edit = factory.create_edit_control(&def).unwrap();
//! assert!(matches!(edit.kind(), ControlKind::TextBox { max_length: Some(5) }));
//! assert_eq!(edit.binding(BindingTarget::Text).unwrap().mode, BindingMode::TwoWay);
//! ```

use std::sync::Arc;

use lattice_cells_core::PerfSpan;

use crate::binding::EnablementBinding;
use crate::builders::{BuildContext, BuilderTable};
use crate::control::Control;
use crate::definition::{CellDefinition, CellMode, VariantTag};
use crate::focus::{FocusRouter, FocusTarget};
use crate::style::FactoryStyle;

/// Produces display and edit controls for cell definitions.
///
/// Implemented by [`CellControlFactory`]; grids depend on this trait so a
/// different source of controls can be substituted.
pub trait CellControlSource: Send + Sync {
    /// The control shown while the cell is not being edited.
    fn display_control(&self, definition: &CellDefinition) -> Control;

    /// The control used while the cell is edited.
    ///
    /// `None` means the display control is edited in place.
    fn edit_control(&self, definition: &CellDefinition) -> Option<Control>;
}

/// Builds bound controls for cell definitions.
#[derive(Debug, Clone, Default)]
pub struct CellControlFactory {
    builders: BuilderTable,
    style: FactoryStyle,
    focus: FocusRouter,
}

static_assertions::assert_impl_all!(CellControlFactory: Send, Sync);

impl CellControlFactory {
    /// A factory with the standard builders, default style and no focus
    /// owner.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the presentation style using builder pattern.
    pub fn with_style(mut self, style: FactoryStyle) -> Self {
        self.style = style;
        self
    }

    /// Replace the whole builder table using builder pattern.
    pub fn with_builders(mut self, builders: BuilderTable) -> Self {
        self.builders = builders;
        self
    }

    /// Replace the builder for one `(variant, mode)` pair using builder
    /// pattern.
    pub fn with_builder<F>(mut self, tag: VariantTag, mode: CellMode, build: F) -> Self
    where
        F: Fn(&BuildContext<'_>, &CellDefinition) -> Control + Send + Sync + 'static,
    {
        self.builders = self.builders.with_builder(tag, mode, build);
        self
    }

    /// Return focus to `owner` when a combo box commits, using builder
    /// pattern.
    pub fn with_focus_owner<T: FocusTarget + 'static>(mut self, owner: &Arc<T>) -> Self {
        self.focus = FocusRouter::for_owner(owner);
        self
    }

    /// Set the focus router using builder pattern.
    pub fn with_focus_router(mut self, focus: FocusRouter) -> Self {
        self.focus = focus;
        self
    }

    /// The presentation style.
    pub fn style(&self) -> &FactoryStyle {
        &self.style
    }

    /// The builder table.
    pub fn builders(&self) -> &BuilderTable {
        &self.builders
    }

    /// The focus router handed to builders.
    pub fn focus_router(&self) -> &FocusRouter {
        &self.focus
    }

    fn context(&self) -> BuildContext<'_> {
        BuildContext::new(&self.style, &self.focus).with_fallback(self.builders.fallback())
    }

    /// Build the control shown while the cell is not being edited.
    ///
    /// Never fails: variants without a display builder get the text block
    /// fallback.
    pub fn create_display_control(&self, definition: &CellDefinition) -> Control {
        let _span = PerfSpan::new("create_display_control");
        let tag = definition.variant();
        let ctx = self.context();

        let mut control = match self.builders.resolve(tag, CellMode::Display) {
            Some(build) => build(&ctx, definition),
            None => {
                tracing::trace!(target: "lattice_cells::factory", variant = %tag, "no display builder, using fallback");
                ctx.build_fallback(definition)
            }
        };

        if let Some(rule) = &definition.enabled_when {
            tracing::trace!(target: "lattice_cells::factory", path = %rule.path, "attaching enablement binding");
            control.set_enablement(EnablementBinding::from(rule));
        }

        tracing::debug!(
            target: "lattice_cells::factory",
            variant = %tag,
            control = control.kind().name(),
            path = ?definition.binding_path,
            "created display control"
        );
        control
    }

    /// Build the control used while the cell is edited.
    ///
    /// Returns `None` for check cells, whose display control is edited in
    /// place. Variants without an edit builder use the display path.
    pub fn create_edit_control(&self, definition: &CellDefinition) -> Option<Control> {
        let _span = PerfSpan::new("create_edit_control");
        let tag = definition.variant();

        let control = match self.builders.resolve(tag, CellMode::Edit) {
            Some(build) => {
                let mut control = build(&self.context(), definition);
                // Enablement belongs to the display control only.
                control.clear_enablement();
                control
            }
            None if tag == VariantTag::Check => {
                tracing::debug!(target: "lattice_cells::factory", variant = %tag, "no edit control, edited in place");
                return None;
            }
            None => {
                tracing::trace!(target: "lattice_cells::factory", variant = %tag, "no edit builder, using display path");
                return Some(self.create_display_control(definition));
            }
        };

        tracing::debug!(
            target: "lattice_cells::factory",
            variant = %tag,
            control = control.kind().name(),
            path = ?definition.binding_path,
            "created edit control"
        );
        Some(control)
    }
}

impl CellControlSource for CellControlFactory {
    fn display_control(&self, definition: &CellDefinition) -> Control {
        self.create_display_control(definition)
    }

    fn edit_control(&self, definition: &CellDefinition) -> Option<Control> {
        self.create_edit_control(definition)
    }
}
