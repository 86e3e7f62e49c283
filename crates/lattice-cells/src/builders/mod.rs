//! Per-variant control builders and the table that selects them.
//!
//! Each builder is a plain function from a [`BuildContext`] and a
//! [`CellDefinition`] to a finished [`Control`] with its binding attached.
//! The [`BuilderTable`] maps a `(variant, mode)` pair to the builder the
//! factory dispatches to. Extending the factory means replacing one entry:
//!
//! ```
//! use lattice_cells::builders::{BuildContext, BuilderTable};
//! use lattice_cells::{
//!     build_binding, BindingTarget, CellDefinition, CellMode, Control, ControlKind, VariantTag,
//! };
//!
//! // Show text cells as right-aligned labels without the background wrapper.
//! let table = BuilderTable::new().with_builder(
//!     VariantTag::Text,
//!     CellMode::Display,
//!     |_ctx: &BuildContext<'_>, def: &CellDefinition| {
//!         Control::new(ControlKind::TextBlock)
//!             .with_content_alignment(lattice_cells::HorizontalAlignment::Right)
//!             .with_binding(BindingTarget::Text, build_binding(def, true))
//!     },
//! );
//! assert!(table.resolve(VariantTag::Text, CellMode::Display).is_some());
//! ```

pub mod check;
pub mod color;
pub mod select;
pub mod template;
pub mod text;

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::control::Control;
use crate::definition::{CellDefinition, CellMode, VariantTag};
use crate::focus::FocusRouter;
use crate::style::FactoryStyle;

/// Everything a builder may consult besides the definition.
#[derive(Clone, Copy)]
pub struct BuildContext<'a> {
    /// Presentation configuration.
    pub style: &'a FactoryStyle,
    /// Router returning focus to the owning grid.
    pub focus: &'a FocusRouter,
    fallback: Option<&'a BuildFn>,
}

impl<'a> BuildContext<'a> {
    /// A context using the standard text block as fallback.
    pub fn new(style: &'a FactoryStyle, focus: &'a FocusRouter) -> Self {
        Self {
            style,
            focus,
            fallback: None,
        }
    }

    /// Set the fallback builder using builder pattern.
    pub fn with_fallback(mut self, fallback: &'a BuildFn) -> Self {
        self.fallback = Some(fallback);
        self
    }

    /// Build `definition` with the fallback builder.
    ///
    /// Builders use this when handed a definition of a kind they do not
    /// handle.
    pub fn build_fallback(&self, definition: &CellDefinition) -> Control {
        match self.fallback {
            Some(build) => build(self, definition),
            None => text::build_text_block(self, definition),
        }
    }
}

impl fmt::Debug for BuildContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BuildContext")
            .field("style", &self.style)
            .field("focus", &self.focus)
            .field("custom_fallback", &self.fallback.is_some())
            .finish()
    }
}

/// A control builder.
pub type BuildFn = Arc<dyn Fn(&BuildContext<'_>, &CellDefinition) -> Control + Send + Sync>;

/// Maps `(variant, mode)` pairs to builders.
///
/// A pair without an entry means: in display mode, use the fallback
/// builder; in edit mode, produce no edit control for check cells and use
/// the display path for everything else.
#[derive(Clone)]
pub struct BuilderTable {
    entries: HashMap<(VariantTag, CellMode), BuildFn>,
    fallback: BuildFn,
}

impl Default for BuilderTable {
    fn default() -> Self {
        Self::new()
    }
}

impl BuilderTable {
    /// The standard table.
    pub fn new() -> Self {
        let mut entries = HashMap::new();
        for tag in VariantTag::ALL {
            for mode in [CellMode::Display, CellMode::Edit] {
                if let Some(build) = standard_builder(tag, mode) {
                    entries.insert((tag, mode), build);
                }
            }
        }
        Self {
            entries,
            fallback: Arc::new(text::build_text_block),
        }
    }

    /// Replace the builder for `(tag, mode)` using builder pattern.
    pub fn with_builder<F>(mut self, tag: VariantTag, mode: CellMode, build: F) -> Self
    where
        F: Fn(&BuildContext<'_>, &CellDefinition) -> Control + Send + Sync + 'static,
    {
        self.entries.insert((tag, mode), Arc::new(build));
        self
    }

    /// Remove the builder for `(tag, mode)` using builder pattern, so the
    /// pair takes the fallback route.
    pub fn without_builder(mut self, tag: VariantTag, mode: CellMode) -> Self {
        self.entries.remove(&(tag, mode));
        self
    }

    /// Replace the display fallback builder using builder pattern.
    pub fn with_fallback<F>(mut self, build: F) -> Self
    where
        F: Fn(&BuildContext<'_>, &CellDefinition) -> Control + Send + Sync + 'static,
    {
        self.fallback = Arc::new(build);
        self
    }

    /// The builder registered for `(tag, mode)`.
    pub fn resolve(&self, tag: VariantTag, mode: CellMode) -> Option<&BuildFn> {
        self.entries.get(&(tag, mode))
    }

    /// The display fallback builder.
    pub fn fallback(&self) -> &BuildFn {
        &self.fallback
    }
}

impl fmt::Debug for BuilderTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<String> = self
            .entries
            .keys()
            .map(|(tag, mode)| format!("{tag}/{mode}"))
            .collect();
        keys.sort();
        f.debug_struct("BuilderTable").field("entries", &keys).finish()
    }
}

/// Standard routing. Pairs mapped to `None` take the fallback route.
fn standard_builder(tag: VariantTag, mode: CellMode) -> Option<BuildFn> {
    let build: BuildFn = match (tag, mode) {
        (VariantTag::Check, CellMode::Display) => Arc::new(check::build_check),
        (VariantTag::Color, CellMode::Display) => Arc::new(color::build_color_preview),
        (VariantTag::Template, CellMode::Display) => Arc::new(template::build_template_display),
        (VariantTag::Text | VariantTag::Select | VariantTag::Base, CellMode::Display) => {
            return None;
        }

        (VariantTag::Select, CellMode::Edit) => Arc::new(select::build_combo_box),
        (VariantTag::Color, CellMode::Edit) => Arc::new(color::build_color_picker),
        (VariantTag::Template, CellMode::Edit) => Arc::new(template::build_template_edit),
        (VariantTag::Text, CellMode::Edit) => Arc::new(text::build_text_box),
        // Check cells edit in place; base cells reuse the display path.
        (VariantTag::Check | VariantTag::Base, CellMode::Edit) => return None,
    };
    Some(build)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::ControlKind;

    #[test]
    fn test_standard_routes() {
        let table = BuilderTable::new();

        for tag in [VariantTag::Check, VariantTag::Color, VariantTag::Template] {
            assert!(table.resolve(tag, CellMode::Display).is_some(), "{tag}");
        }
        for tag in [VariantTag::Text, VariantTag::Select, VariantTag::Base] {
            assert!(table.resolve(tag, CellMode::Display).is_none(), "{tag}");
        }

        for tag in [VariantTag::Select, VariantTag::Color, VariantTag::Template, VariantTag::Text] {
            assert!(table.resolve(tag, CellMode::Edit).is_some(), "{tag}");
        }
        for tag in [VariantTag::Check, VariantTag::Base] {
            assert!(table.resolve(tag, CellMode::Edit).is_none(), "{tag}");
        }
    }

    #[test]
    fn test_override_and_remove() {
        let table = BuilderTable::new()
            .with_builder(VariantTag::Base, CellMode::Display, |_, _| {
                Control::new(ControlKind::CheckMark)
            })
            .without_builder(VariantTag::Color, CellMode::Edit);

        let style = FactoryStyle::default();
        let focus = FocusRouter::new();
        let ctx = BuildContext::new(&style, &focus);
        let def = CellDefinition::base("Flag");

        let build = table.resolve(VariantTag::Base, CellMode::Display).unwrap();
        assert!(matches!(build(&ctx, &def).kind(), ControlKind::CheckMark));
        assert!(table.resolve(VariantTag::Color, CellMode::Edit).is_none());
    }

    #[test]
    fn test_context_fallback() {
        let style = FactoryStyle::default();
        let focus = FocusRouter::new();
        let def = CellDefinition::base("Flag");

        let ctx = BuildContext::new(&style, &focus);
        assert!(matches!(ctx.build_fallback(&def).leaf().kind(), ControlKind::TextBlock));

        let table = BuilderTable::new().with_fallback(|_, _| Control::new(ControlKind::CheckMark));
        let ctx = ctx.with_fallback(table.fallback());
        assert!(matches!(ctx.build_fallback(&def).kind(), ControlKind::CheckMark));
    }

    #[test]
    fn test_debug_lists_entries() {
        let debug = format!("{:?}", BuilderTable::new());
        assert!(debug.contains("check/display"));
        assert!(debug.contains("text/edit"));
        assert!(!debug.contains("check/edit"));
    }
}
