//! Check cell builders.

use crate::binding::{build_binding, BindingTarget};
use crate::builders::BuildContext;
use crate::control::{Control, ControlKind};
use crate::definition::{CellDefinition, VerticalAlignment};
use crate::style::CheckStyle;

/// Display builder for check cells, honoring the configured check style.
pub fn build_check(ctx: &BuildContext<'_>, definition: &CellDefinition) -> Control {
    match ctx.style.check_style {
        CheckStyle::Glyph => build_check_mark(ctx, definition),
        CheckStyle::Toggle => build_check_box(ctx, definition),
    }
}

/// A check glyph that shows the value and takes no pointer input.
///
/// Bound one-way; the grid toggles the underlying value itself.
pub fn build_check_mark(_ctx: &BuildContext<'_>, definition: &CellDefinition) -> Control {
    Control::new(ControlKind::CheckMark)
        .with_horizontal_alignment(definition.horizontal_alignment)
        .with_vertical_alignment(VerticalAlignment::Center)
        .with_background(definition.background)
        .with_hit_test_visible(false)
        .with_focusable(false)
        .with_binding(BindingTarget::IsChecked, build_binding(definition, true))
}

/// A standard toggle control, disabled when the cell is read-only.
///
/// Bound two-way unless the cell is read-only.
pub fn build_check_box(_ctx: &BuildContext<'_>, definition: &CellDefinition) -> Control {
    Control::new(ControlKind::CheckBox)
        .with_horizontal_alignment(definition.horizontal_alignment)
        .with_vertical_alignment(VerticalAlignment::Center)
        .with_background(definition.background)
        .with_enabled(!definition.read_only)
        .with_binding(BindingTarget::IsChecked, build_binding(definition, false))
}
