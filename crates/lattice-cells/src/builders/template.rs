//! Template cell builders.

use crate::binding::{build_one_way_binding, BindingTarget};
use crate::builders::BuildContext;
use crate::control::{Control, ControlKind};
use crate::definition::{CellDefinition, CellKind, CellMode, VerticalAlignment};

/// Host a fresh instance of the display template.
pub fn build_template_display(ctx: &BuildContext<'_>, definition: &CellDefinition) -> Control {
    build_template(ctx, definition, CellMode::Display)
}

/// Host a fresh instance of the edit template, or the display template when
/// no edit template is set.
pub fn build_template_edit(ctx: &BuildContext<'_>, definition: &CellDefinition) -> Control {
    build_template(ctx, definition, CellMode::Edit)
}

fn build_template(ctx: &BuildContext<'_>, definition: &CellDefinition, mode: CellMode) -> Control {
    let CellKind::Template(cell) = &definition.kind else {
        return ctx.build_fallback(definition);
    };
    let template = cell.template_for(mode).clone();
    let content = template.instantiate();

    // The whole value becomes the data context; the template binds inside it.
    Control::new(ControlKind::ContentHost { template })
        .with_vertical_alignment(VerticalAlignment::Center)
        .with_background(definition.background)
        .with_binding(BindingTarget::DataContext, build_one_way_binding(definition))
        .with_child(content)
}
