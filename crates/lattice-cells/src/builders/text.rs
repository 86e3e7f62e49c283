//! Text cell builders.
//!
//! The text block is also the display fallback for every variant without a
//! dedicated display builder.

use crate::binding::{build_binding, BindingTarget};
use crate::builders::BuildContext;
use crate::control::{Control, ControlKind};
use crate::definition::{CellDefinition, CellKind, HorizontalAlignment, VerticalAlignment};

/// A padded read-only label inside a background-carrying wrapper.
pub fn build_text_block(ctx: &BuildContext<'_>, definition: &CellDefinition) -> Control {
    let label = Control::new(ControlKind::TextBlock)
        .with_horizontal_alignment(definition.horizontal_alignment)
        .with_vertical_alignment(VerticalAlignment::Center)
        .with_padding(ctx.style.text_padding)
        .with_focusable(false)
        .with_binding(BindingTarget::Text, build_binding(definition, true));

    Control::new(ControlKind::Border)
        .with_background(definition.background)
        .with_child(label)
}

/// A single-line input field stretched across the cell.
///
/// The definition's alignment applies to the text inside the field. The
/// format string is not applied: the field edits the raw value.
pub fn build_text_box(ctx: &BuildContext<'_>, definition: &CellDefinition) -> Control {
    let max_length = match definition.kind {
        CellKind::Text { max_length } if max_length > 0 => Some(max_length),
        _ => None,
    };

    let mut binding = build_binding(definition, false);
    binding.string_format = None;

    Control::new(ControlKind::TextBox { max_length })
        .with_horizontal_alignment(HorizontalAlignment::Stretch)
        .with_vertical_alignment(VerticalAlignment::Center)
        .with_content_alignment(definition.horizontal_alignment)
        .with_background(definition.background)
        .with_border_thickness(ctx.style.editor_border_thickness)
        .with_binding(BindingTarget::Text, binding)
}
