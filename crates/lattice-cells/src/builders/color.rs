//! Color cell builders.

use std::sync::Arc;

use crate::binding::{build_binding, build_one_way_binding, BindingTarget};
use crate::builders::BuildContext;
use crate::control::{Control, ControlKind};
use crate::converter::{ChainedConverter, ColorToBrushConverter, SharedConverter};
use crate::definition::{CellDefinition, HorizontalAlignment, VerticalAlignment};

/// A fixed-size swatch filled with the cell's color.
///
/// The swatch sits centered in a wrapper that carries the row background.
/// Its fill is bound one-way; a user converter runs first and its output
/// feeds the color-to-brush conversion.
pub fn build_color_preview(ctx: &BuildContext<'_>, definition: &CellDefinition) -> Control {
    let mut binding = build_one_way_binding(definition);
    let brush: SharedConverter = Arc::new(ColorToBrushConverter);
    let converter: SharedConverter = match binding.converter.take() {
        Some(user) => Arc::new(ChainedConverter::new(user, brush)),
        None => brush,
    };
    binding.converter = Some(converter);

    let size = ctx.style.swatch_size;
    let swatch = Control::new(ControlKind::ColorSwatch {
        width: size,
        height: size,
    })
    .with_horizontal_alignment(HorizontalAlignment::Center)
    .with_vertical_alignment(VerticalAlignment::Center)
    .with_focusable(false)
    .with_binding(BindingTarget::Fill, binding);

    Control::new(ControlKind::Border)
        .with_background(definition.background)
        .with_child(swatch)
}

/// A color picker stretched across the cell.
///
/// The picker is not focusable; its selected color is bound two-way unless
/// the cell is read-only.
pub fn build_color_picker(_ctx: &BuildContext<'_>, definition: &CellDefinition) -> Control {
    Control::new(ControlKind::ColorPicker)
        .with_horizontal_alignment(HorizontalAlignment::Stretch)
        .with_vertical_alignment(VerticalAlignment::Center)
        .with_focusable(false)
        .with_binding(BindingTarget::SelectedColor, build_binding(definition, false))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binding::BindingMode;
    use crate::converter::FnConverter;
    use crate::focus::FocusRouter;
    use crate::style::FactoryStyle;
    use crate::value::CellValue;
    use lattice_cells_core::{Brush, Color};

    fn ctx_parts() -> (FactoryStyle, FocusRouter) {
        (FactoryStyle::default().with_swatch_size(10.0), FocusRouter::new())
    }

    #[test]
    fn test_preview_layout() {
        let (style, focus) = ctx_parts();
        let ctx = BuildContext::new(&style, &focus);
        let def = CellDefinition::color("Tint").with_background(Color::GRAY);

        let control = build_color_preview(&ctx, &def);
        assert!(matches!(control.kind(), ControlKind::Border));
        assert_eq!(control.background(), Some(Color::GRAY));

        let swatch = control.leaf();
        assert!(matches!(
            swatch.kind(),
            ControlKind::ColorSwatch { width, height } if *width == 10.0 && *height == 10.0
        ));
        assert!(swatch.background().is_none());
        assert_eq!(swatch.horizontal_alignment(), HorizontalAlignment::Center);
        assert_eq!(swatch.vertical_alignment(), VerticalAlignment::Center);
    }

    #[test]
    fn test_preview_converts_to_brush() {
        let (style, focus) = ctx_parts();
        let ctx = BuildContext::new(&style, &focus);

        let control = build_color_preview(&ctx, &CellDefinition::color("Tint"));
        let binding = control.leaf().binding(BindingTarget::Fill).unwrap();
        assert_eq!(binding.mode, BindingMode::OneWay);

        let converter = binding.converter.as_ref().unwrap();
        assert_eq!(converter.name(), "ColorToBrushConverter");
        let out = converter.convert(&CellValue::Color(Color::RED), None, None).unwrap();
        assert_eq!(out.as_brush(), Some(Brush::solid(Color::RED)));
    }

    #[test]
    fn test_preview_runs_user_converter_first() {
        let (style, focus) = ctx_parts();
        let ctx = BuildContext::new(&style, &focus);
        let status = FnConverter::new("StatusColor", |value, _, _| {
            Ok(match value.as_bool() {
                Some(true) => CellValue::Color(Color::GREEN),
                _ => CellValue::Color(Color::RED),
            })
        });
        let def = CellDefinition::color("IsHealthy").with_converter(Arc::new(status));

        let control = build_color_preview(&ctx, &def);
        let binding = control.leaf().binding(BindingTarget::Fill).unwrap();
        let converter = binding.converter.as_ref().unwrap();
        assert_eq!(converter.name(), "ChainedConverter");

        let out = converter.convert(&CellValue::Bool(true), None, None).unwrap();
        assert_eq!(out.as_brush(), Some(Brush::solid(Color::GREEN)));

        // The definition keeps its own converter untouched.
        assert_eq!(def.converter.as_ref().unwrap().name(), "StatusColor");
    }

    #[test]
    fn test_picker() {
        let (style, focus) = ctx_parts();
        let ctx = BuildContext::new(&style, &focus);

        let control = build_color_picker(&ctx, &CellDefinition::color("Tint"));
        assert!(matches!(control.kind(), ControlKind::ColorPicker));
        assert!(!control.is_focusable());
        assert_eq!(control.horizontal_alignment(), HorizontalAlignment::Stretch);
        assert_eq!(
            control.binding(BindingTarget::SelectedColor).unwrap().mode,
            BindingMode::TwoWay
        );

        let control = build_color_picker(&ctx, &CellDefinition::color("Tint").with_read_only(true));
        assert_eq!(
            control.binding(BindingTarget::SelectedColor).unwrap().mode,
            BindingMode::OneWay
        );
    }
}
