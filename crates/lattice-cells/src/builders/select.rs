//! Select cell builder.

use crate::binding::{build_binding, BindingTarget};
use crate::builders::BuildContext;
use crate::control::{ComboBoxConfig, Control, ControlKind};
use crate::definition::{
    CellDefinition, CellKind, HorizontalAlignment, ItemsSource, VerticalAlignment,
};

/// A combo box over the cell's items.
///
/// An editable combo box binds the typed text; a non-editable one binds the
/// selected value. Closing the drop-down returns focus to the owning grid.
pub fn build_combo_box(ctx: &BuildContext<'_>, definition: &CellDefinition) -> Control {
    let config = match &definition.kind {
        CellKind::Select(select) => ComboBoxConfig {
            editable: select.editable,
            items: select.items_source(),
            selected_value_path: select.selected_value_path.clone(),
            display_member_path: select.display_member_path.clone(),
        },
        _ => ComboBoxConfig {
            editable: false,
            items: ItemsSource::None,
            selected_value_path: None,
            display_member_path: None,
        },
    };

    let target = if config.editable {
        BindingTarget::Text
    } else {
        BindingTarget::SelectedValue
    };

    let control = Control::new(ControlKind::ComboBox(config))
        .with_horizontal_alignment(HorizontalAlignment::Stretch)
        .with_vertical_alignment(VerticalAlignment::Center)
        .with_background(definition.background)
        .with_binding(target, build_binding(definition, false));

    ctx.focus.attach(&control);
    control
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binding::BindingMode;
    use crate::definition::SelectCell;
    use crate::focus::{FocusRouter, FocusTarget};
    use crate::style::FactoryStyle;
    use crate::value::CellValue;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[derive(Default)]
    struct Grid {
        focused: AtomicUsize,
    }

    impl FocusTarget for Grid {
        fn focus(&self) -> bool {
            self.focused.fetch_add(1, Ordering::SeqCst);
            true
        }
    }

    fn config(control: &Control) -> &ComboBoxConfig {
        match control.kind() {
            ControlKind::ComboBox(config) => config,
            other => panic!("expected a combo box, got {}", other.name()),
        }
    }

    #[test]
    fn test_selection_binding() {
        let grid = Arc::new(Grid::default());
        let style = FactoryStyle::default();
        let focus = FocusRouter::for_owner(&grid);
        let ctx = BuildContext::new(&style, &focus);
        let def = CellDefinition::select(
            "Category",
            SelectCell::new()
                .with_items(["A", "B", "C"])
                .with_selected_value_path("Id"),
        );

        let control = build_combo_box(&ctx, &def);
        let config = config(&control);
        assert!(!config.editable);
        assert_eq!(config.selected_value_path.as_deref(), Some("Id"));
        assert_eq!(
            config.items,
            ItemsSource::Inline(vec![
                CellValue::from("A"),
                CellValue::from("B"),
                CellValue::from("C"),
            ])
        );

        assert!(control.binding(BindingTarget::Text).is_none());
        let binding = control.binding(BindingTarget::SelectedValue).unwrap();
        assert_eq!(binding.mode, BindingMode::TwoWay);

        control.close_drop_down();
        assert_eq!(grid.focused.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_editable_binds_text() {
        let style = FactoryStyle::default();
        let focus = FocusRouter::new();
        let ctx = BuildContext::new(&style, &focus);
        let def = CellDefinition::select(
            "Tag",
            SelectCell::new()
                .with_editable(true)
                .with_items_path("AvailableTags")
                .with_display_member_path("Label"),
        );

        let control = build_combo_box(&ctx, &def);
        let config = config(&control);
        assert!(config.editable);
        assert_eq!(
            config.items,
            ItemsSource::Bound {
                path: "AvailableTags".into()
            }
        );
        assert_eq!(config.display_member_path.as_deref(), Some("Label"));
        assert!(control.binding(BindingTarget::Text).is_some());
        assert!(control.binding(BindingTarget::SelectedValue).is_none());

        // No owner configured: closing is harmless.
        control.close_drop_down();
    }

    #[test]
    fn test_read_only_is_one_way() {
        let style = FactoryStyle::default();
        let focus = FocusRouter::new();
        let ctx = BuildContext::new(&style, &focus);
        let def = CellDefinition::select("Category", SelectCell::new()).with_read_only(true);

        let control = build_combo_box(&ctx, &def);
        assert_eq!(config(&control).items, ItemsSource::None);
        assert_eq!(
            control.binding(BindingTarget::SelectedValue).unwrap().mode,
            BindingMode::OneWay
        );
    }
}
