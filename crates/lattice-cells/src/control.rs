//! The control tree produced by the factory.
//!
//! A [`Control`] is an inspectable description of one node of a cell's
//! widget tree: what kind of control it is, its layout and interaction
//! properties, the bindings registered on it, and its children. The grid
//! hands the tree to its rendering layer and the bindings to its binding
//! runtime; neither is part of this crate.
//!
//! Each control also owns a set of [`ControlSignals`] that the UI runtime
//! emits after construction (a drop-down closing, a source value being
//! updated from outside).

use std::sync::Arc;

use lattice_cells_core::{Color, Signal};
use serde::{Deserialize, Serialize};

use crate::binding::{BindingDescriptor, BindingTarget, EnablementBinding};
use crate::definition::{HorizontalAlignment, ItemsSource, VerticalAlignment};
use crate::template::CellTemplate;

/// Spacing around or inside a control, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Thickness {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Thickness {
    /// No spacing.
    pub const ZERO: Self = Self::uniform(0.0);

    /// The same spacing on all four sides.
    pub const fn uniform(value: f32) -> Self {
        Self {
            left: value,
            top: value,
            right: value,
            bottom: value,
        }
    }

    /// Horizontal and vertical spacing.
    pub const fn symmetric(horizontal: f32, vertical: f32) -> Self {
        Self {
            left: horizontal,
            top: vertical,
            right: horizontal,
            bottom: vertical,
        }
    }
}

impl From<f32> for Thickness {
    fn from(value: f32) -> Self {
        Self::uniform(value)
    }
}

/// Configuration of a combo box control.
#[derive(Debug, Clone, PartialEq)]
pub struct ComboBoxConfig {
    /// Free text is allowed alongside selection.
    pub editable: bool,
    /// Where the items come from.
    pub items: ItemsSource,
    /// Path used to extract the value from the selected item.
    pub selected_value_path: Option<String>,
    /// Path used to extract the text shown for an item.
    pub display_member_path: Option<String>,
}

/// The kind of a control node.
#[derive(Debug, Clone)]
pub enum ControlKind {
    /// A background-carrying wrapper around a single child.
    Border,
    /// A check glyph that shows state but takes no input.
    CheckMark,
    /// A standard toggle control.
    CheckBox,
    /// A fixed-size filled square.
    ColorSwatch {
        /// Width in pixels.
        width: f32,
        /// Height in pixels.
        height: f32,
    },
    /// A color picker.
    ColorPicker,
    /// A read-only text label.
    TextBlock,
    /// A single-line input field.
    TextBox {
        /// Maximum input length; `None` is unlimited.
        max_length: Option<usize>,
    },
    /// A combined text and drop-down control.
    ComboBox(ComboBoxConfig),
    /// Hosts one instance of a content template.
    ContentHost {
        /// The template the hosted content was built from.
        template: CellTemplate,
    },
}

impl ControlKind {
    /// Short name of the kind, for logs.
    pub fn name(&self) -> &'static str {
        match self {
            ControlKind::Border => "Border",
            ControlKind::CheckMark => "CheckMark",
            ControlKind::CheckBox => "CheckBox",
            ControlKind::ColorSwatch { .. } => "ColorSwatch",
            ControlKind::ColorPicker => "ColorPicker",
            ControlKind::TextBlock => "TextBlock",
            ControlKind::TextBox { .. } => "TextBox",
            ControlKind::ComboBox(_) => "ComboBox",
            ControlKind::ContentHost { .. } => "ContentHost",
        }
    }
}

/// Notifications raised on a control by the UI runtime.
#[derive(Debug, Default)]
pub struct ControlSignals {
    /// Emitted when the control's drop-down closes.
    pub drop_down_closed: Signal<()>,
    /// Emitted when a bound source value was updated from outside the
    /// control. Carries the target property of the binding.
    pub source_updated: Signal<BindingTarget>,
}

/// One node of a cell's control tree.
#[derive(Debug)]
pub struct Control {
    kind: ControlKind,
    horizontal_alignment: HorizontalAlignment,
    vertical_alignment: VerticalAlignment,
    content_alignment: Option<HorizontalAlignment>,
    background: Option<Color>,
    padding: Thickness,
    border_thickness: Option<f32>,
    enabled: bool,
    focusable: bool,
    hit_test_visible: bool,
    bindings: Vec<(BindingTarget, BindingDescriptor)>,
    enablement: Option<EnablementBinding>,
    children: Vec<Control>,
    signals: Arc<ControlSignals>,
}

impl Control {
    /// Create a control of the given kind with default properties.
    pub fn new(kind: ControlKind) -> Self {
        Self {
            kind,
            horizontal_alignment: HorizontalAlignment::Stretch,
            vertical_alignment: VerticalAlignment::Stretch,
            content_alignment: None,
            background: None,
            padding: Thickness::ZERO,
            border_thickness: None,
            enabled: true,
            focusable: true,
            hit_test_visible: true,
            bindings: Vec::new(),
            enablement: None,
            children: Vec::new(),
            signals: Arc::new(ControlSignals::default()),
        }
    }

    // =========================================================================
    // Builder methods
    // =========================================================================

    /// Set the horizontal alignment using builder pattern.
    pub fn with_horizontal_alignment(mut self, alignment: HorizontalAlignment) -> Self {
        self.horizontal_alignment = alignment;
        self
    }

    /// Set the vertical alignment using builder pattern.
    pub fn with_vertical_alignment(mut self, alignment: VerticalAlignment) -> Self {
        self.vertical_alignment = alignment;
        self
    }

    /// Set the alignment of the control's content using builder pattern.
    pub fn with_content_alignment(mut self, alignment: HorizontalAlignment) -> Self {
        self.content_alignment = Some(alignment);
        self
    }

    /// Set the background using builder pattern.
    pub fn with_background(mut self, background: Option<Color>) -> Self {
        self.background = background;
        self
    }

    /// Set the padding using builder pattern.
    pub fn with_padding(mut self, padding: impl Into<Thickness>) -> Self {
        self.padding = padding.into();
        self
    }

    /// Set the border thickness using builder pattern.
    pub fn with_border_thickness(mut self, thickness: f32) -> Self {
        self.border_thickness = Some(thickness);
        self
    }

    /// Set the enabled state using builder pattern.
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Set whether the control can take keyboard focus using builder pattern.
    pub fn with_focusable(mut self, focusable: bool) -> Self {
        self.focusable = focusable;
        self
    }

    /// Set whether the control receives pointer input using builder pattern.
    pub fn with_hit_test_visible(mut self, visible: bool) -> Self {
        self.hit_test_visible = visible;
        self
    }

    /// Register a binding on `target` using builder pattern.
    pub fn with_binding(mut self, target: BindingTarget, binding: BindingDescriptor) -> Self {
        self.bindings.push((target, binding));
        self
    }

    /// Append a child using builder pattern.
    pub fn with_child(mut self, child: Control) -> Self {
        self.children.push(child);
        self
    }

    /// Attach an enablement binding, replacing any previous one.
    pub fn set_enablement(&mut self, enablement: EnablementBinding) {
        self.enablement = Some(enablement);
    }

    /// Remove the enablement binding, if any.
    pub fn clear_enablement(&mut self) {
        self.enablement = None;
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The kind of this control.
    pub fn kind(&self) -> &ControlKind {
        &self.kind
    }

    /// Horizontal alignment within the parent.
    pub fn horizontal_alignment(&self) -> HorizontalAlignment {
        self.horizontal_alignment
    }

    /// Vertical alignment within the parent.
    pub fn vertical_alignment(&self) -> VerticalAlignment {
        self.vertical_alignment
    }

    /// Alignment of the control's own content, if set.
    pub fn content_alignment(&self) -> Option<HorizontalAlignment> {
        self.content_alignment
    }

    /// Background color, if set.
    pub fn background(&self) -> Option<Color> {
        self.background
    }

    /// Inner padding.
    pub fn padding(&self) -> Thickness {
        self.padding
    }

    /// Border thickness; `None` keeps the control's default chrome.
    pub fn border_thickness(&self) -> Option<f32> {
        self.border_thickness
    }

    /// Whether the control is enabled.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Whether the control can take keyboard focus.
    pub fn is_focusable(&self) -> bool {
        self.focusable
    }

    /// Whether the control receives pointer input.
    pub fn is_hit_test_visible(&self) -> bool {
        self.hit_test_visible
    }

    /// Bindings registered on this node.
    pub fn bindings(&self) -> &[(BindingTarget, BindingDescriptor)] {
        &self.bindings
    }

    /// The binding registered on `target` of this node, if any.
    pub fn binding(&self, target: BindingTarget) -> Option<&BindingDescriptor> {
        self.bindings
            .iter()
            .find(|(t, _)| *t == target)
            .map(|(_, binding)| binding)
    }

    /// The enablement binding, if attached.
    pub fn enablement(&self) -> Option<&EnablementBinding> {
        self.enablement.as_ref()
    }

    /// Child controls.
    pub fn children(&self) -> &[Control] {
        &self.children
    }

    /// The signals of this control.
    pub fn signals(&self) -> &Arc<ControlSignals> {
        &self.signals
    }

    /// Returns `true` if both controls share the same signals.
    pub fn signals_ptr_eq(&self, other: &Control) -> bool {
        Arc::ptr_eq(&self.signals, &other.signals)
    }

    // =========================================================================
    // Tree traversal
    // =========================================================================

    /// Visit this control and all descendants, depth-first pre-order.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a Control)) {
        visit(self);
        for child in &self.children {
            child.walk(visit);
        }
    }

    /// Find the first control in the tree matching `predicate`.
    pub fn find(&self, predicate: impl Fn(&Control) -> bool) -> Option<&Control> {
        let mut found = None;
        self.walk(&mut |control| {
            if found.is_none() && predicate(control) {
                found = Some(control);
            }
        });
        found
    }

    /// The innermost control below any wrapping borders.
    pub fn leaf(&self) -> &Control {
        match (&self.kind, self.children.first()) {
            (ControlKind::Border, Some(child)) => child.leaf(),
            _ => self,
        }
    }

    /// All bindings in the tree, in traversal order.
    pub fn bindings_recursive(&self) -> Vec<(BindingTarget, &BindingDescriptor)> {
        let mut out = Vec::new();
        self.walk(&mut |control| {
            out.extend(control.bindings.iter().map(|(t, b)| (*t, b)));
        });
        out
    }

    /// The first binding in the tree, in traversal order.
    pub fn primary_binding(&self) -> Option<(BindingTarget, &BindingDescriptor)> {
        self.bindings_recursive().into_iter().next()
    }

    // =========================================================================
    // Runtime notifications
    // =========================================================================

    /// Report that this control's drop-down closed.
    pub fn close_drop_down(&self) {
        self.signals.drop_down_closed.emit(());
    }

    /// Report that the source of the binding on `target` changed externally.
    pub fn notify_source_updated(&self, target: BindingTarget) {
        self.signals.source_updated.emit(target);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binding::BindingMode;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn text_binding() -> BindingDescriptor {
        BindingDescriptor::new(Some("Name".into()), BindingMode::OneWay)
    }

    #[test]
    fn test_control_defaults() {
        let control = Control::new(ControlKind::TextBlock);
        assert!(control.is_enabled());
        assert!(control.is_focusable());
        assert!(control.is_hit_test_visible());
        assert!(control.background().is_none());
        assert!(control.enablement().is_none());
        assert_eq!(control.padding(), Thickness::ZERO);
    }

    #[test]
    fn test_leaf_skips_borders() {
        let tree = Control::new(ControlKind::Border)
            .with_background(Some(Color::WHITE))
            .with_child(Control::new(ControlKind::TextBlock).with_binding(BindingTarget::Text, text_binding()));

        let leaf = tree.leaf();
        assert!(matches!(leaf.kind(), ControlKind::TextBlock));
        assert!(leaf.binding(BindingTarget::Text).is_some());
        assert!(tree.binding(BindingTarget::Text).is_none());
    }

    #[test]
    fn test_bindings_recursive() {
        let tree = Control::new(ControlKind::Border).with_child(
            Control::new(ControlKind::TextBlock).with_binding(BindingTarget::Text, text_binding()),
        );

        let bindings = tree.bindings_recursive();
        assert_eq!(bindings.len(), 1);
        assert_eq!(bindings[0].0, BindingTarget::Text);

        let (target, binding) = tree.primary_binding().unwrap();
        assert_eq!(target, BindingTarget::Text);
        assert_eq!(binding.path.as_deref(), Some("Name"));
    }

    #[test]
    fn test_find() {
        let tree = Control::new(ControlKind::Border)
            .with_child(Control::new(ControlKind::ColorSwatch { width: 12.0, height: 12.0 }));

        let swatch = tree.find(|c| matches!(c.kind(), ControlKind::ColorSwatch { .. }));
        assert!(swatch.is_some());
        assert!(tree.find(|c| matches!(c.kind(), ControlKind::ColorPicker)).is_none());
    }

    #[test]
    fn test_runtime_notifications() {
        let control = Control::new(ControlKind::ColorPicker);
        let closed = Arc::new(AtomicUsize::new(0));
        let updated = Arc::new(AtomicUsize::new(0));

        let closed_clone = closed.clone();
        control.signals().drop_down_closed.connect(move |_| {
            closed_clone.fetch_add(1, Ordering::SeqCst);
        });
        let updated_clone = updated.clone();
        control.signals().source_updated.connect(move |target| {
            if *target == BindingTarget::SelectedColor {
                updated_clone.fetch_add(1, Ordering::SeqCst);
            }
        });

        control.close_drop_down();
        control.notify_source_updated(BindingTarget::SelectedColor);
        control.notify_source_updated(BindingTarget::Text);

        assert_eq!(closed.load(Ordering::SeqCst), 1);
        assert_eq!(updated.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_thickness() {
        assert_eq!(Thickness::from(4.0), Thickness::uniform(4.0));
        let t = Thickness::symmetric(4.0, 2.0);
        assert_eq!((t.left, t.top, t.right, t.bottom), (4.0, 2.0, 4.0, 2.0));
    }
}
