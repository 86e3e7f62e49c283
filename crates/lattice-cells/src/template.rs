//! Content templates for template cells.

use std::fmt;
use std::sync::Arc;

use crate::control::Control;

type TemplateFn = dyn Fn() -> Control + Send + Sync;

/// A caller-supplied recipe for a cell's content.
///
/// Every cell gets its own control tree, so a template is a factory closure
/// rather than a control: [`instantiate`](Self::instantiate) builds a fresh
/// instance each time it is called. Cloning a template shares the recipe.
///
/// The root of an instantiated template is hosted by a content host whose
/// data context is bound to the cell's value, so bindings inside the
/// template resolve against that value.
#[derive(Clone)]
pub struct CellTemplate {
    name: Arc<str>,
    build: Arc<TemplateFn>,
}

impl CellTemplate {
    /// Create a named template from a builder closure.
    pub fn new<F>(name: impl Into<Arc<str>>, build: F) -> Self
    where
        F: Fn() -> Control + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            build: Arc::new(build),
        }
    }

    /// The template name, for diagnostics.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Build a new instance of the template's content.
    pub fn instantiate(&self) -> Control {
        (self.build)()
    }

    /// Returns `true` if both handles share the same recipe.
    pub fn ptr_eq(&self, other: &CellTemplate) -> bool {
        Arc::ptr_eq(&self.build, &other.build)
    }
}

impl fmt::Debug for CellTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CellTemplate")
            .field("name", &self.name)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::ControlKind;

    #[test]
    fn test_instantiate_builds_fresh_instances() {
        let template = CellTemplate::new("badge", || {
            Control::new(ControlKind::TextBlock).with_padding(2.0)
        });

        let first = template.instantiate();
        let second = template.instantiate();
        assert!(matches!(first.kind(), ControlKind::TextBlock));
        assert!(!first.signals_ptr_eq(&second));
        assert_eq!(template.name(), "badge");
    }

    #[test]
    fn test_ptr_eq() {
        let a = CellTemplate::new("a", || Control::new(ControlKind::TextBlock));
        let b = CellTemplate::new("a", || Control::new(ControlKind::TextBlock));
        assert!(a.ptr_eq(&a.clone()));
        assert!(!a.ptr_eq(&b));
    }
}
