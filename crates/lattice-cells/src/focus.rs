//! Focus routing back to the owning grid.
//!
//! When a combo box commits a selection by closing its drop-down, keyboard
//! focus must not stay on the transient popup. The [`FocusRouter`] returns
//! it to the grid that owns the cell.
//!
//! The owner is supplied explicitly when the factory is configured, as a
//! weak reference, so a control never keeps its grid alive. A router with no
//! owner, or whose owner has been dropped, does nothing.
//!
//! # Example
//!
//! ```
//! use std::sync::atomic::{AtomicBool, Ordering};
//! use std::sync::Arc;
//! use lattice_cells::{FocusRouter, FocusTarget};
//!
//! #[derive(Default)]
//! struct Grid {
//!     focused: AtomicBool,
//! }
//!
//! impl FocusTarget for Grid {
//!     fn focus(&self) -> bool {
//!         self.focused.store(true, Ordering::SeqCst);
//!         true
//!     }
//! }
//!
//! let grid = Arc::new(Grid::default());
//! let router = FocusRouter::for_owner(&grid);
//! assert!(router.route());
//! assert!(grid.focused.load(Ordering::SeqCst));
//! ```

use std::fmt;
use std::sync::{Arc, Weak};

use crate::control::Control;

/// Something that can take keyboard focus, typically the grid.
pub trait FocusTarget: Send + Sync {
    /// Move keyboard focus to this target.
    ///
    /// Returns `true` if focus moved.
    fn focus(&self) -> bool;
}

/// Returns focus to the owning grid.
#[derive(Clone, Default)]
pub struct FocusRouter {
    owner: Option<Weak<dyn FocusTarget>>,
}

impl FocusRouter {
    /// A router without an owner. Routing is a no-op.
    pub fn new() -> Self {
        Self::default()
    }

    /// A router that returns focus to `owner`.
    pub fn for_owner<T: FocusTarget + 'static>(owner: &Arc<T>) -> Self {
        let weak: Weak<T> = Arc::downgrade(owner);
        Self::from_weak(weak)
    }

    /// A router from an existing weak owner reference.
    pub fn from_weak(owner: Weak<dyn FocusTarget>) -> Self {
        Self { owner: Some(owner) }
    }

    /// Returns `true` if the owner is still alive.
    pub fn has_owner(&self) -> bool {
        self.owner
            .as_ref()
            .is_some_and(|owner| owner.strong_count() > 0)
    }

    /// Move focus to the owner.
    ///
    /// Returns `true` if focus moved; `false` if there is no live owner or
    /// the owner refused focus.
    pub fn route(&self) -> bool {
        let Some(owner) = self.owner.as_ref().and_then(Weak::upgrade) else {
            tracing::trace!(target: "lattice_cells::focus", "no owning grid, focus left in place");
            return false;
        };
        let moved = owner.focus();
        tracing::debug!(target: "lattice_cells::focus", moved, "returned focus to owning grid");
        moved
    }

    /// Route focus whenever `control`'s drop-down closes.
    pub fn attach(&self, control: &Control) {
        let router = self.clone();
        control.signals().drop_down_closed.connect(move |_| {
            router.route();
        });
    }
}

impl fmt::Debug for FocusRouter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FocusRouter")
            .field("has_owner", &self.has_owner())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::ControlKind;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct CountingGrid {
        focus_calls: AtomicUsize,
    }

    impl FocusTarget for CountingGrid {
        fn focus(&self) -> bool {
            self.focus_calls.fetch_add(1, Ordering::SeqCst);
            true
        }
    }

    #[test]
    fn test_route_without_owner_is_noop() {
        let router = FocusRouter::new();
        assert!(!router.has_owner());
        assert!(!router.route());
    }

    #[test]
    fn test_route_to_owner() {
        let grid = Arc::new(CountingGrid::default());
        let router = FocusRouter::for_owner(&grid);
        assert!(router.has_owner());
        assert!(router.route());
        assert_eq!(grid.focus_calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_dropped_owner_is_noop() {
        let grid = Arc::new(CountingGrid::default());
        let router = FocusRouter::for_owner(&grid);
        drop(grid);
        assert!(!router.has_owner());
        assert!(!router.route());
    }

    #[test]
    fn test_attach_routes_on_drop_down_close() {
        let grid = Arc::new(CountingGrid::default());
        let router = FocusRouter::for_owner(&grid);
        let control = Control::new(ControlKind::TextBlock);

        router.attach(&control);
        assert_eq!(grid.focus_calls.load(Ordering::SeqCst), 0);

        control.close_drop_down();
        control.close_drop_down();
        assert_eq!(grid.focus_calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_router_does_not_keep_owner_alive() {
        let grid = Arc::new(CountingGrid::default());
        let router = FocusRouter::for_owner(&grid);
        let control = Control::new(ControlKind::TextBlock);
        router.attach(&control);

        assert_eq!(Arc::strong_count(&grid), 1);
    }
}
