//! Logging facilities for Lattice Cells.
//!
//! Lattice Cells uses the `tracing` crate for instrumentation and never
//! installs a subscriber itself. To see logs, install one in the application
//! hosting the grid:
//!
//! ```ignore
//! use tracing_subscriber::EnvFilter;
//!
//! fn main() {
//!     tracing_subscriber::fmt()
//!         .with_env_filter(EnvFilter::new("lattice_cells::factory=debug"))
//!         .init();
//! }
//! ```
//!
//! Use the constants in [`targets`] to filter by subsystem.

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core primitives target.
    pub const CORE: &str = "lattice_cells_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "lattice_cells_core::signal";
    /// Control factory dispatch target.
    pub const FACTORY: &str = "lattice_cells::factory";
    /// Binding descriptor construction target.
    pub const BINDING: &str = "lattice_cells::binding";
    /// Focus routing target.
    pub const FOCUS: &str = "lattice_cells::focus";
    /// Configuration loading target.
    pub const CONFIG: &str = "lattice_cells::config";
}

/// A guard that keeps a tracing span entered until dropped.
///
/// The factory wraps each control construction in one of these so the
/// time spent building a cell shows up in span-aware subscribers.
#[derive(Debug)]
pub struct PerfSpan {
    #[allow(dead_code)]
    span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create a new performance span.
    ///
    /// The span will be active until the guard is dropped.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::debug_span!(target: "lattice_cells::perf", "perf", operation = name);
        Self {
            span: span.entered(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perf_span() {
        // Just ensure it compiles and doesn't panic
        let _span = PerfSpan::new("test_operation");
    }

    #[test]
    fn test_targets_are_namespaced() {
        for target in [targets::FACTORY, targets::BINDING, targets::FOCUS, targets::CONFIG] {
            assert!(target.starts_with("lattice_cells::"));
        }
        assert!(targets::SIGNAL.starts_with(targets::CORE));
    }
}
