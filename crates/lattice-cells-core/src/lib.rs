//! Core primitives for Lattice Cells.
//!
//! This crate provides the small set of building blocks the cell control
//! factory in `lattice-cells` is written against:
//!
//! - **Colors and brushes**: [`Color`] values and the [`Brush`] a color
//!   swatch is filled with
//! - **Cultures**: [`Culture`] tags attached to value conversions
//! - **Signal/Slot System**: [`Signal`] notifications for drop-down close and
//!   source-updated events raised by the UI runtime
//! - **Logging**: `tracing` targets and performance spans
//!
//! # Signal/Slot Example
//!
//! ```
//! use lattice_cells_core::Signal;
//!
//! let drop_down_closed = Signal::<()>::new();
//!
//! let conn_id = drop_down_closed.connect(|_| {
//!     println!("drop-down closed");
//! });
//!
//! drop_down_closed.emit(());
//! drop_down_closed.disconnect(conn_id);
//! ```
//!
//! # Color Example
//!
//! ```
//! use lattice_cells_core::{Brush, Color};
//!
//! let color = Color::from_hex("#3399FF").unwrap();
//! let brush = Brush::solid(color);
//! assert_eq!(brush.color(), color);
//! ```

mod color;
mod culture;
mod error;
pub mod logging;
pub mod signal;

pub use color::{Brush, Color};
pub use culture::Culture;
pub use error::{Error, Result};
pub use logging::PerfSpan;
pub use signal::{ConnectionGuard, ConnectionId, Signal};
