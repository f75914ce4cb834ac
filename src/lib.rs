//! evengrid - an evenly spaced grid layout engine.
//!
//! Arranges same-sized child cells into a wrapping grid: columns are spaced
//! evenly across the available width, rows are separated by a fixed gap. The
//! engine is host-agnostic; a toolkit adapter implements [`Widget`] for its
//! children and drives [`EvenlySpacedGrid::measure`] and
//! [`EvenlySpacedGrid::arrange`] from its own layout pass.
//!
//! Grid attributes (`row-padding`, `max-spacing`, `padding`) can be supplied
//! programmatically or loaded from a rasi-style stylesheet via [`ThemeTree`].

#[macro_use]
extern crate lalrpop_util;

// Include the log module so the log! macro works
#[macro_use]
pub mod log;

pub mod theme;
pub mod widget;

pub use theme::tree::{ThemeError, ThemeTree};
pub use theme::types::{Distance, DistanceUnit, LayoutContext, Padding, ResolvedPadding};
pub use widget::base::{ConstraintKind, Constraints, MeasuredSize, Rect, Size, SizeConstraint};
pub use widget::element::Element;
pub use widget::grid::EvenlySpacedGrid;
pub use widget::{Visibility, Widget};
