//! Widget system for the grid layout engine
//!
//! The `Widget` trait is the collaborator contract between the grid and its
//! host toolkit: per-child visibility, a self-measure request that caches the
//! measured size, and rectangle assignment. Any toolkit layout extension
//! point can adapt its children to it.

pub mod base;
pub mod element;
pub mod grid;

use crate::theme::types::LayoutContext;

pub use base::{ConstraintKind, Constraints, MeasuredSize, Rect, Size, SizeConstraint};
pub use element::Element;
pub use grid::EvenlySpacedGrid;

/// Whether a child takes part in layout
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Visible,
    /// Excluded entirely: not counted, measured, or positioned
    Hidden,
}

impl Visibility {
    pub fn is_visible(&self) -> bool {
        matches!(self, Visibility::Visible)
    }
}

/// Layout contract for UI components
pub trait Widget {
    /// Get the widget's name (for theme lookups)
    fn name(&self) -> &str {
        ""
    }

    /// Whether this widget takes part in layout
    fn visibility(&self) -> Visibility {
        Visibility::Visible
    }

    /// Measure the widget's desired size given constraints.
    /// Updates the widget's cached measured size as a side effect.
    fn measure(&mut self, constraints: Constraints, ctx: &LayoutContext) -> MeasuredSize;

    /// The size from the last measure pass
    fn measured(&self) -> MeasuredSize;

    /// Assign the widget its final rectangle.
    /// This is called after measure() to position the widget.
    fn arrange(&mut self, bounds: Rect, ctx: &LayoutContext);

    /// The rectangle from the last arrange pass, `None` before the first
    fn bounds(&self) -> Option<Rect>;
}
