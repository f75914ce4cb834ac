//! Element widget - a fixed-size leaf cell

use crate::theme::types::LayoutContext;

use super::base::{ConstraintKind, Constraints, MeasuredSize, Rect, Size, SizeConstraint};
use super::{Visibility, Widget};

/// A leaf cell with a preferred size and a visibility flag. The grid treats
/// every visible cell as the same size as the first one, so hosts typically
/// build all elements with one preferred size.
pub struct Element {
    name: String,
    preferred: Size,
    visibility: Visibility,
    measured: MeasuredSize,
    bounds: Option<Rect>,
}

impl Element {
    /// Create an element with a preferred size
    pub fn new(name: impl Into<String>, width: i32, height: i32) -> Self {
        Self {
            name: name.into(),
            preferred: Size::new(width, height),
            visibility: Visibility::Visible,
            measured: MeasuredSize::default(),
            bounds: None,
        }
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn set_visibility(&mut self, visibility: Visibility) {
        self.visibility = visibility;
    }

    pub fn preferred_size(&self) -> Size {
        self.preferred
    }

    pub fn set_preferred_size(&mut self, width: i32, height: i32) {
        self.preferred = Size::new(width, height);
    }
}

/// Resolve a preferred extent against a single-axis constraint
fn resolve_extent(preferred: i32, constraint: SizeConstraint) -> i32 {
    match constraint.kind() {
        ConstraintKind::Exactly => constraint.size(),
        ConstraintKind::AtMost => preferred.min(constraint.size()),
        ConstraintKind::Unconstrained => preferred,
    }
}

impl Widget for Element {
    fn name(&self) -> &str {
        &self.name
    }

    fn visibility(&self) -> Visibility {
        self.visibility
    }

    fn measure(&mut self, constraints: Constraints, _ctx: &LayoutContext) -> MeasuredSize {
        self.measured = MeasuredSize::new(
            resolve_extent(self.preferred.width, constraints.width),
            resolve_extent(self.preferred.height, constraints.height),
        );
        self.measured
    }

    fn measured(&self) -> MeasuredSize {
        self.measured
    }

    fn arrange(&mut self, bounds: Rect, _ctx: &LayoutContext) {
        self.bounds = Some(bounds);
    }

    fn bounds(&self) -> Option<Rect> {
        self.bounds
    }
}
