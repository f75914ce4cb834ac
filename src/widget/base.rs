//! Base geometry and measurement-constraint types for the layout system
//!
//! All layout arithmetic is in whole pixels; spacing distribution relies on
//! integer division.

/// A width/height pair in layout pixels
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const ZERO: Size = Size {
        width: 0,
        height: 0,
    };

    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// How a size constraint binds the widget being measured
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConstraintKind {
    /// The widget must be exactly the given size
    Exactly,
    /// The widget may be any size up to the given size
    AtMost,
    /// The host imposes no bound
    #[default]
    Unconstrained,
}

/// A single-axis measurement constraint: a kind plus a size value.
///
/// An unconstrained constraint carries size 0; callers that read the value
/// regardless of kind (the measurer's height fallback does) see 0, matching
/// an unspecified measure spec.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SizeConstraint {
    kind: ConstraintKind,
    size: i32,
}

impl SizeConstraint {
    pub fn exactly(size: i32) -> Self {
        Self {
            kind: ConstraintKind::Exactly,
            size,
        }
    }

    pub fn at_most(size: i32) -> Self {
        Self {
            kind: ConstraintKind::AtMost,
            size,
        }
    }

    pub fn unconstrained() -> Self {
        Self {
            kind: ConstraintKind::Unconstrained,
            size: 0,
        }
    }

    pub fn kind(&self) -> ConstraintKind {
        self.kind
    }

    pub fn size(&self) -> i32 {
        self.size
    }

    pub fn is_exact(&self) -> bool {
        self.kind == ConstraintKind::Exactly
    }

    /// Exact or upper-bounded
    pub fn is_bounded(&self) -> bool {
        self.kind != ConstraintKind::Unconstrained
    }
}

/// Constraints for layout measurement, one per axis
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Constraints {
    pub width: SizeConstraint,
    pub height: SizeConstraint,
}

impl Constraints {
    pub fn new(width: SizeConstraint, height: SizeConstraint) -> Self {
        Self { width, height }
    }

    /// Both axes fixed to the given size
    pub fn exactly(width: i32, height: i32) -> Self {
        Self {
            width: SizeConstraint::exactly(width),
            height: SizeConstraint::exactly(height),
        }
    }

    /// Both axes bounded from above
    pub fn at_most(width: i32, height: i32) -> Self {
        Self {
            width: SizeConstraint::at_most(width),
            height: SizeConstraint::at_most(height),
        }
    }

    /// No bound on either axis
    pub fn unconstrained() -> Self {
        Self {
            width: SizeConstraint::unconstrained(),
            height: SizeConstraint::unconstrained(),
        }
    }
}

/// Measured size from a widget
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MeasuredSize {
    pub size: Size,
}

impl MeasuredSize {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            size: Size::new(width, height),
        }
    }
}

/// Rectangle for layout
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a zero-sized rect at origin
    pub fn zero() -> Self {
        Self::default()
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }
}
