//! Core theme types: Distance, Padding, LayoutContext

/// Distance unit types
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum DistanceUnit {
    #[default]
    Px, // Absolute pixels (DPI-scaled)
    Em,      // Relative to font size
    Percent, // Percentage of parent
    Mm,      // Physical millimeters
}

impl DistanceUnit {
    /// Parse from the suffix of a distance literal (`px`, `em`, `%`, `mm`)
    pub fn from_suffix(s: &str) -> Option<Self> {
        match s {
            "px" => Some(DistanceUnit::Px),
            "em" => Some(DistanceUnit::Em),
            "%" => Some(DistanceUnit::Percent),
            "mm" => Some(DistanceUnit::Mm),
            _ => None,
        }
    }
}

/// A distance value with unit
#[derive(Clone, Debug, PartialEq)]
pub struct Distance {
    pub value: f64,
    pub unit: DistanceUnit,
}

impl Default for Distance {
    fn default() -> Self {
        Self::px(0.0)
    }
}

impl Distance {
    pub fn px(value: f64) -> Self {
        Self {
            value,
            unit: DistanceUnit::Px,
        }
    }

    pub fn em(value: f64) -> Self {
        Self {
            value,
            unit: DistanceUnit::Em,
        }
    }

    pub fn percent(value: f64) -> Self {
        Self {
            value,
            unit: DistanceUnit::Percent,
        }
    }

    pub fn mm(value: f64) -> Self {
        Self {
            value,
            unit: DistanceUnit::Mm,
        }
    }

    /// Resolve to physical pixels given context
    pub fn to_pixels(&self, ctx: &LayoutContext) -> f32 {
        match self.unit {
            DistanceUnit::Px => (self.value as f32) * ctx.scale_factor,
            DistanceUnit::Em => (self.value as f32) * ctx.base_font_size * ctx.scale_factor,
            DistanceUnit::Percent => (self.value as f32 / 100.0) * ctx.parent_size,
            DistanceUnit::Mm => (self.value as f32) * ctx.dpi / 25.4,
        }
    }

    /// Resolve to whole layout pixels. Grid arithmetic is integral, so theme
    /// distances are rounded once at resolution time.
    pub fn to_px(&self, ctx: &LayoutContext) -> i32 {
        self.to_pixels(ctx).round() as i32
    }
}

/// Layout context for resolving distances
#[derive(Clone, Debug)]
pub struct LayoutContext {
    pub dpi: f32,
    pub scale_factor: f32,
    pub base_font_size: f32,
    pub parent_size: f32, // Width or height depending on orientation
}

impl Default for LayoutContext {
    fn default() -> Self {
        Self {
            dpi: 96.0,
            scale_factor: 1.0,
            base_font_size: 16.0,
            parent_size: 100.0,
        }
    }
}

/// Four-sided padding
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Padding {
    pub top: Distance,
    pub right: Distance,
    pub bottom: Distance,
    pub left: Distance,
}

impl Padding {
    /// Create uniform padding on all sides
    pub fn uniform(d: Distance) -> Self {
        Self {
            top: d.clone(),
            right: d.clone(),
            bottom: d.clone(),
            left: d,
        }
    }

    /// Create from vertical and horizontal values
    pub fn symmetric(vertical: Distance, horizontal: Distance) -> Self {
        Self {
            top: vertical.clone(),
            bottom: vertical,
            left: horizontal.clone(),
            right: horizontal,
        }
    }

    /// Create from all four values
    pub fn new(top: Distance, right: Distance, bottom: Distance, left: Distance) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Resolve all sides to whole layout pixels
    pub fn resolve(&self, ctx: &LayoutContext) -> ResolvedPadding {
        ResolvedPadding {
            top: self.top.to_px(ctx),
            right: self.right.to_px(ctx),
            bottom: self.bottom.to_px(ctx),
            left: self.left.to_px(ctx),
        }
    }
}

/// Resolved padding in layout pixels
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ResolvedPadding {
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
    pub left: i32,
}

impl ResolvedPadding {
    pub fn horizontal(&self) -> i32 {
        self.left + self.right
    }

    pub fn vertical(&self) -> i32 {
        self.top + self.bottom
    }
}
