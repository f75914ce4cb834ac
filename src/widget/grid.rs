//! EvenlySpacedGrid - wraps same-sized cells into evenly spaced columns
//!
//! The measure pass resolves the container size from the host's constraints
//! and asks every visible child to self-measure; the arrange pass re-derives
//! the column geometry from the measured state and assigns each visible
//! child its rectangle. Horizontal leftover space is distributed evenly
//! across the occupied columns, vertical gaps are the fixed `row_padding`.

use crate::theme::tree::ThemeTree;
use crate::theme::types::{Distance, LayoutContext, Padding, ResolvedPadding};

use super::base::{ConstraintKind, Constraints, MeasuredSize, Rect, Size, SizeConstraint};
use super::{Visibility, Widget};

/// Fallback extent when the host leaves an axis unconstrained
pub const DEFAULT_WIDTH: i32 = 240;
pub const DEFAULT_HEIGHT: i32 = 240;

/// Substitute for a zero cell extent, so the column math has a divisor
pub const MIN_CELL_EXTENT: i32 = 10;

/// Default cap on horizontal spacing, as a multiple of the cell width
pub const DEFAULT_MAX_SPACING: f32 = 1.0;

/// A container that wraps same-sized children into a grid with evenly
/// distributed horizontal spacing and a fixed vertical gap between rows.
///
/// All visible children are treated as cells of one size, taken from the
/// first visible child's measured size. The grid never creates or removes
/// children; it only reads their visibility and measured size and assigns
/// their rectangles.
pub struct EvenlySpacedGrid {
    /// Widget name (for theme lookups)
    name: String,
    /// Child widgets, owned and mutated by the host
    children: Vec<Box<dyn Widget>>,
    /// Fixed vertical gap between rows
    row_padding: i32,
    /// Cap on horizontal spacing as a multiple of the cell width; <= 0
    /// disables the cap
    max_spacing: f32,
    /// Inner padding
    padding: ResolvedPadding,
    /// Cached result of the last measure pass
    measured: MeasuredSize,
    /// Cached bounds from the last arrange pass
    bounds: Option<Rect>,
}

impl EvenlySpacedGrid {
    /// Create a new grid with a name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
            row_padding: 0,
            max_spacing: DEFAULT_MAX_SPACING,
            padding: ResolvedPadding::default(),
            measured: MeasuredSize::default(),
            bounds: None,
        }
    }

    /// Set the fixed vertical gap between rows
    pub fn with_row_padding(mut self, row_padding: i32) -> Self {
        self.row_padding = row_padding;
        self
    }

    /// Set the spacing cap ratio; values <= 0 disable the cap
    pub fn with_max_spacing(mut self, max_spacing: f32) -> Self {
        self.max_spacing = max_spacing;
        self
    }

    /// Set padding
    pub fn with_padding(mut self, top: i32, right: i32, bottom: i32, left: i32) -> Self {
        self.padding = ResolvedPadding {
            top,
            right,
            bottom,
            left,
        };
        self
    }

    /// Update the row gap for subsequent layout passes
    pub fn set_row_padding(&mut self, row_padding: i32) {
        self.row_padding = row_padding;
    }

    pub fn set_max_spacing(&mut self, max_spacing: f32) {
        self.max_spacing = max_spacing;
    }

    pub fn set_padding(&mut self, top: i32, right: i32, bottom: i32, left: i32) {
        self.padding = ResolvedPadding {
            top,
            right,
            bottom,
            left,
        };
    }

    pub fn row_padding(&self) -> i32 {
        self.row_padding
    }

    pub fn max_spacing(&self) -> f32 {
        self.max_spacing
    }

    pub fn padding(&self) -> ResolvedPadding {
        self.padding
    }

    /// Add a child widget
    pub fn add_child(&mut self, child: Box<dyn Widget>) {
        self.children.push(child);
    }

    /// Get children (immutable)
    pub fn children(&self) -> &[Box<dyn Widget>] {
        &self.children
    }

    /// Get children (mutable)
    pub fn children_mut(&mut self) -> &mut [Box<dyn Widget>] {
        &mut self.children
    }

    /// Load grid attributes from theme: `row-padding`, `max-spacing`,
    /// `padding` and per-side `padding-*` overrides
    pub fn load_from_theme(&mut self, theme: &ThemeTree, ctx: &LayoutContext) {
        self.row_padding = theme
            .get_distance(&self.name, None, "row-padding", Distance::px(0.0))
            .to_px(ctx);
        self.max_spacing =
            theme.get_number(&self.name, None, "max-spacing", DEFAULT_MAX_SPACING as f64) as f32;

        let base = theme.get_padding(&self.name, None, "padding", Padding::default());
        self.padding = Padding::new(
            theme.get_distance(&self.name, None, "padding-top", base.top.clone()),
            theme.get_distance(&self.name, None, "padding-right", base.right.clone()),
            theme.get_distance(&self.name, None, "padding-bottom", base.bottom.clone()),
            theme.get_distance(&self.name, None, "padding-left", base.left),
        )
        .resolve(ctx);
    }

    /// Number of children that take part in layout
    pub fn visible_count(&self) -> usize {
        self.children
            .iter()
            .filter(|c| c.visibility().is_visible())
            .count()
    }

    /// Measure the grid and ask every visible child to self-measure.
    ///
    /// Width resolves to the constraint size when bounded, otherwise to
    /// `DEFAULT_WIDTH`. Height resolves to the exact constraint when given;
    /// under an upper-bounded width it is the height constraint size capped
    /// at `DEFAULT_HEIGHT`; otherwise it is derived from the rows the
    /// visible children wrap into.
    pub fn measure(&mut self, constraints: Constraints, ctx: &LayoutContext) -> MeasuredSize {
        let width = match constraints.width.kind() {
            ConstraintKind::Exactly | ConstraintKind::AtMost => constraints.width.size(),
            ConstraintKind::Unconstrained => DEFAULT_WIDTH,
        };

        let height = if constraints.height.is_exact() {
            constraints.height.size()
        } else if constraints.width.kind() == ConstraintKind::AtMost {
            constraints.height.size().min(DEFAULT_HEIGHT)
        } else {
            self.measure_content_height(width, constraints, ctx)
        };

        self.measured = MeasuredSize::new(width, height);
        self.measured
    }

    /// Assign every visible child its rectangle, left-to-right and
    /// top-to-bottom in row-major order within `bounds`. Uses the sizes
    /// cached by the last measure pass.
    pub fn arrange(&mut self, bounds: Rect, ctx: &LayoutContext) {
        self.bounds = Some(bounds);

        let visible = self.visible_count() as i32;
        if visible == 0 {
            return;
        }

        // Both extents substitute the minimum here, unlike the measure pass.
        let cell = self.cell_size().unwrap_or(Size::ZERO);
        let cell_width = Self::non_zero_extent(cell.width);
        let cell_height = Self::non_zero_extent(cell.height);

        let content_width = self.content_width(self.measured.size.width);
        let columns = self.column_count(content_width, cell_width);

        let mut extra_space = content_width % cell_width;
        if columns > visible {
            // Unused trailing columns fold into the spacing budget
            extra_space += (columns - visible) * cell_width;
        }

        let mut spacing = extra_space / columns.min(visible);
        if self.max_spacing > 0.0 {
            spacing = spacing.min((self.max_spacing * cell_width as f32) as i32);
        }

        let pad_left = self.padding.left;
        let pad_top = self.padding.top;
        let row_padding = self.row_padding;

        for (i, child) in self
            .children
            .iter_mut()
            .filter(|c| c.visibility().is_visible())
            .enumerate()
        {
            let col = i as i32 % columns;
            let row = i as i32 / columns;

            let x = bounds.x + pad_left + col * cell_width + col * spacing + spacing / 2;
            let y = bounds.y + pad_top + row * cell_height + row * row_padding;

            let size = child.measured().size;
            child.arrange(Rect::new(x, y, size.width, size.height), ctx);
        }
    }

    /// Height derived from wrapping the visible children into rows
    fn measure_content_height(
        &mut self,
        width: i32,
        constraints: Constraints,
        ctx: &LayoutContext,
    ) -> i32 {
        let visible = self.visible_count() as i32;
        if visible == 0 {
            return DEFAULT_HEIGHT;
        }

        let child_constraints = self.child_constraints(constraints);
        for child in self
            .children
            .iter_mut()
            .filter(|c| c.visibility().is_visible())
        {
            child.measure(child_constraints, ctx);
        }
        self.check_uniform_cell_sizes();

        let cell = self.cell_size().unwrap_or(Size::ZERO);
        let cell_width = Self::non_zero_extent(cell.width);
        // The cell height is taken as measured, even when zero.
        let cell_height = cell.height;

        let content_width = self.content_width(width);
        let columns = self.column_count(content_width, cell_width);
        let rows = (visible + columns - 1) / columns;

        rows * cell_height + (rows - 1) * self.row_padding + self.padding.vertical()
    }

    /// Constraints passed to children when they self-measure: bounded parent
    /// axes become upper bounds minus padding, unconstrained axes stay
    /// unconstrained.
    fn child_constraints(&self, constraints: Constraints) -> Constraints {
        Constraints::new(
            Self::child_axis(constraints.width, self.padding.horizontal()),
            Self::child_axis(constraints.height, self.padding.vertical()),
        )
    }

    fn child_axis(constraint: SizeConstraint, padding: i32) -> SizeConstraint {
        match constraint.kind() {
            ConstraintKind::Exactly | ConstraintKind::AtMost => {
                SizeConstraint::at_most((constraint.size() - padding).max(0))
            }
            ConstraintKind::Unconstrained => SizeConstraint::unconstrained(),
        }
    }

    /// The canonical cell size: the first visible child's measured size
    fn cell_size(&self) -> Option<Size> {
        self.children
            .iter()
            .find(|c| c.visibility().is_visible())
            .map(|c| c.measured().size)
    }

    fn non_zero_extent(extent: i32) -> i32 {
        if extent == 0 {
            MIN_CELL_EXTENT
        } else {
            extent
        }
    }

    fn content_width(&self, width: i32) -> i32 {
        width - self.padding.horizontal()
    }

    /// Columns that fit the content width, clamped to at least one. A
    /// content width narrower than one cell overflows as a single column.
    fn column_count(&self, content_width: i32, cell_width: i32) -> i32 {
        let columns = content_width / cell_width;
        if columns < 1 {
            crate::log!(
                "{}: content width {} narrower than cell width {}, clamping to one column",
                self.name,
                content_width,
                cell_width
            );
            return 1;
        }
        columns
    }

    /// All visible children are assumed to share the first visible child's
    /// measured size; report any that do not.
    fn check_uniform_cell_sizes(&self) {
        let mut visible = self
            .children
            .iter()
            .filter(|c| c.visibility().is_visible());
        let Some(first) = visible.next() else {
            return;
        };

        let cell = first.measured().size;
        for child in visible {
            let size = child.measured().size;
            if size != cell {
                crate::log!(
                    "{}: child '{}' measured {}x{}, expected uniform cell {}x{}",
                    self.name,
                    child.name(),
                    size.width,
                    size.height,
                    cell.width,
                    cell.height
                );
            }
        }
    }
}

impl Widget for EvenlySpacedGrid {
    fn name(&self) -> &str {
        &self.name
    }

    fn measure(&mut self, constraints: Constraints, ctx: &LayoutContext) -> MeasuredSize {
        EvenlySpacedGrid::measure(self, constraints, ctx)
    }

    fn measured(&self) -> MeasuredSize {
        self.measured
    }

    fn arrange(&mut self, bounds: Rect, ctx: &LayoutContext) {
        EvenlySpacedGrid::arrange(self, bounds, ctx)
    }

    fn bounds(&self) -> Option<Rect> {
        self.bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::element::Element;

    fn grid_with_cells(count: usize, width: i32, height: i32) -> EvenlySpacedGrid {
        let mut grid = EvenlySpacedGrid::new("grid");
        for i in 0..count {
            grid.add_child(Box::new(Element::new(format!("cell-{}", i), width, height)));
        }
        grid
    }

    fn child_bounds(grid: &EvenlySpacedGrid) -> Vec<Option<Rect>> {
        grid.children().iter().map(|c| c.bounds()).collect()
    }

    #[test]
    fn test_empty_grid_measures_defaults() {
        let ctx = LayoutContext::default();
        let mut grid = EvenlySpacedGrid::new("grid");

        let m = grid.measure(Constraints::unconstrained(), &ctx);
        assert_eq!(m.size, Size::new(DEFAULT_WIDTH, DEFAULT_HEIGHT));
    }

    #[test]
    fn test_exact_constraints_pass_through() {
        let ctx = LayoutContext::default();
        let mut grid = grid_with_cells(5, 100, 50);

        let m = grid.measure(Constraints::exactly(320, 200), &ctx);
        assert_eq!(m.size, Size::new(320, 200));
    }

    #[test]
    fn test_bounded_width_caps_height_at_default() {
        let ctx = LayoutContext::default();
        let mut grid = grid_with_cells(5, 100, 50);

        let m = grid.measure(Constraints::at_most(300, 500), &ctx);
        assert_eq!(m.size, Size::new(300, DEFAULT_HEIGHT));

        let m = grid.measure(Constraints::at_most(300, 100), &ctx);
        assert_eq!(m.size, Size::new(300, 100));

        // An unconstrained height carries size 0, as an unspecified measure
        // spec does.
        let m = grid.measure(
            Constraints::new(SizeConstraint::at_most(300), SizeConstraint::unconstrained()),
            &ctx,
        );
        assert_eq!(m.size, Size::new(300, 0));
    }

    #[test]
    fn test_content_height_from_wrapping_rows() {
        let ctx = LayoutContext::default();
        let mut grid = grid_with_cells(5, 100, 50).with_row_padding(10);

        // 5 cells of 100x50 against width 320: 3 columns, 2 rows.
        let m = grid.measure(
            Constraints::new(SizeConstraint::exactly(320), SizeConstraint::unconstrained()),
            &ctx,
        );
        assert_eq!(m.size, Size::new(320, 110));
    }

    #[test]
    fn test_content_height_includes_padding() {
        let ctx = LayoutContext::default();
        let mut grid = grid_with_cells(5, 100, 50)
            .with_row_padding(10)
            .with_padding(7, 0, 5, 0);

        let m = grid.measure(
            Constraints::new(SizeConstraint::exactly(320), SizeConstraint::unconstrained()),
            &ctx,
        );
        assert_eq!(m.size, Size::new(320, 122));
    }

    #[test]
    fn test_measure_requests_child_self_measure() {
        let ctx = LayoutContext::default();
        let mut grid = grid_with_cells(3, 100, 50);

        for child in grid.children() {
            assert_eq!(child.measured().size, Size::ZERO);
        }

        grid.measure(
            Constraints::new(SizeConstraint::exactly(320), SizeConstraint::unconstrained()),
            &ctx,
        );

        for child in grid.children() {
            assert_eq!(child.measured().size, Size::new(100, 50));
        }
    }

    #[test]
    fn test_placement_scenario() {
        let ctx = LayoutContext::default();
        let mut grid = grid_with_cells(5, 100, 50).with_row_padding(10);

        let m = grid.measure(
            Constraints::new(SizeConstraint::exactly(320), SizeConstraint::unconstrained()),
            &ctx,
        );
        grid.arrange(Rect::new(0, 0, m.size.width, m.size.height), &ctx);

        // leftover 20 over 3 columns: spacing 6, half-gap 3 on the left
        assert_eq!(
            child_bounds(&grid),
            vec![
                Some(Rect::new(3, 0, 100, 50)),
                Some(Rect::new(109, 0, 100, 50)),
                Some(Rect::new(215, 0, 100, 50)),
                Some(Rect::new(3, 60, 100, 50)),
                Some(Rect::new(109, 60, 100, 50)),
            ]
        );
    }

    #[test]
    fn test_arrange_offsets_by_bounds_origin_and_padding() {
        let ctx = LayoutContext::default();
        let mut grid = grid_with_cells(3, 100, 50).with_padding(4, 10, 0, 10);

        // content width 320 - 20 = 300: 3 columns, no leftover
        let m = grid.measure(
            Constraints::new(SizeConstraint::exactly(320), SizeConstraint::unconstrained()),
            &ctx,
        );
        assert_eq!(m.size, Size::new(320, 54));

        grid.arrange(Rect::new(50, 20, 320, 54), &ctx);
        assert_eq!(grid.children()[0].bounds(), Some(Rect::new(60, 24, 100, 50)));
        assert_eq!(grid.children()[1].bounds(), Some(Rect::new(160, 24, 100, 50)));
    }

    #[test]
    fn test_hidden_children_are_skipped() {
        let ctx = LayoutContext::default();
        let mut grid = EvenlySpacedGrid::new("grid").with_row_padding(10);
        for i in 0..5 {
            let mut element = Element::new(format!("cell-{}", i), 100, 50);
            if i == 2 {
                element.set_visibility(Visibility::Hidden);
            }
            grid.add_child(Box::new(element));
        }
        assert_eq!(grid.visible_count(), 4);

        // 4 visible cells still wrap into 2 rows of 3
        let m = grid.measure(
            Constraints::new(SizeConstraint::exactly(320), SizeConstraint::unconstrained()),
            &ctx,
        );
        assert_eq!(m.size, Size::new(320, 110));

        grid.arrange(Rect::new(0, 0, 320, 110), &ctx);
        assert_eq!(
            child_bounds(&grid),
            vec![
                Some(Rect::new(3, 0, 100, 50)),
                Some(Rect::new(109, 0, 100, 50)),
                // hidden child is never assigned a rectangle
                None,
                Some(Rect::new(215, 0, 100, 50)),
                Some(Rect::new(3, 60, 100, 50)),
            ]
        );
    }

    #[test]
    fn test_spacing_cap_clamps_raw_spacing() {
        let ctx = LayoutContext::default();
        let mut grid = grid_with_cells(2, 100, 50).with_max_spacing(0.5);

        let m = grid.measure(
            Constraints::new(SizeConstraint::exactly(360), SizeConstraint::unconstrained()),
            &ctx,
        );
        assert_eq!(m.size, Size::new(360, 50));

        // 3 columns for 2 cells: raw spacing (60 + 100) / 2 = 80, capped to
        // 0.5 * 100 = 50.
        grid.arrange(Rect::new(0, 0, 360, 50), &ctx);
        assert_eq!(grid.children()[0].bounds(), Some(Rect::new(25, 0, 100, 50)));
        assert_eq!(grid.children()[1].bounds(), Some(Rect::new(175, 0, 100, 50)));
    }

    #[test]
    fn test_single_child_is_centered_by_spacing() {
        let ctx = LayoutContext::default();
        let mut grid = grid_with_cells(1, 100, 50);

        let m = grid.measure(
            Constraints::new(SizeConstraint::exactly(240), SizeConstraint::unconstrained()),
            &ctx,
        );
        grid.arrange(Rect::new(0, 0, m.size.width, m.size.height), &ctx);

        // raw spacing (40 + 100) / 1 = 140, capped at one cell width; the
        // half-gap centers the lone child at 50.
        assert_eq!(grid.children()[0].bounds(), Some(Rect::new(50, 0, 100, 50)));
    }

    #[test]
    fn test_zero_columns_clamps_to_one() {
        let ctx = LayoutContext::default();
        let mut grid = grid_with_cells(3, 300, 50);

        // Unconstrained cells keep their preferred 300 width, wider than the
        // 240 fallback container, so the column count clamps to one and
        // every cell overflows as its own row.
        let m = grid.measure(Constraints::unconstrained(), &ctx);
        assert_eq!(m.size, Size::new(240, 150));

        grid.arrange(Rect::new(0, 0, 240, 150), &ctx);
        assert_eq!(
            child_bounds(&grid),
            vec![
                Some(Rect::new(120, 0, 300, 50)),
                Some(Rect::new(120, 50, 300, 50)),
                Some(Rect::new(120, 100, 300, 50)),
            ]
        );
    }

    #[test]
    fn test_zero_sized_cells_use_min_extent_in_arrange_only() {
        let ctx = LayoutContext::default();
        let mut grid = grid_with_cells(5, 0, 0);

        // The measure pass substitutes the minimum for the cell width but
        // keeps the zero cell height: one row of height 0.
        let m = grid.measure(
            Constraints::new(SizeConstraint::exactly(240), SizeConstraint::unconstrained()),
            &ctx,
        );
        assert_eq!(m.size, Size::new(240, 0));

        // The arrange pass substitutes both extents: 24 virtual columns for
        // 5 cells, spacing capped at one cell width (10).
        grid.arrange(Rect::new(0, 0, 240, 0), &ctx);
        assert_eq!(grid.children()[0].bounds(), Some(Rect::new(5, 0, 0, 0)));
        assert_eq!(grid.children()[1].bounds(), Some(Rect::new(25, 0, 0, 0)));
    }

    #[test]
    fn test_layout_is_idempotent() {
        let ctx = LayoutContext::default();
        let mut grid = grid_with_cells(5, 100, 50).with_row_padding(10);
        let constraints =
            Constraints::new(SizeConstraint::exactly(320), SizeConstraint::unconstrained());

        let m = grid.measure(constraints, &ctx);
        grid.arrange(Rect::new(0, 0, m.size.width, m.size.height), &ctx);
        let first = child_bounds(&grid);

        let m = grid.measure(constraints, &ctx);
        grid.arrange(Rect::new(0, 0, m.size.width, m.size.height), &ctx);
        assert_eq!(child_bounds(&grid), first);
    }

    #[test]
    fn test_set_row_padding_affects_later_passes() {
        let ctx = LayoutContext::default();
        let mut grid = grid_with_cells(5, 100, 50);
        let constraints =
            Constraints::new(SizeConstraint::exactly(320), SizeConstraint::unconstrained());

        assert_eq!(grid.measure(constraints, &ctx).size.height, 100);

        grid.set_row_padding(10);
        assert_eq!(grid.measure(constraints, &ctx).size.height, 110);
    }

    #[test]
    fn test_load_from_theme_reads_attributes() {
        let ctx = LayoutContext::default();
        let theme = ThemeTree::parse(
            r#"
            grid {
                row-padding: 10px;
                max-spacing: 0.5;
                padding: 4px;
                padding-left: 8px;
            }
        "#,
        )
        .unwrap();

        let mut grid = EvenlySpacedGrid::new("grid");
        grid.load_from_theme(&theme, &ctx);

        assert_eq!(grid.row_padding(), 10);
        assert_eq!(grid.max_spacing(), 0.5);
        assert_eq!(
            grid.padding(),
            ResolvedPadding {
                top: 4,
                right: 4,
                bottom: 4,
                left: 8
            }
        );
    }
}
