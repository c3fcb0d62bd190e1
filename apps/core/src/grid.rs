//! Character-cell geometry for the chart panels, shared so both front ends
//! draw and hit-test the pie and legend the same way.

use crate::chart::{ChartModel, OUTER_RADIUS};

/// A rectangle of terminal cells.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CellRect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl CellRect {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, col: u16, row: u16) -> bool {
        col >= self.x
            && row >= self.y
            && u32::from(col) < u32::from(self.x) + u32::from(self.width)
            && u32::from(row) < u32::from(self.y) + u32::from(self.height)
    }

    /// The area left inside a one-cell border.
    #[must_use]
    pub fn inner(&self) -> Self {
        if self.width < 2 || self.height < 2 {
            return Self::new(self.x, self.y, 0, 0);
        }
        Self::new(self.x + 1, self.y + 1, self.width - 2, self.height - 2)
    }
}

/// Largest area inside `inner` that shows as a circle, given cells about
/// twice as tall as they are wide.
pub fn pie_square(inner: CellRect) -> CellRect {
    let height = inner.height.min(inner.width / 2);
    let width = height * 2;
    CellRect::new(
        inner.x + (inner.width - width) / 2,
        inner.y + (inner.height - height) / 2,
        width,
        height,
    )
}

/// Bucket whose slice covers the center of the cell at `(col, row)`, where
/// `square` is the area the pie is drawn into.
pub fn pie_cell_bucket(
    chart: &ChartModel,
    square: CellRect,
    col: u16,
    row: u16,
) -> Option<usize> {
    if square.width == 0 || !square.contains(col, row) {
        return None;
    }
    let fx = (f64::from(col - square.x) + 0.5) / f64::from(square.width);
    let fy = (f64::from(row - square.y) + 0.5) / f64::from(square.height);
    let dx = fx * 2.0 * OUTER_RADIUS - OUTER_RADIUS;
    let dy = OUTER_RADIUS - fy * 2.0 * OUTER_RADIUS;
    chart.slice_at(dx, dy, OUTER_RADIUS)
}

/// First legend row shown when `rows` rows are visible and the cursor sits
/// on entry `cursor`. The cursor row is always on screen.
pub fn legend_offset(cursor: usize, rows: usize) -> usize {
    if rows == 0 {
        return 0;
    }
    (cursor + 1).saturating_sub(rows)
}

/// Bucket of the legend entry drawn at `row`, when the legend body `inner`
/// is scrolled down by `offset` entries.
pub fn legend_row_bucket(
    chart: &ChartModel,
    inner: CellRect,
    offset: usize,
    col: u16,
    row: u16,
) -> Option<usize> {
    if !inner.contains(col, row) {
        return None;
    }
    let index = offset + usize::from(row - inner.y);
    chart.legend.get(index).map(|entry| entry.index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::draw_chart;
    use crate::domain::Bucket;

    fn chart(years: std::ops::Range<u16>) -> ChartModel {
        let buckets: Vec<Bucket> = years
            .map(|year| Bucket {
                label: Some(year.to_string()),
                count: 1,
            })
            .collect();
        let mut chart = ChartModel::default();
        draw_chart(&mut chart, &buckets, None);
        chart
    }

    #[test]
    fn square_is_twice_as_wide_as_tall() {
        let square = pie_square(CellRect::new(0, 0, 40, 10));
        assert_eq!(square, CellRect::new(10, 0, 20, 10));

        let square = pie_square(CellRect::new(2, 1, 10, 30));
        assert_eq!(square, CellRect::new(2, 13, 10, 5));
    }

    #[test]
    fn inner_drops_the_border() {
        assert_eq!(
            CellRect::new(3, 4, 10, 6).inner(),
            CellRect::new(4, 5, 8, 4)
        );
        assert_eq!(CellRect::new(0, 0, 1, 6).inner().width, 0);
    }

    #[test]
    fn pie_cells_map_to_slices_by_side() {
        let chart = chart(2023..2025);
        let square = pie_square(CellRect::new(0, 0, 42, 12).inner());
        assert_eq!(pie_cell_bucket(&chart, square, 25, 6), Some(0));
        assert_eq!(pie_cell_bucket(&chart, square, 16, 6), Some(1));
        assert_eq!(pie_cell_bucket(&chart, square, 1, 1), None);
    }

    #[test]
    fn offset_keeps_cursor_visible() {
        assert_eq!(legend_offset(0, 10), 0);
        assert_eq!(legend_offset(9, 10), 0);
        assert_eq!(legend_offset(11, 10), 2);
        assert_eq!(legend_offset(4, 0), 0);
    }

    #[test]
    fn scrolled_legend_rows_map_past_the_offset() {
        let chart = chart(2000..2012);
        let inner = CellRect::new(0, 0, 20, 12).inner();
        let offset = legend_offset(11, usize::from(inner.height));
        assert_eq!(offset, 2);

        assert_eq!(legend_row_bucket(&chart, inner, offset, 3, 1), Some(2));
        assert_eq!(legend_row_bucket(&chart, inner, offset, 3, 10), Some(11));
        assert_eq!(legend_row_bucket(&chart, inner, 0, 3, 1), Some(0));
        assert_eq!(legend_row_bucket(&chart, inner, offset, 0, 0), None);
    }
}
