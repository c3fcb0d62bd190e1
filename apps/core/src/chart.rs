//! Year aggregation, pie layout and the drawing capability used by both front
//! ends.

use std::f64::consts::TAU;

use crate::domain::{Bucket, Project};

pub const INNER_RADIUS: f64 = 0.0;
pub const OUTER_RADIUS: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Tableau10, the qualitative palette slices and legend swatches share.
pub const TABLEAU10: [Rgb; 10] = [
    Rgb(0x4e, 0x79, 0xa7),
    Rgb(0xf2, 0x8e, 0x2c),
    Rgb(0xe1, 0x57, 0x59),
    Rgb(0x76, 0xb7, 0xb2),
    Rgb(0x59, 0xa1, 0x4f),
    Rgb(0xed, 0xc9, 0x48),
    Rgb(0xb0, 0x7a, 0xa1),
    Rgb(0xff, 0x9d, 0xa7),
    Rgb(0x9c, 0x75, 0x5f),
    Rgb(0xba, 0xb0, 0xab),
];

pub const fn palette_color(index: usize) -> Rgb {
    TABLEAU10[index % TABLEAU10.len()]
}

/// Counts projects per year. Buckets keep the order in which each year first
/// appears.
pub fn rollup_by_year<'a, I>(projects: I) -> Vec<Bucket>
where
    I: IntoIterator<Item = &'a Project>,
{
    let mut buckets: Vec<Bucket> = Vec::new();
    for project in projects {
        match buckets
            .iter_mut()
            .find(|bucket| bucket.label == project.year)
        {
            Some(bucket) => bucket.count += 1,
            None => buckets.push(Bucket {
                label: project.year.clone(),
                count: 1,
            }),
        }
    }
    buckets
}

/// Angular extent of one bucket. Angles are radians clockwise from twelve
/// o'clock.
#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub index: usize,
    pub label: String,
    pub value: usize,
    pub start_angle: f64,
    pub end_angle: f64,
}

impl PieSlice {
    pub fn contains_angle(&self, angle: f64) -> bool {
        angle >= self.start_angle && angle < self.end_angle
    }
}

/// Lays buckets around the circle. Larger buckets come first around the
/// circle, ties keep bucket order; the returned slices stay in bucket order
/// so `slices[i]` belongs to `buckets[i]`.
#[allow(clippy::cast_precision_loss)]
pub fn pie_layout(buckets: &[Bucket]) -> Vec<PieSlice> {
    let total: usize = buckets.iter().map(|bucket| bucket.count).sum();
    let scale = if total == 0 { 0.0 } else { TAU / total as f64 };

    let mut order: Vec<usize> = (0..buckets.len()).collect();
    order.sort_by(|&a, &b| buckets[b].count.cmp(&buckets[a].count));

    let mut slices: Vec<PieSlice> = buckets
        .iter()
        .enumerate()
        .map(|(index, bucket)| PieSlice {
            index,
            label: bucket.display_label().to_string(),
            value: bucket.count,
            start_angle: 0.0,
            end_angle: 0.0,
        })
        .collect();

    let mut angle = 0.0;
    for index in order {
        let slice = &mut slices[index];
        slice.start_angle = angle;
        angle += slice.value as f64 * scale;
        slice.end_angle = angle;
    }

    slices
}

/// Which slice covers the point `(dx, dy)` relative to the pie center, with
/// `dy` pointing up. Points inside [`INNER_RADIUS`] or past `radius` miss.
pub fn slice_at(slices: &[PieSlice], dx: f64, dy: f64, radius: f64) -> Option<usize> {
    let distance = dx.hypot(dy);
    if distance > radius || distance < INNER_RADIUS {
        return None;
    }
    let angle = dx.atan2(dy).rem_euclid(TAU);
    slices
        .iter()
        .find(|slice| slice.contains_angle(angle))
        .map(|slice| slice.index)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegendEntry {
    pub index: usize,
    pub label: String,
    pub count: usize,
    pub color: Rgb,
}

/// A drawing target for the year chart. Clicks on a slice or its legend
/// entry are reported back to the page by bucket index.
pub trait ChartSurface {
    fn clear(&mut self);
    fn draw_slice(&mut self, slice: &PieSlice, color: Rgb);
    fn draw_legend_entry(&mut self, entry: &LegendEntry);
    /// Marks exactly the slice and legend entry at `selected`, or none.
    fn mark_selected(&mut self, selected: Option<usize>);
}

/// Clears the surface, then draws one slice and one legend entry per bucket.
pub fn draw_chart<S>(surface: &mut S, buckets: &[Bucket], selected: Option<usize>)
where
    S: ChartSurface + ?Sized,
{
    surface.clear();
    for slice in pie_layout(buckets) {
        surface.draw_slice(&slice, palette_color(slice.index));
    }
    for (index, bucket) in buckets.iter().enumerate() {
        surface.draw_legend_entry(&LegendEntry {
            index,
            label: bucket.display_label().to_string(),
            count: bucket.count,
            color: palette_color(index),
        });
    }
    surface.mark_selected(selected);
}

/// Retained chart contents, drawn by the front ends every frame.
#[derive(Debug, Clone, Default)]
pub struct ChartModel {
    pub slices: Vec<(PieSlice, Rgb)>,
    pub legend: Vec<LegendEntry>,
    pub selected: Option<usize>,
}

impl ChartModel {
    pub fn is_selected(&self, index: usize) -> bool {
        self.selected == Some(index)
    }

    pub fn slice_at(&self, dx: f64, dy: f64, radius: f64) -> Option<usize> {
        let slices: Vec<PieSlice> = self.slices.iter().map(|(slice, _)| slice.clone()).collect();
        slice_at(&slices, dx, dy, radius)
    }

    /// Grid points inside the pie, grouped by slice in drawing order. The
    /// grid spans `[-OUTER_RADIUS, OUTER_RADIUS]` on both axes with
    /// `samples + 1` points per axis.
    pub fn sample_points(&self, samples: u32) -> Vec<Vec<(f64, f64)>> {
        let mut points = vec![Vec::new(); self.slices.len()];
        if samples == 0 {
            return points;
        }
        let slices: Vec<PieSlice> = self.slices.iter().map(|(slice, _)| slice.clone()).collect();
        let step = 2.0 * OUTER_RADIUS / f64::from(samples);
        for row in 0..=samples {
            let dy = OUTER_RADIUS - f64::from(row) * step;
            for col in 0..=samples {
                let dx = f64::from(col) * step - OUTER_RADIUS;
                let hit = slice_at(&slices, dx, dy, OUTER_RADIUS)
                    .and_then(|index| slices.iter().position(|slice| slice.index == index));
                if let Some(position) = hit {
                    points[position].push((dx, dy));
                }
            }
        }
        points
    }
}

impl ChartSurface for ChartModel {
    fn clear(&mut self) {
        self.slices.clear();
        self.legend.clear();
        self.selected = None;
    }

    fn draw_slice(&mut self, slice: &PieSlice, color: Rgb) {
        self.slices.push((slice.clone(), color));
    }

    fn draw_legend_entry(&mut self, entry: &LegendEntry) {
        self.legend.push(entry.clone());
    }

    fn mark_selected(&mut self, selected: Option<usize>) {
        self.selected = selected.filter(|index| *index < self.legend.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn years(values: &[&str]) -> Vec<Project> {
        values
            .iter()
            .map(|year| Project {
                year: Some((*year).to_string()),
                ..Project::default()
            })
            .collect()
    }

    fn assert_close(actual: f64, expected: f64) {
        let diff = (actual - expected).abs();
        assert!(diff < 1e-9, "expected {expected}, got {actual}");
    }

    #[test]
    fn rollup_keeps_first_seen_order() {
        let buckets = rollup_by_year(&years(&["2020", "2021", "2020"]));
        assert_eq!(
            buckets,
            vec![
                Bucket {
                    label: Some("2020".to_string()),
                    count: 2
                },
                Bucket {
                    label: Some("2021".to_string()),
                    count: 1
                },
            ]
        );
    }

    #[test]
    fn rollup_counts_sum_to_input_length() {
        let projects = years(&["2019", "2024", "2019", "2022", "2024", "2024", "2018"]);
        let buckets = rollup_by_year(&projects);
        assert_eq!(
            buckets.iter().map(|bucket| bucket.count).sum::<usize>(),
            projects.len()
        );
        assert!(rollup_by_year(&[]).is_empty());
    }

    #[test]
    fn rollup_groups_missing_years_together() {
        let mut projects = years(&["2020"]);
        projects.push(Project::default());
        projects.push(Project::default());
        let buckets = rollup_by_year(&projects);
        assert_eq!(buckets.len(), 2);
        assert_eq!(buckets[1].label, None);
        assert_eq!(buckets[1].count, 2);
    }

    #[test]
    fn pie_layout_puts_largest_bucket_first() {
        let buckets = rollup_by_year(&years(&["2021", "2020", "2020", "2020"]));
        let slices = pie_layout(&buckets);

        assert_eq!(slices[0].label, "2021");
        assert_close(slices[1].start_angle, 0.0);
        assert_close(slices[1].end_angle, TAU * 0.75);
        assert_close(slices[0].start_angle, TAU * 0.75);
        assert_close(slices[0].end_angle, TAU);
    }

    #[test]
    fn pie_layout_ties_keep_bucket_order() {
        let buckets = rollup_by_year(&years(&["2022", "2023"]));
        let slices = pie_layout(&buckets);
        assert_close(slices[0].start_angle, 0.0);
        assert_close(slices[1].start_angle, TAU / 2.0);
    }

    #[test]
    fn slice_at_follows_clockwise_angles() {
        let buckets = rollup_by_year(&years(&["2022", "2023"]));
        let slices = pie_layout(&buckets);

        // right half is the first slice, left half the second
        assert_eq!(slice_at(&slices, 10.0, 0.0, OUTER_RADIUS), Some(0));
        assert_eq!(slice_at(&slices, -10.0, -1.0, OUTER_RADIUS), Some(1));
        assert_eq!(slice_at(&slices, 0.0, 60.0, OUTER_RADIUS), None);
    }

    #[test]
    fn solid_pie_hits_at_its_center() {
        let buckets = rollup_by_year(&years(&["2022"]));
        let slices = pie_layout(&buckets);
        assert_close(INNER_RADIUS, 0.0);
        assert_eq!(slice_at(&slices, 0.0, 0.0, OUTER_RADIUS), Some(0));
        assert_eq!(slice_at(&slices, 0.0, OUTER_RADIUS, OUTER_RADIUS), Some(0));
    }

    #[test]
    fn numeric_and_text_years_share_a_bucket() {
        let projects: Vec<Project> =
            serde_json::from_str(r#"[{"year": 2020}, {"year": "2020"}, {"year": 2021}]"#).unwrap();
        let buckets = rollup_by_year(&projects);
        assert_eq!(buckets.len(), 2);
        assert_eq!(buckets[0].label.as_deref(), Some("2020"));
        assert_eq!(buckets[0].count, 2);
    }

    #[test]
    fn palette_cycles_after_ten_colors() {
        assert_eq!(palette_color(0), palette_color(10));
        assert_ne!(palette_color(0), palette_color(1));
    }

    #[test]
    fn draw_chart_pairs_slices_with_legend_entries() {
        let buckets = rollup_by_year(&years(&["2020", "2021", "2020"]));
        let mut model = ChartModel::default();
        draw_chart(&mut model, &buckets, Some(1));

        assert_eq!(model.slices.len(), 2);
        assert_eq!(model.legend.len(), 2);
        assert_eq!(model.legend[0].label, "2020");
        assert_eq!(model.legend[0].count, 2);
        assert_eq!(model.legend[1].color, model.slices[1].1);
        assert!(model.is_selected(1));
        assert!(!model.is_selected(0));
    }

    #[test]
    fn redraw_clears_previous_entries() {
        let mut model = ChartModel::default();
        draw_chart(&mut model, &rollup_by_year(&years(&["1", "2", "3"])), None);
        draw_chart(&mut model, &rollup_by_year(&years(&["1"])), None);
        assert_eq!(model.slices.len(), 1);
        assert_eq!(model.legend.len(), 1);
    }

    #[test]
    fn sampled_points_split_by_slice_share() {
        let mut model = ChartModel::default();
        draw_chart(&mut model, &rollup_by_year(&years(&["2020", "2021"])), None);
        let points = model.sample_points(20);

        assert_eq!(points.len(), 2);
        assert!(points[0].iter().all(|(dx, _)| *dx >= 0.0));
        assert!(points[1].iter().all(|(dx, _)| *dx <= 0.0));
        assert!(points
            .iter()
            .flatten()
            .all(|(dx, dy)| dx.hypot(*dy) <= OUTER_RADIUS));
    }
}
