//! Raster chart rendering with [`plotters`].
//!
//! Every chart gets its own [`BitMapBackend`], which is presented (written to disk)
//! and dropped before the call returns. Charts never share a drawing surface.

use crate::application::chart_renderer::{ChartRenderer, RenderError};
use crate::domain::summary::{CategoryCount, Histogram, RatingBand, RatingRange};
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::f64::consts::{PI, TAU};
use std::path::Path;

const DEFAULT_SIZE: (u32, u32) = (1200, 900);
const FONT: &str = "sans-serif";

const TAB_BLUE: RGBColor = RGBColor(31, 119, 180);
const TAB_ORANGE: RGBColor = RGBColor(255, 127, 14);
const TAB_GREEN: RGBColor = RGBColor(44, 160, 44);
const LIGHT_GRAY: RGBColor = RGBColor(211, 211, 211);
const SPINE_GRAY: RGBColor = RGBColor(128, 128, 128);

const RING_COLORS: [RGBColor; 3] = [TAB_BLUE, TAB_ORANGE, TAB_GREEN];
/// Ring thickness as a fraction of the outer radius
const RING_WIDTH: f64 = 0.35;
const ARC_STEP: f64 = PI / 180.0;

#[derive(Debug, Clone, Copy)]
pub struct PlottersRenderer {
    size: (u32, u32),
}

impl PlottersRenderer {
    pub fn new(size: (u32, u32)) -> Self {
        Self { size }
    }
}

impl Default for PlottersRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_SIZE)
    }
}

impl ChartRenderer for PlottersRenderer {
    fn render_category_bars(
        &self,
        counts: &[CategoryCount],
        output_path: &Path,
    ) -> Result<(), RenderError> {
        let root = BitMapBackend::new(output_path, self.size).into_drawing_area();
        root.fill(&WHITE)
            .map_err(|e| RenderError::DrawingArea(e.to_string()))?;

        let labels: Vec<&str> = counts.iter().map(|c| c.category.as_str()).collect();
        let max_count = counts.iter().map(|c| c.count).max().unwrap_or(0);
        let x_end = labels.len().max(1) as f64 - 0.5;

        let mut chart = ChartBuilder::on(&root)
            .caption("Shipping per Warehouse", (FONT, 40))
            .margin(20)
            .x_label_area_size(60)
            .y_label_area_size(80)
            .build_cartesian_2d(-0.5f64..x_end, 0usize..count_axis_end(max_count))
            .map_err(|e| RenderError::ChartConfig(e.to_string()))?;

        chart
            .configure_mesh()
            .disable_mesh()
            .x_labels(labels.len().max(1))
            .x_label_formatter(&|x| category_label(&labels, *x))
            .x_desc("Warehouse block")
            .y_desc("Record Count")
            .label_style((FONT, 20))
            .draw()
            .map_err(|e| RenderError::Drawing(e.to_string()))?;

        chart
            .draw_series(counts.iter().enumerate().map(|(i, c)| {
                let x = i as f64;
                Rectangle::new([(x - 0.25, 0), (x + 0.25, c.count)], TAB_BLUE.filled())
            }))
            .map_err(|e| RenderError::Drawing(e.to_string()))?;

        root.present()
            .map_err(|e| RenderError::Drawing(e.to_string()))?;
        Ok(())
    }

    fn render_category_ring(
        &self,
        counts: &[CategoryCount],
        output_path: &Path,
    ) -> Result<(), RenderError> {
        let root = BitMapBackend::new(output_path, self.size).into_drawing_area();
        root.fill(&WHITE)
            .map_err(|e| RenderError::DrawingArea(e.to_string()))?;
        let area = root
            .titled("Mode of shipment", (FONT, 40))
            .map_err(|e| RenderError::DrawingArea(e.to_string()))?;

        let (width, height) = area.dim_in_pixel();
        let center = (width as f64 / 2.0, height as f64 / 2.0);
        let outer = width.min(height) as f64 * 0.38;
        let inner = outer * (1.0 - RING_WIDTH);

        for wedge in ring_wedges(counts) {
            let color = RING_COLORS[wedge.index % RING_COLORS.len()];
            let outline = wedge_outline(center, outer, inner, wedge.start, wedge.end);
            area.draw(&Polygon::new(outline, color.filled()))
                .map_err(|e| RenderError::Drawing(e.to_string()))?;

            let mid = (wedge.start + wedge.end) / 2.0;
            let side = if mid.cos() >= 0.0 { HPos::Left } else { HPos::Right };
            let style = TextStyle::from((FONT, 28).into_font()).pos(Pos::new(side, VPos::Center));
            area.draw(&Text::new(
                wedge.label.to_string(),
                polar(center, outer * 1.1, mid),
                style,
            ))
            .map_err(|e| RenderError::Drawing(e.to_string()))?;
        }

        root.present()
            .map_err(|e| RenderError::Drawing(e.to_string()))?;
        Ok(())
    }

    fn render_rating_ranges(
        &self,
        ranges: &[RatingRange],
        output_path: &Path,
    ) -> Result<(), RenderError> {
        if ranges.is_empty() {
            return Err(RenderError::EmptyData("customer rating ranges"));
        }

        let root = BitMapBackend::new(output_path, self.size).into_drawing_area();
        root.fill(&WHITE)
            .map_err(|e| RenderError::DrawingArea(e.to_string()))?;

        let labels: Vec<&str> = ranges.iter().map(|r| r.mode.as_str()).collect();
        let x_end = ranges.iter().map(|r| r.max).fold(1.0, f64::max) + 0.5;
        let y_end = labels.len() as f64 - 0.5;

        let mut chart = ChartBuilder::on(&root)
            .caption("Average Customer Rating", (FONT, 40))
            .margin(20)
            .x_label_area_size(60)
            .y_label_area_size(120)
            .build_cartesian_2d(0f64..x_end, -0.5f64..y_end)
            .map_err(|e| RenderError::ChartConfig(e.to_string()))?;

        chart
            .configure_mesh()
            .disable_mesh()
            .axis_style(SPINE_GRAY)
            .y_labels(labels.len())
            .y_label_formatter(&|y| category_label(&labels, *y))
            .label_style((FONT, 20))
            .draw()
            .map_err(|e| RenderError::Drawing(e.to_string()))?;

        // Wide translucent min..max bar underneath
        chart
            .draw_series(ranges.iter().enumerate().map(|(i, r)| {
                let y = i as f64;
                Rectangle::new(
                    [(r.min, y - 0.45), (r.max, y + 0.45)],
                    LIGHT_GRAY.mix(0.8).filled(),
                )
            }))
            .map_err(|e| RenderError::Drawing(e.to_string()))?;

        chart
            .draw_series(ranges.iter().enumerate().map(|(i, r)| {
                let y = i as f64;
                Rectangle::new(
                    [(r.min, y - 0.25), (r.mean, y + 0.25)],
                    band_color(r.band()).filled(),
                )
            }))
            .map_err(|e| RenderError::Drawing(e.to_string()))?;

        root.present()
            .map_err(|e| RenderError::Drawing(e.to_string()))?;
        Ok(())
    }

    fn render_histogram(
        &self,
        histogram: &Histogram,
        output_path: &Path,
    ) -> Result<(), RenderError> {
        if histogram.bins.is_empty() {
            return Err(RenderError::EmptyData("weight histogram"));
        }

        let root = BitMapBackend::new(output_path, self.size).into_drawing_area();
        root.fill(&WHITE)
            .map_err(|e| RenderError::DrawingArea(e.to_string()))?;

        let (lo, hi) = histogram.range();
        let mut chart = ChartBuilder::on(&root)
            .caption("Shipped Weight Distribution", (FONT, 40))
            .margin(20)
            .x_label_area_size(60)
            .y_label_area_size(80)
            .build_cartesian_2d(lo..hi, 0usize..count_axis_end(histogram.max_count()))
            .map_err(|e| RenderError::ChartConfig(e.to_string()))?;

        chart
            .configure_mesh()
            .disable_mesh()
            .x_label_formatter(&|x| format!("{:.0}", x))
            .y_desc("Frequency")
            .label_style((FONT, 20))
            .draw()
            .map_err(|e| RenderError::Drawing(e.to_string()))?;

        chart
            .draw_series(histogram.bins.iter().map(|b| {
                Rectangle::new([(b.start, 0), (b.end, b.count)], TAB_ORANGE.filled())
            }))
            .map_err(|e| RenderError::Drawing(e.to_string()))?;

        // White edges between adjacent bars
        chart
            .draw_series(histogram.bins.iter().map(|b| {
                Rectangle::new([(b.start, 0), (b.end, b.count)], WHITE.stroke_width(2))
            }))
            .map_err(|e| RenderError::Drawing(e.to_string()))?;

        root.present()
            .map_err(|e| RenderError::Drawing(e.to_string()))?;
        Ok(())
    }
}

fn band_color(band: RatingBand) -> RGBColor {
    match band {
        RatingBand::MeetsThreshold => TAB_GREEN,
        RatingBand::BelowThreshold => TAB_ORANGE,
    }
}

/// Upper end of a count axis, leaving ~5% headroom above the tallest bar.
fn count_axis_end(max_count: usize) -> usize {
    max_count + max_count / 20 + 1
}

/// Maps an axis position back to the category drawn there. Positions between
/// categories get no label.
fn category_label(labels: &[&str], position: f64) -> String {
    let index = position.round();
    if (position - index).abs() > 1e-6 || index < 0.0 {
        return String::new();
    }
    labels
        .get(index as usize)
        .map(|label| label.to_string())
        .unwrap_or_default()
}

#[derive(Debug, Clone, PartialEq)]
struct Wedge<'a> {
    index: usize,
    label: &'a str,
    start: f64,
    end: f64,
}

/// Splits the full circle into wedges proportional to each count, counter-clockwise
/// from 3 o'clock.
fn ring_wedges(counts: &[CategoryCount]) -> Vec<Wedge<'_>> {
    let total: usize = counts.iter().map(|c| c.count).sum();
    if total == 0 {
        return Vec::new();
    }

    let mut start = 0.0;
    counts
        .iter()
        .enumerate()
        .map(|(index, c)| {
            let end = start + TAU * c.count as f64 / total as f64;
            let wedge = Wedge {
                index,
                label: c.category.as_str(),
                start,
                end,
            };
            start = end;
            wedge
        })
        .collect()
}

/// Pixel position at `angle` radians on a circle. Screen y grows downwards.
fn polar(center: (f64, f64), radius: f64, angle: f64) -> (i32, i32) {
    (
        (center.0 + radius * angle.cos()).round() as i32,
        (center.1 - radius * angle.sin()).round() as i32,
    )
}

/// Closed outline of a ring segment: outer arc forwards, inner arc backwards.
fn wedge_outline(
    center: (f64, f64),
    outer: f64,
    inner: f64,
    start: f64,
    end: f64,
) -> Vec<(i32, i32)> {
    // Tolerance keeps whole-degree sweeps from gaining an extra step
    let steps = ((end - start) / ARC_STEP - 1e-9).ceil().max(1.0) as usize;
    let arc = move |radius: f64| {
        (0..=steps).map(move |i| {
            let angle = start + (end - start) * i as f64 / steps as f64;
            polar(center, radius, angle)
        })
    };

    let mut points: Vec<(i32, i32)> = arc(outer).collect();
    points.extend(arc(inner).rev());
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::summary::DEFAULT_HISTOGRAM_BINS;
    use std::fs;

    fn counts(pairs: &[(&str, usize)]) -> Vec<CategoryCount> {
        pairs
            .iter()
            .map(|(category, count)| CategoryCount::new(category.to_string(), *count))
            .collect()
    }

    #[test]
    fn test_category_label_only_on_integer_positions() {
        let labels = ["A", "B", "C"];
        assert_eq!(category_label(&labels, 0.0), "A");
        assert_eq!(category_label(&labels, 2.0), "C");
        assert_eq!(category_label(&labels, 0.5), "");
        assert_eq!(category_label(&labels, -1.0), "");
        assert_eq!(category_label(&labels, 3.0), "");
    }

    #[test]
    fn test_count_axis_end_leaves_headroom() {
        assert_eq!(count_axis_end(0), 1);
        assert_eq!(count_axis_end(2), 3);
        assert_eq!(count_axis_end(3666), 3850);
    }

    #[test]
    fn test_band_color() {
        assert_eq!(band_color(RatingBand::MeetsThreshold), TAB_GREEN);
        assert_eq!(band_color(RatingBand::BelowThreshold), TAB_ORANGE);
    }

    #[test]
    fn test_ring_wedges_even_split() {
        let counts = counts(&[("Flight", 1), ("Ship", 1)]);
        let wedges = ring_wedges(&counts);

        assert_eq!(wedges.len(), 2);
        assert_eq!(wedges[0].label, "Flight");
        assert_eq!((wedges[0].start, wedges[0].end), (0.0, PI));
        assert_eq!(wedges[1].label, "Ship");
        assert_eq!(wedges[1].start, PI);
        assert!((wedges[1].end - TAU).abs() < 1e-12);
    }

    #[test]
    fn test_ring_wedges_proportional_and_closed() {
        let counts = counts(&[("Ship", 7462), ("Flight", 1777), ("Road", 1760)]);
        let wedges = ring_wedges(&counts);

        let total = 7462.0 + 1777.0 + 1760.0;
        for (wedge, count) in wedges.iter().zip([7462.0, 1777.0, 1760.0]) {
            let sweep = wedge.end - wedge.start;
            assert!((sweep - TAU * count / total).abs() < 1e-9);
        }
        assert!((wedges[2].end - TAU).abs() < 1e-9);
    }

    #[test]
    fn test_ring_wedges_empty() {
        assert!(ring_wedges(&[]).is_empty());
        assert!(ring_wedges(&counts(&[("Ship", 0)])).is_empty());
    }

    #[test]
    fn test_wedge_outline_starts_on_outer_arc_and_ends_on_inner() {
        let outline = wedge_outline((100.0, 100.0), 50.0, 30.0, 0.0, PI / 2.0);

        assert_eq!(outline.first(), Some(&(150, 100)));
        assert_eq!(outline.last(), Some(&(130, 100)));
        // Quarter circle at one-degree steps: 91 points per arc
        assert_eq!(outline.len(), 182);
        assert!(outline.contains(&(100, 50)));
        assert!(outline.contains(&(100, 70)));
    }

    fn assert_non_empty(path: &Path) {
        assert!(fs::metadata(path).unwrap().len() > 0, "{}", path.display());
    }

    #[test]
    #[ignore = "Font rendering not available in test environment"]
    fn test_render_all_charts() {
        let temp = tempfile::tempdir().unwrap();
        let renderer = PlottersRenderer::new((640, 480));

        let warehouse = counts(&[("F", 3), ("A", 2), ("B", 1)]);
        let modes = counts(&[("Ship", 4), ("Flight", 1), ("Road", 1)]);
        let ranges = vec![
            RatingRange { mode: "Flight".to_string(), min: 1.0, max: 5.0, mean: 3.2 },
            RatingRange { mode: "Road".to_string(), min: 1.0, max: 5.0, mean: 2.4 },
        ];
        let histogram =
            Histogram::from_values([1200.0, 3400.0, 5100.0, 2200.0], DEFAULT_HISTOGRAM_BINS)
                .unwrap();

        let bars = temp.path().join("bars.png");
        let ring = temp.path().join("ring.png");
        let range_bars = temp.path().join("ranges.png");
        let hist = temp.path().join("hist.png");

        renderer.render_category_bars(&warehouse, &bars).unwrap();
        renderer.render_category_ring(&modes, &ring).unwrap();
        renderer.render_rating_ranges(&ranges, &range_bars).unwrap();
        renderer.render_histogram(&histogram, &hist).unwrap();

        for path in [&bars, &ring, &range_bars, &hist] {
            assert_non_empty(path);
        }

        // Rendering again replaces the file in place
        renderer.render_category_bars(&counts(&[("A", 1)]), &bars).unwrap();
        assert_non_empty(&bars);
        assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 4);
    }

    #[test]
    #[ignore = "Font rendering not available in test environment"]
    fn test_render_degenerate_inputs() {
        let temp = tempfile::tempdir().unwrap();
        let renderer = PlottersRenderer::new((640, 480));

        renderer
            .render_category_bars(&[], &temp.path().join("bars.png"))
            .unwrap();
        renderer
            .render_category_ring(&[], &temp.path().join("ring.png"))
            .unwrap();

        let single = vec![RatingRange { mode: "Ship".to_string(), min: 2.0, max: 2.0, mean: 2.0 }];
        renderer
            .render_rating_ranges(&single, &temp.path().join("ranges.png"))
            .unwrap();

        let histogram = Histogram::from_values([42.0], DEFAULT_HISTOGRAM_BINS).unwrap();
        renderer
            .render_histogram(&histogram, &temp.path().join("hist.png"))
            .unwrap();

        assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 4);
    }

    #[test]
    fn test_empty_ranges_rejected_before_drawing() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("ranges.png");

        let err = PlottersRenderer::default()
            .render_rating_ranges(&[], &path)
            .unwrap_err();

        assert!(matches!(err, RenderError::EmptyData(_)));
        assert!(!path.exists());
    }

    #[test]
    fn test_empty_histogram_rejected_before_drawing() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("hist.png");

        let err = PlottersRenderer::default()
            .render_histogram(&Histogram { bins: Vec::new() }, &path)
            .unwrap_err();

        assert!(matches!(err, RenderError::EmptyData(_)));
        assert!(!path.exists());
    }
}
