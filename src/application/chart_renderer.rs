// Renderer trait - one raster image per chart
use crate::domain::summary::{CategoryCount, Histogram, RatingRange};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during chart rendering
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("No data to render for chart '{0}'")]
    EmptyData(&'static str),

    #[error("Failed to create drawing area: {0}")]
    DrawingArea(String),

    #[error("Failed to configure chart: {0}")]
    ChartConfig(String),

    #[error("Failed to draw chart elements: {0}")]
    Drawing(String),

    #[error("Failed to save chart to file: {0}")]
    FileSave(#[from] std::io::Error),
}

/// Draws precomputed summaries to image files.
///
/// Every call acquires its own drawing surface and has flushed it to `output_path`
/// by the time it returns, so charts never share rendering state.
pub trait ChartRenderer {
    /// Vertical bars, one per category, in the given order.
    fn render_category_bars(
        &self,
        counts: &[CategoryCount],
        output_path: &Path,
    ) -> Result<(), RenderError>;

    /// Ring chart with one wedge per category, proportional to its count.
    fn render_category_ring(
        &self,
        counts: &[CategoryCount],
        output_path: &Path,
    ) -> Result<(), RenderError>;

    /// Horizontal min-to-max bars overlaid with min-to-mean bars.
    fn render_rating_ranges(
        &self,
        ranges: &[RatingRange],
        output_path: &Path,
    ) -> Result<(), RenderError>;

    fn render_histogram(&self, histogram: &Histogram, output_path: &Path)
    -> Result<(), RenderError>;
}
