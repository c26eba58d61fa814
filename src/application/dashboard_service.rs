// Dashboard service - Use case for building the static shipping dashboard
use crate::application::chart_renderer::{ChartRenderer, RenderError};
use crate::application::shipment_source::{LoadError, ShipmentSource};
use crate::domain::dashboard::{ChartArtifact, DASHBOARD_FILE_NAME, Dashboard};
use crate::domain::shipment::ShipmentTable;
use crate::domain::summary::{DEFAULT_HISTOGRAM_BINS, Histogram, frequency_counts, rating_ranges};
use crate::infrastructure::output_directory::{OutputError, ensure_output_directory, write_document};
use crate::presentation::dashboard_page::render_dashboard_page;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

/// Errors that can abort a dashboard run
#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("Loading error: {0}")]
    Load(#[from] LoadError),

    #[error("Output error: {0}")]
    Output(#[from] OutputError),

    #[error("Rendering error in {chart}: {source}")]
    Render {
        chart: &'static str,
        #[source]
        source: RenderError,
    },
}

/// Files written by a successful run.
#[derive(Debug, Clone)]
pub struct PublishedDashboard {
    pub rows: usize,
    pub charts: Vec<PathBuf>,
    pub document: PathBuf,
}

#[derive(Clone)]
pub struct DashboardService {
    source: Arc<dyn ShipmentSource>,
    renderer: Arc<dyn ChartRenderer>,
    output_dir: PathBuf,
}

impl DashboardService {
    pub fn new(
        source: Arc<dyn ShipmentSource>,
        renderer: Arc<dyn ChartRenderer>,
        output_dir: PathBuf,
    ) -> Self {
        Self {
            source,
            renderer,
            output_dir,
        }
    }

    /// Runs the whole pipeline. The first failure aborts the run and
    /// leaves whatever was already written in place.
    pub fn build_dashboard(&self) -> Result<PublishedDashboard, DashboardError> {
        ensure_output_directory(&self.output_dir)?;

        let table = self.source.load()?;
        if table.is_empty() {
            tracing::warn!("Input contains no shipment records");
        }
        tracing::info!("Loaded {} shipment records", table.len());

        let mut charts = Vec::with_capacity(ChartArtifact::ALL.len());
        for artifact in ChartArtifact::ALL {
            let path = artifact.path_in(&self.output_dir);
            self.render_chart(artifact, &table, &path)
                .map_err(|source| DashboardError::Render {
                    chart: artifact.file_name(),
                    source,
                })?;
            tracing::info!("Wrote {}", path.display());
            charts.push(path);
        }

        let dashboard = Dashboard::shipping();
        let document = self.output_dir.join(DASHBOARD_FILE_NAME);
        write_document(&document, &render_dashboard_page(&dashboard))?;
        tracing::info!("Wrote {}", document.display());

        Ok(PublishedDashboard {
            rows: table.len(),
            charts,
            document,
        })
    }

    fn render_chart(
        &self,
        artifact: ChartArtifact,
        table: &ShipmentTable,
        path: &std::path::Path,
    ) -> Result<(), RenderError> {
        match artifact {
            ChartArtifact::ShippingPerWarehouse => {
                let counts = frequency_counts(table.warehouse_blocks());
                tracing::debug!("Warehouse block counts: {:?}", counts);
                self.renderer.render_category_bars(&counts, path)
            }
            ChartArtifact::ModeOfShipment => {
                let counts = frequency_counts(table.shipment_modes());
                tracing::debug!("Shipment mode counts: {:?}", counts);
                self.renderer.render_category_ring(&counts, path)
            }
            ChartArtifact::AverageCustomerRating => {
                let ranges = rating_ranges(table);
                if ranges.is_empty() {
                    return Err(RenderError::EmptyData(artifact.file_name()));
                }
                tracing::debug!("Customer rating ranges: {:?}", ranges);
                self.renderer.render_rating_ranges(&ranges, path)
            }
            ChartArtifact::WeightDistribution => {
                let histogram = Histogram::from_values(table.weights(), DEFAULT_HISTOGRAM_BINS)
                    .ok_or(RenderError::EmptyData(artifact.file_name()))?;
                tracing::debug!(
                    "Weight histogram: {} values over {:?}",
                    histogram.total(),
                    histogram.range()
                );
                self.renderer.render_histogram(&histogram, path)
            }
        }
    }
}
