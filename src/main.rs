// Main entry point - Configuration, dependency wiring and the single report run
mod application;
mod domain;
mod infrastructure;
mod presentation;

use anyhow::Context;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use crate::application::dashboard_service::DashboardService;
use crate::infrastructure::config::load_dashboard_config;
use crate::infrastructure::csv_source::CsvShipmentSource;
use crate::infrastructure::plotters_renderer::PlottersRenderer;

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = load_dashboard_config().context("Failed to load dashboard configuration")?;
    tracing::debug!("Using configuration: {:?}", config);

    // Wire the pipeline
    let source = Arc::new(CsvShipmentSource::new(config.input_path.clone()));
    let renderer = Arc::new(PlottersRenderer::default());
    let service = DashboardService::new(source, renderer, config.output_dir.clone());

    let published = service.build_dashboard().with_context(|| {
        format!(
            "Failed to build shipping dashboard from {}",
            config.input_path.display()
        )
    })?;

    tracing::info!(
        "Dashboard ready: {} ({} charts from {} records)",
        published.document.display(),
        published.charts.len(),
        published.rows
    );

    Ok(())
}
