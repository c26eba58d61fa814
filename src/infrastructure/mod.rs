// Infrastructure layer - Files, configuration and the plotting backend
pub mod config;
pub mod csv_source;
pub mod output_directory;
pub mod plotters_renderer;
