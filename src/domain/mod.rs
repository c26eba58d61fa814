// Domain layer - Records, summaries and dashboard artifacts
pub mod dashboard;
pub mod shipment;
pub mod summary;
