// Application layer - Pipeline use case and the seams it depends on
pub mod chart_renderer;
pub mod dashboard_service;
pub mod shipment_source;
