// Presentation layer - Static dashboard page
pub mod dashboard_page;
