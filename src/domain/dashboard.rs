// Dashboard domain model
use std::path::{Path, PathBuf};

pub const DASHBOARD_TITLE: &str = "Shipping Dashboard Example";
pub const DASHBOARD_FILE_NAME: &str = "index.html";

/// The four charts the dashboard is built from. Each one always writes the same file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartArtifact {
    ShippingPerWarehouse,
    ModeOfShipment,
    AverageCustomerRating,
    WeightDistribution,
}

impl ChartArtifact {
    pub const ALL: [ChartArtifact; 4] = [
        ChartArtifact::ShippingPerWarehouse,
        ChartArtifact::ModeOfShipment,
        ChartArtifact::AverageCustomerRating,
        ChartArtifact::WeightDistribution,
    ];

    pub fn file_name(self) -> &'static str {
        match self {
            ChartArtifact::ShippingPerWarehouse => "shipping_per_warehouse.png",
            ChartArtifact::ModeOfShipment => "mode_of_shipment.png",
            ChartArtifact::AverageCustomerRating => "average_customer_rating.png",
            ChartArtifact::WeightDistribution => "weight_distribution.png",
        }
    }

    pub fn alt_text(self) -> &'static str {
        match self {
            ChartArtifact::ShippingPerWarehouse => "Shipping per Warehouse",
            ChartArtifact::ModeOfShipment => "Mode of Shipment",
            ChartArtifact::AverageCustomerRating => "Customer Rating",
            ChartArtifact::WeightDistribution => "Weight Distribution",
        }
    }

    pub fn path_in(self, output_dir: &Path) -> PathBuf {
        output_dir.join(self.file_name())
    }
}

/// Static two-column layout of the dashboard page.
#[derive(Debug, Clone)]
pub struct Dashboard {
    pub title: String,
    pub left_column: Vec<ChartArtifact>,
    pub right_column: Vec<ChartArtifact>,
}

impl Dashboard {
    pub fn new(
        title: String,
        left_column: Vec<ChartArtifact>,
        right_column: Vec<ChartArtifact>,
    ) -> Self {
        Self {
            title,
            left_column,
            right_column,
        }
    }

    pub fn shipping() -> Self {
        Self::new(
            DASHBOARD_TITLE.to_string(),
            vec![
                ChartArtifact::ShippingPerWarehouse,
                ChartArtifact::ModeOfShipment,
            ],
            vec![
                ChartArtifact::AverageCustomerRating,
                ChartArtifact::WeightDistribution,
            ],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_file_names_are_distinct_pngs() {
        let names: HashSet<&str> = ChartArtifact::ALL.iter().map(|a| a.file_name()).collect();
        assert_eq!(names.len(), 4);
        assert!(names.iter().all(|n| n.ends_with(".png")));
    }

    #[test]
    fn test_shipping_layout_covers_every_chart_once() {
        let dashboard = Dashboard::shipping();
        let charts: Vec<ChartArtifact> = dashboard
            .left_column
            .iter()
            .chain(dashboard.right_column.iter())
            .copied()
            .collect();
        assert_eq!(charts, ChartArtifact::ALL.to_vec());
        assert_eq!(dashboard.left_column.len(), 2);
        assert_eq!(dashboard.right_column.len(), 2);
    }

    #[test]
    fn test_path_in() {
        let path = ChartArtifact::WeightDistribution.path_in(Path::new("docs"));
        assert_eq!(path, Path::new("docs").join("weight_distribution.png"));
    }
}
