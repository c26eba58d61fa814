// Shipment domain models
use serde::Deserialize;

/// One row of the shipping dataset. Columns not named here are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ShipmentRecord {
    #[serde(rename = "Warehouse_block")]
    pub warehouse_block: String,
    #[serde(rename = "Mode_of_Shipment")]
    pub mode_of_shipment: String,
    #[serde(rename = "Customer_rating")]
    pub customer_rating: i64,
    #[serde(rename = "Weight_in_gms")]
    pub weight_in_gms: f64,
}

impl ShipmentRecord {
    pub fn new(
        warehouse_block: impl Into<String>,
        mode_of_shipment: impl Into<String>,
        customer_rating: i64,
        weight_in_gms: f64,
    ) -> Self {
        Self {
            warehouse_block: warehouse_block.into(),
            mode_of_shipment: mode_of_shipment.into(),
            customer_rating,
            weight_in_gms,
        }
    }
}

/// Read-only table of shipment records in file order.
#[derive(Debug, Clone, Default)]
pub struct ShipmentTable {
    records: Vec<ShipmentRecord>,
}

impl ShipmentTable {
    pub fn new(records: Vec<ShipmentRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[ShipmentRecord] {
        &self.records
    }

    pub fn warehouse_blocks(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.warehouse_block.as_str())
    }

    pub fn shipment_modes(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.mode_of_shipment.as_str())
    }

    pub fn weights(&self) -> impl Iterator<Item = f64> + '_ {
        self.records.iter().map(|r| r.weight_in_gms)
    }
}
