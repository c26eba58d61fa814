// Source trait for shipment data access
use crate::domain::shipment::ShipmentTable;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading the shipment table
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Input file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read input file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse input file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

pub trait ShipmentSource {
    /// Load every shipment record, in file order
    fn load(&self) -> Result<ShipmentTable, LoadError>;
}
