// CSV shipment source implementation
use crate::application::shipment_source::{LoadError, ShipmentSource};
use crate::domain::shipment::{ShipmentRecord, ShipmentTable};
use std::fs::File;
use std::io::{BufReader, ErrorKind};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct CsvShipmentSource {
    path: PathBuf,
}

impl CsvShipmentSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ShipmentSource for CsvShipmentSource {
    fn load(&self) -> Result<ShipmentTable, LoadError> {
        let file = File::open(&self.path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => LoadError::NotFound(self.path.clone()),
            _ => LoadError::Io {
                path: self.path.clone(),
                source,
            },
        })?;

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(BufReader::new(file));

        let records = reader
            .deserialize::<ShipmentRecord>()
            .collect::<Result<Vec<_>, _>>()
            .map_err(|source| LoadError::Parse {
                path: self.path.clone(),
                source,
            })?;

        tracing::debug!("Parsed {} rows from {}", records.len(), self.path.display());
        Ok(ShipmentTable::new(records))
    }
}
