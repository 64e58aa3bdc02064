use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::{ConversionError, Result};
use crate::models::Objective;
use crate::utils::coordinates::parse_coordinate;

/// One CSV row: `name,latitude,longitude[,datum]`
#[derive(Debug, Deserialize)]
struct ObjectiveRow {
    name: String,
    latitude: String,
    longitude: String,
    #[serde(default)]
    datum: Option<String>,
}

pub struct ObjectiveReader {
    default_datum: String,
}

impl ObjectiveReader {
    pub fn new(default_datum: impl Into<String>) -> Self {
        Self {
            default_datum: default_datum.into(),
        }
    }

    /// Read objectives from a CSV file with a `name,latitude,longitude,datum` header.
    ///
    /// Angles may be `DD:MM:SS` or decimal degrees; `#` starts a comment line and
    /// an empty datum falls back to the reader's default.
    pub fn read_objectives(&self, path: &Path) -> Result<Vec<Objective>> {
        let file = File::open(path)?;
        let objectives = self.read_from(file)?;
        debug!(path = %path.display(), count = objectives.len(), "read objectives");
        Ok(objectives)
    }

    pub fn read_from<R: Read>(&self, reader: R) -> Result<Vec<Objective>> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .comment(Some(b'#'))
            .from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        let mut objectives = Vec::new();
        for record in csv_reader.records() {
            let record = record?;
            let line = record.position().map_or(0, |p| p.line());
            let row: ObjectiveRow = record.deserialize(Some(&headers))?;
            objectives.push(self.parse_row(row, line)?);
        }

        Ok(objectives)
    }

    fn parse_row(&self, row: ObjectiveRow, line: u64) -> Result<Objective> {
        let latitude = parse_coordinate(&row.latitude).map_err(|e| {
            ConversionError::InvalidCoordinate(format!("line {}: latitude: {}", line, e))
        })?;
        let longitude = parse_coordinate(&row.longitude).map_err(|e| {
            ConversionError::InvalidCoordinate(format!("line {}: longitude: {}", line, e))
        })?;
        let datum = row
            .datum
            .filter(|d| !d.is_empty())
            .unwrap_or_else(|| self.default_datum.clone())
            .to_lowercase();

        Ok(Objective::new(row.name, latitude, longitude, datum))
    }
}
