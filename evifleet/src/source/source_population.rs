use super::{SourcePopulationError, SourceRecord};
use flate2::read::GzDecoder;
use itertools::Itertools;
use kdam::tqdm;
use std::{
    fs::File,
    io::{BufReader, Read},
};

/// the pool of simulated vehicle charging records a fleet is drawn from. fully
/// materialized in memory and never modified by fleet generation.
#[derive(Clone, Debug, Default)]
pub struct SourcePopulation {
    records: Vec<SourceRecord>,
}

impl SourcePopulation {
    pub fn new(records: Vec<SourceRecord>) -> SourcePopulation {
        SourcePopulation { records }
    }

    /// reads a preprocessed source population from a CSV file, which may be gzipped.
    /// see [`SourceRecord`] for the expected columns.
    pub fn from_csv(filename: &str) -> Result<SourcePopulation, SourcePopulationError> {
        let file = File::open(filename).map_err(|e| SourcePopulationError::FileReadError {
            filename: filename.to_string(),
            source: e,
        })?;
        let r: Box<dyn Read> = if filename.ends_with(".gz") {
            Box::new(BufReader::new(GzDecoder::new(file)))
        } else {
            Box::new(BufReader::new(file))
        };
        let mut reader = csv::ReaderBuilder::new().has_headers(true).from_reader(r);
        let headers = reader
            .headers()
            .map_err(|e| SourcePopulationError::CsvReadError {
                filename: filename.to_string(),
                row: 0,
                source: e,
            })?
            .clone();
        for column in SourceRecord::REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == column) {
                return Err(SourcePopulationError::MissingColumn {
                    filename: filename.to_string(),
                    column: column.to_string(),
                });
            }
        }

        let row_iter = tqdm!(
            reader.into_deserialize::<SourceRecord>().enumerate(),
            desc = format!("read {filename}")
        );
        let records = row_iter
            .map(|(idx, row)| {
                row.map_err(|e| SourcePopulationError::CsvReadError {
                    filename: filename.to_string(),
                    row: idx + 1,
                    source: e,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        eprintln!();

        if records.is_empty() {
            return Err(SourcePopulationError::EmptySource(filename.to_string()));
        }
        let population = SourcePopulation::new(records);
        log::info!(
            "read {} source sessions covering {} vehicles in {} strata from {}",
            population.len(),
            population.n_vehicles(),
            population.n_strata(),
            filename
        );
        Ok(population)
    }

    pub fn records(&self) -> &[SourceRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// number of distinct (stratum, vehicle) pairs in the pool
    pub fn n_vehicles(&self) -> usize {
        self.records
            .iter()
            .map(|r| (r.stratum(), r.source_vehicle_id))
            .unique()
            .count()
    }

    pub fn n_strata(&self) -> usize {
        self.records.iter().map(|r| r.stratum()).unique().count()
    }
}
