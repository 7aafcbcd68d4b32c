#[derive(thiserror::Error, Debug)]
pub enum SourcePopulationError {
    #[error("failure opening source population file {filename}: {source}")]
    FileReadError {
        filename: String,
        source: std::io::Error,
    },
    #[error("failure reading row {row} of {filename}: {source}")]
    CsvReadError {
        filename: String,
        row: usize,
        source: csv::Error,
    },
    #[error("source population file {filename} is missing required column '{column}'")]
    MissingColumn { filename: String, column: String },
    #[error("source population file {0} has no records")]
    EmptySource(String),
}
