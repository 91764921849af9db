/// Error types for Thermogrid loading
use thiserror::Error;

/// Load-level failures. Individual bad rows never produce one of these;
/// they are filtered out by the row parser.
#[derive(Error, Debug)]
pub enum TgError {
    /// Reading the data source failed
    #[error("Failed to read data source: {0}")]
    Io(#[from] std::io::Error),

    /// The data source could not be fetched over the network
    #[error("Failed to fetch data source: {0}")]
    Fetch(String),

    /// The CSV stream itself is malformed
    #[error("Failed to parse CSV: {0}")]
    CsvParse(#[from] csv::Error),

    /// Failed to decompress data
    #[error("Failed to decompress data: {0}")]
    Decompression(String),

    /// A required header is absent from the CSV
    #[error("Missing required column: {0}")]
    MissingColumn(&'static str),

    /// The source yielded no usable daily records
    #[error("No usable temperature records in data source")]
    EmptyDataset,

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Type alias for Results using TgError
pub type Result<T> = std::result::Result<T, TgError>;
