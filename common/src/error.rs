use thiserror::Error;

/// Failure to reach a usable Bluetooth adapter.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("no Bluetooth adapter found")]
    NoAdapter,
}

/// Failure while assembling the rendered report.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReportError {
    /// A row was handed to the table with the wrong number of cells.
    #[error("malformed row: expected {expected} cells, found {found}")]
    MalformedRow { expected: usize, found: usize },
}
