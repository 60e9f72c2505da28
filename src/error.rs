use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    /// CSV-level ingestion failure. Fatal to all chart construction.
    #[error("ingestion failed: {0}")]
    Ingest(String),

    /// A field was missing or non-numeric after separator stripping.
    ///
    /// Raised batch-level before any chart runs; records are never silently
    /// coerced to zero or NaN.
    #[error("row {line}: field `{field}` is not numeric: `{value}`")]
    Schema {
        line: usize,
        field: &'static str,
        value: String,
    },

    /// Scale or aggregate construction over zero records.
    #[error("empty dataset: cannot derive a domain")]
    EmptyDataset,

    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
