use thiserror::Error;

/// A raw row that cannot become a [`crate::domain::Business`]. Ingestion stops
/// at the first one rather than inventing a value.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NormalizeError {
    #[error("record {record_id}: {field} is not a valid timestamp: {value:?}")]
    InvalidTimestamp {
        record_id: String,
        field: &'static str,
        value: String,
    },
}

/// Caller passed something the query layer does not recognise.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ArgumentError {
    #[error("unknown tax kind {0:?}, expected \"parking\" or \"transientOccupancy\"")]
    UnknownTaxKind(String),
    #[error("unknown neighborhood {0:?}")]
    UnknownNeighborhood(String),
    #[error("invalid value for {name}: {value:?}")]
    InvalidParameter { name: &'static str, value: String },
}
