use thiserror::Error;

#[derive(Debug, Error)]
pub enum StatsError {
    #[error("missing field: {0}")]
    MissingField(String),

    #[error("invalid number in {field}: {value:?}")]
    InvalidNumber { field: String, value: String },

    #[error("record {line} has {len} fields, expected at least {expected}")]
    ShortRecord {
        line: usize,
        len: usize,
        expected: usize,
    },

    #[error("no records in input")]
    EmptyInput,

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StatsError>;
