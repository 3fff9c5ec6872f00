use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("invalid matrix shape: {0}")]
    InvalidMatrixShape(String),
    #[error("invalid distance at row {row}, column {col}: {value}")]
    InvalidDistanceValue { row: usize, col: usize, value: f64 },
    #[error("too many locations: {n} exceeds the configured limit of {max}")]
    TooManyLocations { n: usize, max: usize },
    #[error("failed to allocate DP table with {entries} entries")]
    TableAllocation { entries: usize },
    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    pub fn invalid_shape(message: impl Into<String>) -> Self {
        Self::InvalidMatrixShape(message.into())
    }

    pub fn other(message: impl Into<String>) -> Self {
        Self::Other(message.into())
    }
}
