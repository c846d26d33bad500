use thiserror::Error;

pub type Result<T> = std::result::Result<T, SearchError>;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("dequeue called on an empty priority queue")]
    EmptyQueue,

    #[error("city {city} is outside a matrix of {size} cities")]
    CityOutOfRange { city: usize, size: usize },

    #[error("row {row} has {len} entries, expected {size}")]
    NotSquare { row: usize, len: usize, size: usize },

    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error("could not read configuration: {0}")]
    Io(#[from] std::io::Error),
}
