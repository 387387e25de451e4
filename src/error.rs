#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("No river found matching name {0:?}")]
    RiverNotFound(String),

    #[error("River {0:?} has no geometry from which a mouth can be found")]
    NoMouth(String),

    #[error("Malformed coordinate: {0}")]
    MalformedCoordinate(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
