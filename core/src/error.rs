use thiserror::Error;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("Catalog has no movies")]
    EmptyCatalog,
    #[error("Movie #{index} has an empty title")]
    EmptyTitle { index: usize },
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(#[from] serde_json::Error),
}

pub type Result<T> = core::result::Result<T, GameError>;
