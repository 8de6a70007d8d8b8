use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid upload: {0}")]
    Validation(String),

    #[error("no usable input: {0}")]
    EmptyInput(String),

    #[error("news provider error: {0}")]
    ExternalService(String),

    #[error("degenerate vector: {0}")]
    DegenerateVector(String),

    #[error("embedding error: {0}")]
    Embedding(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
