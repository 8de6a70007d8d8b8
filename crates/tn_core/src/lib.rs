pub mod error;
pub mod models;
pub mod types;

pub use error::Error;
pub use models::EmbeddingModel;
pub use types::{Article, ScoredArticle};

pub type Result<T> = std::result::Result<T, Error>;
