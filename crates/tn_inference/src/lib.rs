pub mod embeddings;
pub mod models;
pub mod ranking;

pub use embeddings::Embedder;
pub use models::{DummyModel, MiniLmModel};

pub mod prelude {
    pub use super::Embedder;
    pub use tn_core::{Article, EmbeddingModel, Error, Result, ScoredArticle};
}
