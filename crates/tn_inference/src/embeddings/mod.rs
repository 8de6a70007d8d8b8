use std::fmt;
use std::sync::Arc;

use tn_core::{EmbeddingModel, Error, Result};

/// Batch embedding front-end over whichever model the process loaded.
#[derive(Clone)]
pub struct Embedder {
    model: Arc<dyn EmbeddingModel>,
}

impl Embedder {
    pub fn new(model: Arc<dyn EmbeddingModel>) -> Self {
        Self { model }
    }

    pub fn model_name(&self) -> &str {
        self.model.name()
    }

    /// Embed a batch of texts, one vector per text.
    ///
    /// An empty batch is rejected up front rather than handed to the model;
    /// a model answering with the wrong number of vectors is an error.
    pub async fn embed_texts(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        if texts.is_empty() {
            return Err(Error::EmptyInput("nothing to embed".to_string()));
        }

        tracing::debug!("embedding {} texts with {}", texts.len(), self.model.name());
        let vectors = self.model.embed_batch(texts).await?;
        if vectors.len() != texts.len() {
            return Err(Error::Embedding(format!(
                "model returned {} vectors for {} texts",
                vectors.len(),
                texts.len()
            )));
        }
        Ok(vectors)
    }
}

impl fmt::Debug for Embedder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Embedder")
            .field("model", &self.model.name())
            .finish()
    }
}
