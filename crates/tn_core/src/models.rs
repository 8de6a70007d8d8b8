use async_trait::async_trait;

use crate::Result;

#[async_trait]
pub trait EmbeddingModel: Send + Sync {
    /// Human-readable model name, used in logs
    fn name(&self) -> &str;

    /// Dimension of the vectors this model produces
    fn dimensions(&self) -> usize;

    /// Embed a batch of texts, one vector per input text
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>>;
}
