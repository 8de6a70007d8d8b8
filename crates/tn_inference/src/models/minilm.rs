use std::fmt;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use fastembed::{EmbeddingModel as FastembedModel, InitOptions, TextEmbedding};
use tn_core::{EmbeddingModel, Error, Result};

const MODEL_NAME: &str = "all-MiniLM-L6-v2";
const DIMENSIONS: usize = 384;

/// Sentence embedding model backed by the fastembed ONNX runtime.
///
/// Loaded once at process start and shared read-only across requests.
pub struct MiniLmModel {
    model: Arc<Mutex<TextEmbedding>>,
}

impl MiniLmModel {
    /// Load the pretrained model. Failure here aborts startup.
    pub fn load() -> Result<Self> {
        let options =
            InitOptions::new(FastembedModel::AllMiniLML6V2).with_show_download_progress(false);
        let model = TextEmbedding::try_new(options)
            .map_err(|e| Error::Embedding(format!("failed to load {}: {}", MODEL_NAME, e)))?;
        Ok(Self {
            model: Arc::new(Mutex::new(model)),
        })
    }
}

impl fmt::Debug for MiniLmModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MiniLmModel")
            .field("model", &MODEL_NAME)
            .finish()
    }
}

#[async_trait]
impl EmbeddingModel for MiniLmModel {
    fn name(&self) -> &str {
        MODEL_NAME
    }

    fn dimensions(&self) -> usize {
        DIMENSIONS
    }

    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        let model = Arc::clone(&self.model);
        let texts = texts.to_vec();
        // ONNX inference is CPU-bound; keep it off the async workers
        tokio::task::spawn_blocking(move || {
            let mut model = model
                .lock()
                .map_err(|e| Error::Embedding(format!("model lock poisoned: {}", e)))?;
            model
                .embed(texts, None)
                .map_err(|e| Error::Embedding(format!("inference failed: {}", e)))
        })
        .await
        .map_err(|e| Error::Embedding(format!("embedding task failed: {}", e)))?
    }
}
