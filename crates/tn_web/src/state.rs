use std::path::PathBuf;

use tn_inference::Embedder;
use tn_news::NewsClient;

pub struct AppState {
    pub embedder: Embedder,
    pub news: NewsClient,
    pub frontend_dir: PathBuf,
}
