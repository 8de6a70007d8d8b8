use std::sync::Arc;

use tn_core::Result;
use tn_inference::{Embedder, MiniLmModel};
use tn_news::NewsClient;
use tn_web::{create_app, AppState};
use tracing::info;

const DEFAULT_ADDR: &str = "0.0.0.0:8000";
const DEFAULT_FRONTEND_DIR: &str = "frontend";

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    // Model load is the only fatal startup step; a failure aborts here.
    let model = MiniLmModel::load()?;
    let embedder = Embedder::new(Arc::new(model));
    info!("🧠 Embedding model ready ({})", embedder.model_name());

    let news = NewsClient::new()?;
    let frontend_dir = std::env::var("TN_FRONTEND_DIR")
        .unwrap_or_else(|_| DEFAULT_FRONTEND_DIR.to_string());
    let state = AppState {
        embedder,
        news,
        frontend_dir: frontend_dir.into(),
    };
    let app = create_app(state);

    let addr = std::env::var("TN_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("📰 tagnews listening on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
