use axum::{routing::post, Router};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};

pub mod error;
pub mod handlers;
pub mod state;

pub use error::ApiError;
pub use state::AppState;

pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::permissive();
    let index = ServeFile::new(state.frontend_dir.join("index.html"));
    let assets = ServeDir::new(state.frontend_dir.clone());

    Router::new()
        .route("/recommend", post(handlers::recommend))
        .route_service("/", index)
        .nest_service("/static", assets)
        .layer(cors)
        .with_state(Arc::new(state))
}

pub mod prelude {
    pub use crate::AppState;
    pub use tn_core::{Article, Error, Result, ScoredArticle};
}
