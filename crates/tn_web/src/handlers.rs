use axum::extract::{Multipart, State};
use axum::Json;
use std::sync::Arc;
use tn_core::{Article, Error, ScoredArticle};
use tn_ingest::{build_query, extract_hashtags};
use tn_inference::ranking;
use tracing::debug;

use crate::{ApiError, AppState};

/// Run the whole recommendation pipeline for one upload:
/// extract hashtags, embed them into an interest vector, fetch news for the
/// cleaned tags, embed the articles, rank by cosine similarity.
pub async fn recommend(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<Json<Vec<ScoredArticle>>, ApiError> {
    let upload = read_upload(multipart).await?;

    let hashtags = extract_hashtags(&upload.file)?;
    debug!("ranking news against {} hashtags", hashtags.len());

    let hashtag_vectors = state.embedder.embed_texts(&hashtags).await?;
    let interest = ranking::interest_vector(&hashtag_vectors)?;

    let query = build_query(&hashtags);
    let articles = state.news.fetch(&upload.api_key, query.as_deref()).await?;

    let texts: Vec<String> = articles.iter().map(Article::embedding_text).collect();
    let article_vectors = state.embedder.embed_texts(&texts).await?;

    let ranked = ranking::rank_articles(&interest, articles, &article_vectors)?;
    debug!("returning {} ranked articles", ranked.len());
    Ok(Json(ranked))
}

struct Upload {
    file: Vec<u8>,
    api_key: String,
}

/// Pull the `file` and `news_api_key` parts out of the multipart form.
async fn read_upload(mut multipart: Multipart) -> Result<Upload, ApiError> {
    let mut file = None;
    let mut api_key = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| Error::Validation(format!("malformed multipart body: {}", e)))?
    {
        match field.name() {
            Some("file") => {
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| Error::Validation(format!("unreadable `file` field: {}", e)))?;
                file = Some(bytes.to_vec());
            }
            Some("news_api_key") => {
                let text = field.text().await.map_err(|e| {
                    Error::Validation(format!("unreadable `news_api_key` field: {}", e))
                })?;
                api_key = Some(text);
            }
            _ => {}
        }
    }

    let file = file.ok_or_else(|| Error::Validation("missing `file` field".to_string()))?;
    let api_key =
        api_key.ok_or_else(|| Error::Validation("missing `news_api_key` field".to_string()))?;
    Ok(Upload { file, api_key })
}
