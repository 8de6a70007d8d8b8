use serde::{Deserialize, Serialize};

/// A news article as returned by the provider. Only the fields the ranking
/// pipeline and the response need are kept; everything lives for one request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub description: String,
    pub url: String,
}

impl Article {
    /// The text that gets embedded for this article.
    pub fn embedding_text(&self) -> String {
        format!("{} {}", self.title, self.description)
    }
}

/// An article paired with its cosine similarity to the user's interest
/// vector. Serializes flat as `{title, description, url, score}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredArticle {
    #[serde(flatten)]
    pub article: Article,
    pub score: f32,
}
