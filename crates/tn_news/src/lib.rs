use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use tn_core::{Article, Error, Result};
use url::Url;

const NEWSAPI_BASE_URL: &str = "https://newsapi.org";

/// Upper bound on articles requested per call; NewsAPI caps pageSize at 100.
const PAGE_SIZE: u32 = 100;

/// Bound on the upstream call so a slow provider cannot hang the handler.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// NewsAPI response envelope.
#[derive(Debug, Deserialize)]
struct NewsResponse {
    #[serde(default)]
    articles: Vec<RawArticle>,
}

#[derive(Debug, Deserialize)]
struct RawArticle {
    title: Option<String>,
    description: Option<String>,
    url: Option<String>,
}

impl RawArticle {
    /// Articles without a title or description carry nothing to embed.
    fn into_article(self) -> Option<Article> {
        match (self.title, self.description) {
            (Some(title), Some(description)) => Some(Article {
                title,
                description,
                url: self.url.unwrap_or_default(),
            }),
            _ => None,
        }
    }
}

/// HTTP client for the NewsAPI article endpoints.
pub struct NewsClient {
    client: Client,
    base_url: String,
}

impl NewsClient {
    pub fn new() -> Result<Self> {
        Self::with_base_url(NEWSAPI_BASE_URL.to_string())
    }

    pub fn with_base_url(base_url: String) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| Error::ExternalService(format!("failed to build news client: {}", e)))?;
        Ok(Self { client, base_url })
    }

    /// Fetch up to [`PAGE_SIZE`] recent English-language articles.
    ///
    /// With a query this searches `/v2/everything`; without one it falls back
    /// to generic `/v2/top-headlines`. Every upstream failure surfaces as
    /// `ExternalService`, no retries.
    pub async fn fetch(&self, api_key: &str, query: Option<&str>) -> Result<Vec<Article>> {
        let url = self.request_url(query)?;
        tracing::debug!("fetching news from {}{}", url.host_str().unwrap_or(""), url.path());

        let response = self
            .client
            .get(url)
            .header("X-Api-Key", api_key)
            .send()
            .await
            .map_err(|e| Error::ExternalService(format!("news request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::ExternalService(format!(
                "news provider returned {}: {}",
                status, body
            )));
        }

        let envelope: NewsResponse = response
            .json()
            .await
            .map_err(|e| Error::ExternalService(format!("malformed news response: {}", e)))?;

        let articles: Vec<Article> = envelope
            .articles
            .into_iter()
            .filter_map(RawArticle::into_article)
            .collect();

        if articles.is_empty() {
            return Err(Error::ExternalService(
                "news provider returned no usable articles".to_string(),
            ));
        }

        tracing::debug!("fetched {} usable articles", articles.len());
        Ok(articles)
    }

    fn request_url(&self, query: Option<&str>) -> Result<Url> {
        let page_size = PAGE_SIZE.to_string();
        let result = match query {
            Some(q) => Url::parse_with_params(
                &format!("{}/v2/everything", self.base_url),
                &[
                    ("q", q),
                    ("language", "en"),
                    ("pageSize", page_size.as_str()),
                    ("page", "1"),
                ],
            ),
            None => Url::parse_with_params(
                &format!("{}/v2/top-headlines", self.base_url),
                &[
                    ("language", "en"),
                    ("pageSize", page_size.as_str()),
                    ("page", "1"),
                ],
            ),
        };
        result.map_err(|e| Error::ExternalService(format!("invalid news URL: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    fn article_json(title: &str, description: &str, url: &str) -> serde_json::Value {
        json!({
            "title": title,
            "description": description,
            "url": url,
            "urlToImage": null,
            "publishedAt": "2024-01-01T00:00:00Z"
        })
    }

    #[tokio::test]
    async fn test_fetch_with_query_hits_everything_endpoint() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/v2/everything")
                .query_param("q", "rust OR news")
                .query_param("language", "en")
                .query_param("pageSize", "100")
                .header("X-Api-Key", "test-key");
            then.status(200).json_body(json!({
                "status": "ok",
                "totalResults": 2,
                "articles": [
                    article_json("First", "one", "https://example.com/1"),
                    article_json("Second", "two", "https://example.com/2")
                ]
            }));
        });

        let client = NewsClient::with_base_url(server.base_url()).unwrap();
        let articles = client.fetch("test-key", Some("rust OR news")).await.unwrap();

        mock.assert();
        assert_eq!(articles.len(), 2);
        assert_eq!(articles[0].title, "First");
        assert_eq!(articles[1].url, "https://example.com/2");
    }

    #[tokio::test]
    async fn test_fetch_without_query_falls_back_to_headlines() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/v2/top-headlines");
            then.status(200).json_body(json!({
                "status": "ok",
                "totalResults": 1,
                "articles": [article_json("Headline", "generic", "https://example.com/h")]
            }));
        });

        let client = NewsClient::with_base_url(server.base_url()).unwrap();
        let articles = client.fetch("test-key", None).await.unwrap();

        mock.assert();
        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].title, "Headline");
    }

    #[tokio::test]
    async fn test_fetch_drops_articles_missing_title_or_description() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/v2/top-headlines");
            then.status(200).json_body(json!({
                "status": "ok",
                "totalResults": 3,
                "articles": [
                    article_json("Valid", "has description", "https://example.com/valid"),
                    { "title": null, "description": "no title", "url": "https://example.com/1" },
                    { "title": "No description", "description": null, "url": "https://example.com/2" }
                ]
            }));
        });

        let client = NewsClient::with_base_url(server.base_url()).unwrap();
        let articles = client.fetch("test-key", None).await.unwrap();

        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].title, "Valid");
    }

    #[tokio::test]
    async fn test_fetch_non_success_status_is_external_service_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/v2/everything");
            then.status(401).body("Invalid API key");
        });

        let client = NewsClient::with_base_url(server.base_url()).unwrap();
        let err = client.fetch("bad-key", Some("rust")).await.unwrap_err();

        assert!(matches!(err, Error::ExternalService(_)));
        assert!(err.to_string().contains("401"));
        assert!(err.to_string().contains("Invalid API key"));
    }

    #[tokio::test]
    async fn test_fetch_empty_article_list_is_external_service_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/v2/everything");
            then.status(200).json_body(json!({
                "status": "ok",
                "totalResults": 0,
                "articles": []
            }));
        });

        let client = NewsClient::with_base_url(server.base_url()).unwrap();
        let err = client.fetch("test-key", Some("rust")).await.unwrap_err();

        assert!(matches!(err, Error::ExternalService(_)));
        assert!(err.to_string().contains("no usable articles"));
    }

    #[tokio::test]
    async fn test_fetch_malformed_body_is_external_service_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/v2/everything");
            then.status(200).body("not json");
        });

        let client = NewsClient::with_base_url(server.base_url()).unwrap();
        let err = client.fetch("test-key", Some("rust")).await.unwrap_err();

        assert!(matches!(err, Error::ExternalService(_)));
    }
}
