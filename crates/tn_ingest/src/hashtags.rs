use serde::Deserialize;
use tn_core::{Error, Result};

/// TikTok data export, reduced to the activity section we care about.
/// The export nests hashtags under `Your Activity -> Hashtag -> HashtagList`.
#[derive(Debug, Deserialize)]
struct InterestExport {
    #[serde(rename = "Your Activity")]
    activity: Option<ActivitySection>,
}

#[derive(Debug, Deserialize)]
struct ActivitySection {
    #[serde(rename = "Hashtag")]
    hashtag: Option<HashtagSection>,
}

#[derive(Debug, Deserialize)]
struct HashtagSection {
    #[serde(rename = "HashtagList")]
    list: Option<Vec<HashtagEntry>>,
}

#[derive(Debug, Deserialize)]
struct HashtagEntry {
    #[serde(rename = "HashtagName")]
    name: Option<String>,
}

/// Extract hashtag names from an uploaded interest-history export.
///
/// Returns the trimmed, non-empty names in document order. A document that is
/// not JSON or does not carry the expected nesting is a `Validation` error; a
/// well-formed document with nothing usable in it is `EmptyInput`.
pub fn extract_hashtags(raw: &[u8]) -> Result<Vec<String>> {
    let export: InterestExport = serde_json::from_slice(raw)
        .map_err(|e| Error::Validation(format!("invalid JSON upload: {}", e)))?;

    let activity = export
        .activity
        .ok_or_else(|| Error::Validation("missing `Your Activity` section".to_string()))?;
    let hashtag = activity
        .hashtag
        .ok_or_else(|| Error::Validation("missing `Hashtag` section".to_string()))?;
    let list = hashtag
        .list
        .ok_or_else(|| Error::Validation("missing `HashtagList`".to_string()))?;

    if list.is_empty() {
        return Err(Error::EmptyInput("no hashtags found in export".to_string()));
    }

    let names: Vec<String> = list
        .into_iter()
        .filter_map(|entry| entry.name)
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
        .collect();

    if names.is_empty() {
        return Err(Error::EmptyInput(
            "no usable hashtag names in export".to_string(),
        ));
    }

    tracing::debug!("extracted {} hashtags from upload", names.len());
    Ok(names)
}
