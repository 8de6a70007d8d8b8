/// Tags too generic to be worth searching news for.
const STOP_TAGS: &[&str] = &[
    "fyp",
    "foryou",
    "trending",
    "viral",
    "funny",
    "explore",
    "tiktok",
    "tiktokdance",
    "xyzbca",
];

/// Tokens shorter than this carry no signal after cleaning.
const MIN_TAG_LEN: usize = 3;

/// Upper bound on tags joined into one news query.
const MAX_QUERY_TAGS: usize = 5;

/// Basic cleaning: lowercase, keep ASCII letters and digits only.
pub fn clean_hashtag(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect()
}

/// Build a news search query from raw hashtag names.
///
/// Cleans each tag, drops stop tags and very short tokens, deduplicates
/// preserving first occurrence, caps the count, and joins with `OR`.
/// Returns `None` when nothing meaningful remains; callers fall back to
/// generic headlines.
pub fn build_query(tags: &[String]) -> Option<String> {
    let mut cleaned: Vec<String> = Vec::new();
    for tag in tags {
        let ct = clean_hashtag(tag);
        if ct.len() < MIN_TAG_LEN || STOP_TAGS.contains(&ct.as_str()) {
            continue;
        }
        if !cleaned.contains(&ct) {
            cleaned.push(ct);
        }
    }
    cleaned.truncate(MAX_QUERY_TAGS);

    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned.join(" OR "))
    }
}
