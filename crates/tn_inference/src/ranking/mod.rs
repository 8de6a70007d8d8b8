use std::cmp::Ordering;

use tn_core::{Article, Error, Result, ScoredArticle};

/// Aggregate hashtag embeddings into a single interest vector.
///
/// Policy: element-wise mean over all hashtag vectors. A zero-magnitude mean
/// means the upload carried no signal the model could represent, so the
/// request fails rather than producing all-zero scores.
pub fn interest_vector(embeddings: &[Vec<f32>]) -> Result<Vec<f32>> {
    let first = embeddings
        .first()
        .ok_or_else(|| Error::EmptyInput("no hashtag embeddings to aggregate".to_string()))?;
    let dims = first.len();

    let mut mean = vec![0.0f32; dims];
    for embedding in embeddings {
        if embedding.len() != dims {
            return Err(Error::Embedding(format!(
                "mixed embedding dimensions: {} vs {}",
                embedding.len(),
                dims
            )));
        }
        for (acc, x) in mean.iter_mut().zip(embedding) {
            *acc += x;
        }
    }
    let count = embeddings.len() as f32;
    for acc in mean.iter_mut() {
        *acc /= count;
    }

    if norm(&mean) == 0.0 {
        return Err(Error::DegenerateVector(
            "interest vector has zero magnitude".to_string(),
        ));
    }
    Ok(mean)
}

/// Cosine of the angle between two vectors, in [-1, 1].
/// A zero-norm operand scores 0.0 so degenerate articles rank last instead
/// of failing the request.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let (norm_a, norm_b) = (norm(a), norm(b));
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    dot / (norm_a * norm_b)
}

/// Score every article against the interest vector and sort descending.
/// The sort is stable, so equal scores keep their fetch order.
pub fn rank_articles(
    interest: &[f32],
    articles: Vec<Article>,
    vectors: &[Vec<f32>],
) -> Result<Vec<ScoredArticle>> {
    if articles.len() != vectors.len() {
        return Err(Error::Embedding(format!(
            "{} articles but {} embedding vectors",
            articles.len(),
            vectors.len()
        )));
    }

    let mut scored: Vec<ScoredArticle> = articles
        .into_iter()
        .zip(vectors)
        .map(|(article, vector)| ScoredArticle {
            score: cosine_similarity(interest, vector),
            article,
        })
        .collect();

    scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    Ok(scored)
}

fn norm(v: &[f32]) -> f32 {
    v.iter().map(|x| x * x).sum::<f32>().sqrt()
}
