use crate::{
    db::{rating::list_ratings, store::DocumentStore},
    errors::AppError,
    models::{
        paths::StorePath,
        rating::{RatingSummary, RatingValue},
    },
};

/// Rebuild the denormalized summary from the authoritative rating set and
/// merge it onto the stall document, creating the fields if absent.
/// Idempotent: with an unchanged rating set, repeated calls write the
/// same values. Concurrent callers race last-write-wins on the stall
/// fields; the next recompute overwrites from the same source of truth.
pub async fn recompute_aggregate<S: DocumentStore>(
    store: &S,
    stall_id: &str,
) -> Result<RatingSummary, AppError> {
    let ratings = list_ratings(store, stall_id).await?;
    let values: Vec<RatingValue> = ratings.iter().map(|entry| entry.rating.rating).collect();

    let summary = RatingSummary::of(&values);

    let patch = serde_json::to_value(summary)
        .map_err(|e| AppError::Serialization(e.to_string()))?;
    store
        .set(&StorePath::stalls(), stall_id, patch, true)
        .await?;

    tracing::debug!(
        "Recomputed aggregate for stall {}: {} over {} ratings",
        stall_id,
        summary.average_rating,
        summary.ratings_count
    );

    Ok(summary)
}
