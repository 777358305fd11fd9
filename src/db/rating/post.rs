use chrono::Utc;

use crate::{
    db::{
        rating::{identity_key, recompute_aggregate},
        stall::get_stall,
        store::DocumentStore,
    },
    errors::AppError,
    models::{
        paths::StorePath,
        rating::{Rating, RatingSummary, RatingValue},
    },
};

/// Upsert the identity's rating of a stall and recompute the aggregate.
///
/// The rating document is replaced wholesale, so an identity can never
/// hold more than one rating per stall. The follow-up recompute is a
/// separate write: if it is lost the aggregate stays stale until the next
/// rating event rebuilds it from the rating set.
pub async fn submit_rating<S: DocumentStore>(
    store: &S,
    stall_id: &str,
    user_id: &str,
    identity: &str,
    value: RatingValue,
) -> Result<RatingSummary, AppError> {
    // Owners had their say once, at creation time.
    if let Some(stall) = get_stall(store, stall_id).await? {
        if stall.added_by == user_id {
            return Err(AppError::Forbidden(
                "You cannot rate your own stall".into(),
            ));
        }
    }

    let key = identity_key(identity);
    let rating = Rating {
        rating: value,
        user_id: Some(user_id.to_string()),
        created_at: Utc::now(),
        deleted_at: None,
    };

    let doc = serde_json::to_value(&rating)
        .map_err(|e| AppError::Serialization(e.to_string()))?;
    store
        .set(&StorePath::stall_ratings(stall_id), &key, doc, false)
        .await?;

    recompute_aggregate(store, stall_id).await
}
