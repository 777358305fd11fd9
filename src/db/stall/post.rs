use chrono::Utc;
use uuid::Uuid;

use crate::{
    db::{rating::identity_key, store::DocumentStore},
    errors::AppError,
    models::{
        paths::StorePath,
        rating::Rating,
        stall::{NewStall, Stall, StallEntry},
    },
};

/// Persist a new stall together with the creator's own rating.
///
/// The aggregate is seeded directly instead of going through a recompute:
/// for a single-rating set the mean is the rating's own score, so the
/// shortcut writes exactly what `recompute_aggregate` would.
pub async fn create_stall<S: DocumentStore>(
    store: &S,
    new: NewStall,
    user_id: &str,
    identity: &str,
) -> Result<StallEntry, AppError> {
    let stall_id = Uuid::new_v4().to_string();
    let now = Utc::now();

    let (average_rating, ratings_count) = match new.rating {
        Some(value) => (f64::from(value.score()), 1),
        None => (0.0, 0),
    };

    let stall = Stall {
        name: new.name,
        description: new.description,
        photo: new.photo,
        location: new.location,
        added_by: user_id.to_string(),
        created_at: now,
        verified: false,
        average_rating,
        ratings_count,
        updated_at: None,
    };

    let doc = serde_json::to_value(&stall)
        .map_err(|e| AppError::Serialization(e.to_string()))?;
    store
        .set(&StorePath::stalls(), &stall_id, doc, false)
        .await?;

    if let Some(value) = new.rating {
        let rating = Rating {
            rating: value,
            user_id: Some(user_id.to_string()),
            created_at: now,
            deleted_at: None,
        };
        let doc = serde_json::to_value(&rating)
            .map_err(|e| AppError::Serialization(e.to_string()))?;
        store
            .set(
                &StorePath::stall_ratings(&stall_id),
                &identity_key(identity),
                doc,
                false,
            )
            .await?;
    }

    tracing::info!("Stall {} added by user {}", stall_id, user_id);

    Ok(StallEntry { id: stall_id, stall })
}
