use chrono::{Duration, Utc};

use crate::{
    db::{stall::get_stall, store::DocumentStore},
    errors::AppError,
    models::{
        paths::StorePath,
        stall::COMMUNITY_OWNED_AFTER_DAYS,
    },
};

/// Owner-only, and only while the stall is younger than the
/// community-owned threshold. Rating documents go with it.
pub async fn delete_stall<S: DocumentStore>(
    store: &S,
    stall_id: &str,
    requester_id: &str,
) -> Result<(), AppError> {
    let Some(stall) = get_stall(store, stall_id).await? else {
        return Err(AppError::NotFound("Stall not found".into()));
    };

    if stall.added_by != requester_id {
        return Err(AppError::Forbidden(
            "Only the stall owner can delete it".into(),
        ));
    }

    let age = Utc::now().signed_duration_since(stall.created_at);
    if age > Duration::days(COMMUNITY_OWNED_AFTER_DAYS) {
        return Err(AppError::Forbidden(
            "This stall now belongs to the community and can no longer be deleted".into(),
        ));
    }

    let ratings_path = StorePath::stall_ratings(stall_id);
    let ratings = store.list_all(&ratings_path).await?;
    for (key, _) in ratings {
        store.delete(&ratings_path, &key).await?;
    }

    store.delete(&StorePath::stalls(), stall_id).await?;

    tracing::info!("Stall {} deleted by owner {}", stall_id, requester_id);

    Ok(())
}
