use chrono::Utc;
use serde_json::json;

use crate::{
    db::{rating::identity_key, store::DocumentStore},
    errors::AppError,
    models::{
        paths::StorePath,
        rating::Rating,
        stall::{DELETED_USER, Stall},
    },
};

/// Remove the account and anonymize everything it left behind.
///
/// The user document is deleted outright. Ratings keep their value and
/// timestamp but lose their author. Stalls the user posted stay up for
/// the community under the deleted-user sentinel.
pub async fn delete_account<S: DocumentStore>(
    store: &S,
    user_id: &str,
    identity: &str,
) -> Result<(), AppError> {
    let key = identity_key(identity);

    store.delete(&StorePath::users(), user_id).await?;

    let stalls = store.list_all(&StorePath::stalls()).await?;

    for (stall_id, _) in &stalls {
        let path = StorePath::stall_ratings(stall_id);
        if let Some(doc) = store.get(&path, &key).await? {
            let mut rating: Rating = serde_json::from_value(doc)
                .map_err(|e| AppError::Deserialization(e.to_string()))?;
            rating.user_id = None;
            rating.deleted_at = Some(Utc::now());

            let doc = serde_json::to_value(&rating)
                .map_err(|e| AppError::Serialization(e.to_string()))?;
            store.set(&path, &key, doc, false).await?;
        }
    }

    for (stall_id, doc) in stalls {
        let stall: Stall = serde_json::from_value(doc)
            .map_err(|e| AppError::Deserialization(e.to_string()))?;
        if stall.added_by == user_id {
            store
                .set(
                    &StorePath::stalls(),
                    &stall_id,
                    json!({ "addedBy": DELETED_USER }),
                    true,
                )
                .await?;
        }
    }

    tracing::info!("User account {} deleted and data anonymized", user_id);

    Ok(())
}
