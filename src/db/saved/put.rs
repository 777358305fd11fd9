use chrono::Utc;
use serde_json::json;

use crate::{
    db::store::DocumentStore,
    errors::AppError,
    models::{paths::StorePath, user::UserDoc},
};

/// Add a stall to the user's favorites. The user document is created on
/// first save; saving the same stall twice is a no-op.
pub async fn save_stall<S: DocumentStore>(
    store: &S,
    user_id: &str,
    stall_id: &str,
) -> Result<(), AppError> {
    let doc = store.get(&StorePath::users(), user_id).await?;

    match doc {
        None => {
            let user = UserDoc {
                saved_stalls: vec![stall_id.to_string()],
                created_at: Utc::now(),
                first_active_at: None,
                last_active_at: None,
            };
            let doc = serde_json::to_value(&user)
                .map_err(|e| AppError::Serialization(e.to_string()))?;
            store.set(&StorePath::users(), user_id, doc, false).await
        }
        Some(doc) => {
            let mut user: UserDoc = serde_json::from_value(doc)
                .map_err(|e| AppError::Deserialization(e.to_string()))?;

            if user.saved_stalls.iter().any(|s| s == stall_id) {
                return Ok(());
            }
            user.saved_stalls.push(stall_id.to_string());

            store
                .set(
                    &StorePath::users(),
                    user_id,
                    json!({ "savedStalls": user.saved_stalls }),
                    true,
                )
                .await
        }
    }
}
