use chrono::Utc;
use serde_json::json;

use crate::{
    db::store::DocumentStore,
    errors::AppError,
    models::{paths::StorePath, user::UserDoc},
};

/// Stamp the user's login activity. `firstActiveAt` is written once and
/// then left alone; `lastActiveAt` moves on every call.
pub async fn track_activity<S: DocumentStore>(
    store: &S,
    user_id: &str,
) -> Result<(), AppError> {
    let now = Utc::now();

    match store.get(&StorePath::users(), user_id).await? {
        None => {
            let user = UserDoc {
                saved_stalls: Vec::new(),
                created_at: now,
                first_active_at: Some(now),
                last_active_at: Some(now),
            };
            let doc = serde_json::to_value(&user)
                .map_err(|e| AppError::Serialization(e.to_string()))?;
            store.set(&StorePath::users(), user_id, doc, false).await
        }
        Some(doc) => {
            let user: UserDoc = serde_json::from_value(doc)
                .map_err(|e| AppError::Deserialization(e.to_string()))?;

            let mut patch = json!({ "lastActiveAt": now });
            if user.first_active_at.is_none() {
                patch["firstActiveAt"] = json!(now);
            }

            store.set(&StorePath::users(), user_id, patch, true).await
        }
    }
}
