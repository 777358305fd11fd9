use serde_json::json;

use crate::{
    db::store::DocumentStore,
    errors::AppError,
    models::{paths::StorePath, user::UserDoc},
};

/// Remove a stall from the user's favorites. Unknown user or stall id is
/// a no-op, not an error.
pub async fn unsave_stall<S: DocumentStore>(
    store: &S,
    user_id: &str,
    stall_id: &str,
) -> Result<(), AppError> {
    let Some(doc) = store.get(&StorePath::users(), user_id).await? else {
        return Ok(());
    };

    let mut user: UserDoc = serde_json::from_value(doc)
        .map_err(|e| AppError::Deserialization(e.to_string()))?;

    let before = user.saved_stalls.len();
    user.saved_stalls.retain(|s| s != stall_id);
    if user.saved_stalls.len() == before {
        return Ok(());
    }

    store
        .set(
            &StorePath::users(),
            user_id,
            json!({ "savedStalls": user.saved_stalls }),
            true,
        )
        .await
}
