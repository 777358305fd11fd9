use crate::{
    db::store::DocumentStore,
    errors::AppError,
    models::{paths::StorePath, user::UserDoc},
};

/// The user's favorite stall ids; empty when the user has saved nothing.
pub async fn get_saved_stalls<S: DocumentStore>(
    store: &S,
    user_id: &str,
) -> Result<Vec<String>, AppError> {
    let Some(doc) = store.get(&StorePath::users(), user_id).await? else {
        return Ok(Vec::new());
    };

    let user: UserDoc = serde_json::from_value(doc)
        .map_err(|e| AppError::Deserialization(e.to_string()))?;

    Ok(user.saved_stalls)
}
