use chrono::Utc;
use serde_json::json;

use crate::{
    db::{stall::get_stall, store::DocumentStore},
    errors::AppError,
    models::{paths::StorePath, stall::StallUpdate},
};

/// Owner-only edit. Only the provided fields are merged onto the
/// document; everything else, the aggregate fields included, is left
/// untouched.
pub async fn update_stall<S: DocumentStore>(
    store: &S,
    stall_id: &str,
    requester_id: &str,
    updates: StallUpdate,
) -> Result<(), AppError> {
    let Some(stall) = get_stall(store, stall_id).await? else {
        return Err(AppError::NotFound("Stall not found".into()));
    };

    if stall.added_by != requester_id {
        return Err(AppError::Forbidden(
            "Only the stall owner can edit it".into(),
        ));
    }

    let mut patch = serde_json::to_value(&updates)
        .map_err(|e| AppError::Serialization(e.to_string()))?;

    if let Some(fields) = patch.as_object_mut() {
        fields.insert("updatedAt".to_string(), json!(Utc::now()));
    }

    store
        .set(&StorePath::stalls(), stall_id, patch, true)
        .await?;

    Ok(())
}
