use crate::{
    db::store::DocumentStore,
    errors::AppError,
    models::{
        paths::StorePath,
        stall::{Stall, StallEntry},
    },
};

/// Listings are capped; the map only ever shows the newest slice.
const STALLS_PAGE_LIMIT: usize = 100;

/// A single stall document. Absence is a valid result, not an error.
pub async fn get_stall<S: DocumentStore>(
    store: &S,
    stall_id: &str,
) -> Result<Option<Stall>, AppError> {
    let doc = store.get(&StorePath::stalls(), stall_id).await?;

    match doc {
        Some(doc) => {
            let stall: Stall = serde_json::from_value(doc)
                .map_err(|e| AppError::Deserialization(e.to_string()))?;
            Ok(Some(stall))
        }
        None => Ok(None),
    }
}

/// Up to the newest 100 stalls, newest first.
pub async fn list_stalls<S: DocumentStore>(store: &S) -> Result<Vec<StallEntry>, AppError> {
    let docs = store.list_all(&StorePath::stalls()).await?;

    let mut stalls = Vec::with_capacity(docs.len());
    for (id, doc) in docs {
        let stall: Stall = serde_json::from_value(doc)
            .map_err(|e| AppError::Deserialization(e.to_string()))?;
        stalls.push(StallEntry { id, stall });
    }

    stalls.sort_by(|a, b| b.stall.created_at.cmp(&a.stall.created_at));
    stalls.truncate(STALLS_PAGE_LIMIT);

    Ok(stalls)
}
