use crate::{
    db::{rating::identity_key, store::DocumentStore},
    errors::AppError,
    models::{
        paths::StorePath,
        rating::{Rating, RatingEntry, RatingValue},
    },
};

/// All rating documents for a stall, tagged with their storage keys.
/// An unknown stall simply has no ratings.
pub async fn list_ratings<S: DocumentStore>(
    store: &S,
    stall_id: &str,
) -> Result<Vec<RatingEntry>, AppError> {
    let docs = store.list_all(&StorePath::stall_ratings(stall_id)).await?;

    let mut ratings = Vec::with_capacity(docs.len());
    for (id, doc) in docs {
        let rating: Rating = serde_json::from_value(doc)
            .map_err(|e| AppError::Deserialization(e.to_string()))?;
        ratings.push(RatingEntry { id, rating });
    }

    Ok(ratings)
}

/// The identity's own rating of a stall, if any.
pub async fn get_rating_for<S: DocumentStore>(
    store: &S,
    stall_id: &str,
    identity: &str,
) -> Result<Option<RatingValue>, AppError> {
    let key = identity_key(identity);

    let doc = store
        .get(&StorePath::stall_ratings(stall_id), &key)
        .await?;

    match doc {
        Some(doc) => {
            let rating: Rating = serde_json::from_value(doc)
                .map_err(|e| AppError::Deserialization(e.to_string()))?;
            Ok(Some(rating.rating))
        }
        None => Ok(None),
    }
}
