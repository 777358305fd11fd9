use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;

use crate::{
    auth::AuthClaims,
    db::rating::{get_rating_for, list_ratings, submit_rating},
    models::rating::{RatingEntry, RatingSummary, RatingValue},
    state::AppState,
};

#[derive(Deserialize)]
pub struct SubmitRatingPayload {
    pub rating: RatingValue,
}

pub async fn submit_rating_handler(
    Path(stall_id): Path<String>,
    State(state): State<AppState>,
    AuthClaims(claims): AuthClaims,
    Json(payload): Json<SubmitRatingPayload>,
) -> Result<Json<RatingSummary>, (StatusCode, String)> {
    let summary = submit_rating(
        &state.store,
        &stall_id,
        &claims.sub,
        &claims.email,
        payload.rating,
    )
    .await
    .map_err(|e| e.to_response())?;

    Ok(Json(summary))
}

pub async fn list_ratings_handler(
    Path(stall_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Vec<RatingEntry>>, (StatusCode, String)> {
    let ratings = list_ratings(&state.store, &stall_id)
        .await
        .map_err(|e| e.to_response())?;

    Ok(Json(ratings))
}

pub async fn get_my_rating_handler(
    Path(stall_id): Path<String>,
    AuthClaims(claims): AuthClaims,
    State(state): State<AppState>,
) -> Result<Json<Option<RatingValue>>, (StatusCode, String)> {
    let rating = get_rating_for(&state.store, &stall_id, &claims.email)
        .await
        .map_err(|e| e.to_response())?;

    Ok(Json(rating))
}
