use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    auth::AuthClaims,
    db::stall::{create_stall, delete_stall, get_stall, list_stalls, update_stall},
    errors::AppError,
    models::stall::{NewStall, StallEntry, StallUpdate},
    state::AppState,
};

pub async fn list_stalls_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<StallEntry>>, (StatusCode, String)> {
    let stalls = list_stalls(&state.store)
        .await
        .map_err(|e| e.to_response())?;

    Ok(Json(stalls))
}

pub async fn get_stall_handler(
    Path(stall_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<StallEntry>, (StatusCode, String)> {
    let stall = get_stall(&state.store, &stall_id)
        .await
        .map_err(|e| e.to_response())?;

    match stall {
        Some(stall) => Ok(Json(StallEntry {
            id: stall_id,
            stall,
        })),
        None => Err(AppError::NotFound("Stall not found".into()).to_response()),
    }
}

#[axum::debug_handler]
pub async fn create_stall_handler(
    State(state): State<AppState>,
    AuthClaims(claims): AuthClaims,
    Json(payload): Json<NewStall>,
) -> Result<Json<StallEntry>, (StatusCode, String)> {
    let stall = create_stall(&state.store, payload, &claims.sub, &claims.email)
        .await
        .map_err(|err| err.to_response())?;

    Ok(Json(stall))
}

pub async fn update_stall_handler(
    Path(stall_id): Path<String>,
    State(state): State<AppState>,
    AuthClaims(claims): AuthClaims,
    Json(payload): Json<StallUpdate>,
) -> Result<Json<&'static str>, (StatusCode, String)> {
    update_stall(&state.store, &stall_id, &claims.sub, payload)
        .await
        .map_err(|e| e.to_response())?;

    Ok(Json("success"))
}

pub async fn delete_stall_handler(
    Path(stall_id): Path<String>,
    AuthClaims(claims): AuthClaims,
    State(state): State<AppState>,
) -> Result<Json<&'static str>, (StatusCode, String)> {
    delete_stall(&state.store, &stall_id, &claims.sub)
        .await
        .map_err(|e| e.to_response())?;

    Ok(Json("success"))
}
