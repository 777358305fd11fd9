use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    auth::AuthClaims,
    db::saved::{get_saved_stalls, save_stall, unsave_stall},
    state::AppState,
};

pub async fn get_saved_handler(
    AuthClaims(claims): AuthClaims,
    State(state): State<AppState>,
) -> Result<Json<Vec<String>>, (StatusCode, String)> {
    let saved = get_saved_stalls(&state.store, &claims.sub)
        .await
        .map_err(|e| e.to_response())?;

    Ok(Json(saved))
}

pub async fn save_stall_handler(
    Path(stall_id): Path<String>,
    AuthClaims(claims): AuthClaims,
    State(state): State<AppState>,
) -> Result<Json<&'static str>, (StatusCode, String)> {
    save_stall(&state.store, &claims.sub, &stall_id)
        .await
        .map_err(|e| e.to_response())?;

    Ok(Json("success"))
}

pub async fn unsave_stall_handler(
    Path(stall_id): Path<String>,
    AuthClaims(claims): AuthClaims,
    State(state): State<AppState>,
) -> Result<Json<&'static str>, (StatusCode, String)> {
    unsave_stall(&state.store, &claims.sub, &stall_id)
        .await
        .map_err(|e| e.to_response())?;

    Ok(Json("success"))
}
