use axum::{Json, extract::State, http::StatusCode};

use crate::{
    auth::AuthClaims,
    db::user::{delete_account, track_activity},
    state::AppState,
};

pub async fn track_activity_handler(
    AuthClaims(claims): AuthClaims,
    State(state): State<AppState>,
) -> Result<Json<&'static str>, (StatusCode, String)> {
    track_activity(&state.store, &claims.sub)
        .await
        .map_err(|e| e.to_response())?;

    Ok(Json("success"))
}

pub async fn delete_account_handler(
    AuthClaims(claims): AuthClaims,
    State(state): State<AppState>,
) -> Result<Json<&'static str>, (StatusCode, String)> {
    delete_account(&state.store, &claims.sub, &claims.email)
        .await
        .map_err(|e| e.to_response())?;

    Ok(Json("success"))
}
