use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::{
    http::handlers::{
        rating::{get_my_rating_handler, list_ratings_handler, submit_rating_handler},
        saved::{get_saved_handler, save_stall_handler, unsave_stall_handler},
        stall::{
            create_stall_handler, delete_stall_handler, get_stall_handler, list_stalls_handler,
            update_stall_handler,
        },
        user::{delete_account_handler, track_activity_handler},
    },
    state::AppState,
};

pub fn create_http_routes(state: AppState) -> Router {
    Router::new()
        .route("/stalls", get(list_stalls_handler).post(create_stall_handler))
        .route(
            "/stalls/{stall_id}",
            get(get_stall_handler)
                .patch(update_stall_handler)
                .delete(delete_stall_handler),
        )
        .route(
            "/stalls/{stall_id}/ratings",
            get(list_ratings_handler).post(submit_rating_handler),
        )
        .route("/stalls/{stall_id}/ratings/me", get(get_my_rating_handler))
        .route("/me/saved", get(get_saved_handler))
        .route(
            "/me/saved/{stall_id}",
            put(save_stall_handler).delete(unsave_stall_handler),
        )
        .route("/me/activity", post(track_activity_handler))
        .route("/me", delete(delete_account_handler))
        .with_state(state)
}
