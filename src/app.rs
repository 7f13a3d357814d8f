use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/state", get(handlers::get_state))
        .route("/api/day/open", post(handlers::open_day))
        .route("/api/task/select", post(handlers::select_task))
        .route("/api/task/complete", post(handlers::complete_task))
        .route("/api/gift/buy", post(handlers::buy_gift))
        .route("/api/view", post(handlers::switch_view))
        .with_state(state)
}
