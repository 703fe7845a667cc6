use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/entries", get(handlers::get_entries))
        .route("/api/series", get(handlers::get_series))
        .route("/api/record", post(handlers::record))
        .route("/api/delete-last", post(handlers::delete_last))
        .route("/api/export", get(handlers::export_csv))
        .with_state(state)
}
