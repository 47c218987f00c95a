use crate::handlers;
use crate::state::AppState;
use axum::{routing::{delete, get}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/moods", get(handlers::list_moods))
        .route("/api/stats", get(handlers::get_stats))
        .route(
            "/api/entries",
            get(handlers::get_entries)
                .post(handlers::create_entry)
                .delete(handlers::clear_entries),
        )
        .route("/api/entries/:id", delete(handlers::delete_entry))
        .with_state(state)
}
