use axum::routing::{get, post};
use axum::Router;

use crate::handlers::session;
use crate::state::AppState;

/// Routes mounted at `/sessions`.
///
/// ```text
/// POST   /                 -> create
/// GET    /{id}             -> get
/// DELETE /{id}             -> delete
/// POST   /{id}/load        -> load_project
/// POST   /{id}/new         -> start_new
/// POST   /{id}/design      -> submit_design
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(session::create))
        .route("/{id}", get(session::get).delete(session::delete))
        .route("/{id}/load", post(session::load_project))
        .route("/{id}/new", post(session::start_new))
        .route("/{id}/design", post(session::submit_design))
}
