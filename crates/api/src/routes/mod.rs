pub mod health;
pub mod project;
pub mod session;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /projects                        list, submit design
/// /projects/{id}                   project with stored inputs
/// /projects/{id}/history           reconstructed design
///
/// /sessions                        open session
/// /sessions/{id}                   view (lazy history load), close
/// /sessions/{id}/load              switch to history of a project
/// /sessions/{id}/new               back to the design form
/// /sessions/{id}/design            submit design within the session
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/projects", project::router())
        .nest("/sessions", session::router())
}
