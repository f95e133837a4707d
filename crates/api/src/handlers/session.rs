//! Handlers for the `/sessions` resource.
//!
//! A session is one user's view of the app: either the design form (with
//! the last generated record) or a stored project replayed from history.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use dbarchitect_core::session::SessionContext;
use dbarchitect_core::types::DbId;
use dbarchitect_db::models::design::SubmitDesign;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::handlers::project::{find_project, generate_and_save, load_history};
use crate::response::DataResponse;
use crate::state::AppState;

/// A session id together with its current context.
#[derive(Debug, Serialize)]
pub struct SessionView {
    pub id: String,
    #[serde(flatten)]
    pub context: SessionContext,
}

/// Request body for `POST /sessions/{id}/load`.
#[derive(Debug, Deserialize)]
pub struct LoadProject {
    pub project_id: DbId,
}

fn view(id: String, context: SessionContext) -> Json<DataResponse<SessionView>> {
    Json(DataResponse {
        data: SessionView { id, context },
    })
}

async fn update_session<F>(state: &AppState, id: &str, f: F) -> AppResult<SessionContext>
where
    F: FnOnce(&mut SessionContext),
{
    state
        .sessions
        .update(id, f)
        .await
        .ok_or_else(|| AppError::SessionNotFound(id.to_string()))
}

/// Reconstruct the active project's record if the session is in history
/// mode and nothing is displayed yet. Otherwise returns the context as is.
async fn resolve_history(
    state: &AppState,
    id: &str,
    context: SessionContext,
) -> AppResult<SessionContext> {
    let Some(project_id) = context.needs_history() else {
        return Ok(context);
    };

    let record = load_history(state, project_id).await?;
    tracing::debug!(session_id = %id, project_id, "Loaded session history");
    update_session(state, id, |ctx| {
        // The user may have moved on while the history was being read.
        if ctx.needs_history() == Some(project_id) {
            ctx.show_record(project_id, record);
        }
    })
    .await
}

/// POST /api/v1/sessions
pub async fn create(
    State(state): State<AppState>,
) -> AppResult<(StatusCode, Json<DataResponse<SessionView>>)> {
    let id = state.sessions.create().await;
    tracing::info!(session_id = %id, "Session opened");
    Ok((StatusCode::CREATED, view(id, SessionContext::new())))
}

/// GET /api/v1/sessions/{id}
///
/// In history mode the stored design is reconstructed on first view and
/// kept for later views.
pub async fn get(
    State(state): State<AppState>,
    AppPath(id): AppPath<String>,
) -> AppResult<Json<DataResponse<SessionView>>> {
    let context = state
        .sessions
        .get(&id)
        .await
        .ok_or_else(|| AppError::SessionNotFound(id.clone()))?;
    let context = resolve_history(&state, &id, context).await?;
    Ok(view(id, context))
}

/// DELETE /api/v1/sessions/{id}
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<String>,
) -> AppResult<StatusCode> {
    if state.sessions.remove(&id).await {
        tracing::info!(session_id = %id, "Session closed");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::SessionNotFound(id))
    }
}

/// POST /api/v1/sessions/{id}/load
///
/// Switches to history mode for the project. The design itself is rebuilt
/// on the next view of the session.
pub async fn load_project(
    State(state): State<AppState>,
    AppPath(id): AppPath<String>,
    AppJson(input): AppJson<LoadProject>,
) -> AppResult<Json<DataResponse<SessionView>>> {
    if state.sessions.get(&id).await.is_none() {
        return Err(AppError::SessionNotFound(id));
    }

    find_project(&state, input.project_id).await?;
    let context = update_session(&state, &id, |ctx| ctx.load_project(input.project_id)).await?;
    tracing::debug!(
        session_id = %id,
        project_id = input.project_id,
        "Session switched to history"
    );
    Ok(view(id, context))
}

/// POST /api/v1/sessions/{id}/new
pub async fn start_new(
    State(state): State<AppState>,
    AppPath(id): AppPath<String>,
) -> AppResult<Json<DataResponse<SessionView>>> {
    let context = update_session(&state, &id, SessionContext::start_new).await?;
    Ok(view(id, context))
}

/// POST /api/v1/sessions/{id}/design
///
/// Generates and saves a design; on success it becomes the session's
/// displayed record. A failure leaves the session untouched.
pub async fn submit_design(
    State(state): State<AppState>,
    AppPath(id): AppPath<String>,
    AppJson(input): AppJson<SubmitDesign>,
) -> AppResult<(StatusCode, Json<DataResponse<SessionView>>)> {
    if state.sessions.get(&id).await.is_none() {
        return Err(AppError::SessionNotFound(id));
    }

    let generated = generate_and_save(&state, &input).await?;
    let context = update_session(&state, &id, |ctx| {
        ctx.start_new();
        ctx.show_record(generated.project.id, generated.design);
    })
    .await?;
    Ok((StatusCode::CREATED, view(id, context)))
}
