//! Handlers for the `/projects` resource.
//!
//! Submitting the design form creates a project: the generation service is
//! called first and the project, its inputs and the full record are written
//! only once a usable design comes back.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use dbarchitect_core::design::DesignRecord;
use dbarchitect_core::error::CoreError;
use dbarchitect_core::types::DbId;
use dbarchitect_db::models::design::{GeneratedDesign, SubmitDesign};
use dbarchitect_db::models::project::{Project, ProjectSummary, ProjectWithInputs};
use dbarchitect_db::repositories::{DesignRepo, ProjectRepo};

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::response::DataResponse;
use crate::state::AppState;

/// Validate, generate and persist a submitted design.
pub(crate) async fn generate_and_save(
    state: &AppState,
    input: &SubmitDesign,
) -> AppResult<GeneratedDesign> {
    input.validate()?;

    let design = state.generator.generate(&input.request).await?;
    let project =
        DesignRepo::save_project_design(&state.pool, &input.project(), &input.request, &design)
            .await?;

    Ok(GeneratedDesign { project, design })
}

/// Fetch a project or fail with `NotFound`.
pub(crate) async fn find_project(state: &AppState, id: DbId) -> AppResult<Project> {
    ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))
}

/// Rebuild the stored design of an existing project.
pub(crate) async fn load_history(state: &AppState, id: DbId) -> AppResult<DesignRecord> {
    find_project(state, id).await?;
    Ok(DesignRepo::fetch_history(&state.pool, id).await?)
}

/// GET /api/v1/projects
///
/// Newest project first.
pub async fn list(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<ProjectSummary>>>> {
    let projects = ProjectRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: projects }))
}

/// POST /api/v1/projects
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<SubmitDesign>,
) -> AppResult<(StatusCode, Json<DataResponse<GeneratedDesign>>)> {
    let generated = generate_and_save(&state, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: generated })))
}

/// GET /api/v1/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<DataResponse<ProjectWithInputs>>> {
    let project = find_project(&state, id).await?;
    let inputs = ProjectRepo::find_inputs(&state.pool, id).await?;
    Ok(Json(DataResponse {
        data: ProjectWithInputs { project, inputs },
    }))
}

/// GET /api/v1/projects/{id}/history
pub async fn history(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<DataResponse<DesignRecord>>> {
    let record = load_history(&state, id).await?;
    Ok(Json(DataResponse { data: record }))
}
