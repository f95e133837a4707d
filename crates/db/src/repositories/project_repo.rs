//! Repository for the `projects` and `project_inputs` tables.

use dbarchitect_core::design::DesignRequest;
use dbarchitect_core::types::DbId;
use sqlx::{Sqlite, SqliteExecutor, Transaction};

use crate::models::project::{CreateProject, Project, ProjectInput, ProjectSummary};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, user_info, created_at";

const INPUT_COLUMNS: &str = "project_id, domain, primary_entity, constraints, \
     advanced_features, security_requirements, reporting_requirements, common_tasks";

/// Provides create/read operations for projects. Projects are never
/// updated or deleted once created.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project inside `tx`, returning the created row with its
    /// assigned id.
    pub async fn create(
        tx: &mut Transaction<'_, Sqlite>,
        input: &CreateProject,
    ) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects (name, user_info, created_at)
             VALUES (?, ?, ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(&input.name)
            .bind(&input.user_info)
            .bind(chrono::Utc::now())
            .fetch_one(&mut **tx)
            .await
    }

    /// Store the form inputs for `project_id` inside `tx`.
    pub async fn insert_inputs(
        tx: &mut Transaction<'_, Sqlite>,
        project_id: DbId,
        request: &DesignRequest,
    ) -> Result<ProjectInput, sqlx::Error> {
        let query = format!(
            "INSERT INTO project_inputs
                (project_id, domain, primary_entity, constraints, advanced_features,
                 security_requirements, reporting_requirements, common_tasks)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)
             RETURNING {INPUT_COLUMNS}"
        );
        sqlx::query_as::<_, ProjectInput>(&query)
            .bind(project_id)
            .bind(&request.domain)
            .bind(&request.primary_entity)
            .bind(&request.constraints)
            .bind(&request.advanced_features)
            .bind(&request.security_requirements)
            .bind(&request.reporting_requirements)
            .bind(&request.common_tasks)
            .fetch_one(&mut **tx)
            .await
    }

    /// Find a project by its id.
    pub async fn find_by_id<'c, E>(executor: E, id: DbId) -> Result<Option<Project>, sqlx::Error>
    where
        E: SqliteExecutor<'c>,
    {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = ?");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// Find the stored inputs of a project.
    pub async fn find_inputs<'c, E>(
        executor: E,
        project_id: DbId,
    ) -> Result<Option<ProjectInput>, sqlx::Error>
    where
        E: SqliteExecutor<'c>,
    {
        let query = format!("SELECT {INPUT_COLUMNS} FROM project_inputs WHERE project_id = ?");
        sqlx::query_as::<_, ProjectInput>(&query)
            .bind(project_id)
            .fetch_optional(executor)
            .await
    }

    /// List all projects, most recently created first.
    pub async fn list<'c, E>(executor: E) -> Result<Vec<ProjectSummary>, sqlx::Error>
    where
        E: SqliteExecutor<'c>,
    {
        sqlx::query_as::<_, ProjectSummary>("SELECT id, name FROM projects ORDER BY id DESC")
            .fetch_all(executor)
            .await
    }
}
