//! Project entity model and DTOs.

use dbarchitect_core::design::DesignRequest;
use dbarchitect_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A project row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub name: String,
    pub user_info: Option<String>,
    pub created_at: Timestamp,
}

/// Id and name only, for the history picker.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProjectSummary {
    pub id: DbId,
    pub name: String,
}

/// DTO for creating a new project.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProject {
    pub name: String,
    pub user_info: Option<String>,
}

/// The form inputs a project was created from, one row per project.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProjectInput {
    pub project_id: DbId,
    pub domain: String,
    pub primary_entity: String,
    pub constraints: String,
    pub advanced_features: String,
    pub security_requirements: String,
    pub reporting_requirements: String,
    pub common_tasks: String,
}

/// A project together with its stored inputs.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectWithInputs {
    #[serde(flatten)]
    pub project: Project,
    pub inputs: Option<ProjectInput>,
}

impl From<ProjectInput> for DesignRequest {
    fn from(row: ProjectInput) -> Self {
        Self {
            domain: row.domain,
            primary_entity: row.primary_entity,
            constraints: row.constraints,
            advanced_features: row.advanced_features,
            security_requirements: row.security_requirements,
            reporting_requirements: row.reporting_requirements,
            common_tasks: row.common_tasks,
        }
    }
}
