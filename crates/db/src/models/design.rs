//! Design submission DTO and the saved-design payload.

use dbarchitect_core::design::{DesignRecord, DesignRequest};
use dbarchitect_core::error::CoreError;
use serde::{Deserialize, Serialize};

use crate::models::project::{CreateProject, Project};

/// The design form as submitted: project metadata plus the seven inputs.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitDesign {
    pub project_name: String,
    #[serde(default)]
    pub user_info: Option<String>,
    #[serde(flatten)]
    pub request: DesignRequest,
}

impl SubmitDesign {
    /// Reject a blank project name or unusable form inputs.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.project_name.trim().is_empty() {
            return Err(CoreError::Validation(
                "Project name must not be empty".to_string(),
            ));
        }
        self.request.validate()
    }

    /// The project row to create, with surrounding whitespace removed and a
    /// blank `user_info` stored as NULL.
    pub fn project(&self) -> CreateProject {
        CreateProject {
            name: self.project_name.trim().to_string(),
            user_info: self
                .user_info
                .as_deref()
                .map(str::trim)
                .filter(|info| !info.is_empty())
                .map(str::to_string),
        }
    }
}

/// A freshly saved project and the design generated for it.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedDesign {
    pub project: Project,
    pub design: DesignRecord,
}
