//! Saving generated designs and replaying them from history.

use dbarchitect_core::design::{BusinessRule, DesignRecord, DesignRequest};
use dbarchitect_core::reconstruct::reconstruct;
use dbarchitect_core::types::DbId;

use crate::models::project::{CreateProject, Project};
use crate::repositories::{BusinessRuleRepo, DesignedTableRepo, ProjectRepo};
use crate::DbPool;

/// Composite operations spanning projects, rules, tables and columns.
pub struct DesignRepo;

impl DesignRepo {
    /// Persist a project, its inputs and the full generated record as one
    /// transaction.
    ///
    /// Either everything is committed or nothing is: a failing insert rolls
    /// back the project row as well. The normalization narrative, SQL text
    /// and diagram text are not stored; history rebuilds the latter two.
    pub async fn save_project_design(
        pool: &DbPool,
        project: &CreateProject,
        request: &DesignRequest,
        record: &DesignRecord,
    ) -> Result<Project, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let created = ProjectRepo::create(&mut tx, project).await?;
        ProjectRepo::insert_inputs(&mut tx, created.id, request).await?;

        let rule_count =
            BusinessRuleRepo::insert_many(&mut tx, created.id, &record.business_rules).await?;

        let mut column_count = 0;
        for table in &record.tables {
            DesignedTableRepo::insert_with_columns(&mut tx, created.id, table).await?;
            column_count += table.columns.len();
        }

        tx.commit().await?;

        tracing::info!(
            project_id = created.id,
            rules = rule_count,
            tables = record.tables.len(),
            columns = column_count,
            "Saved project design"
        );
        Ok(created)
    }

    /// Rebuild the design record of `project_id` from stored rows.
    ///
    /// All reads share one pooled connection, released on return. A project
    /// with no rules or tables yields an empty record rather than an error;
    /// callers check that the project itself exists.
    pub async fn fetch_history(pool: &DbPool, project_id: DbId) -> Result<DesignRecord, sqlx::Error> {
        let mut conn = pool.acquire().await?;

        let rules: Vec<BusinessRule> = BusinessRuleRepo::list_by_project(&mut *conn, project_id)
            .await?
            .into_iter()
            .map(BusinessRule::from)
            .collect();

        let table_rows = DesignedTableRepo::list_by_project(&mut *conn, project_id).await?;
        let mut tables = Vec::with_capacity(table_rows.len());
        for row in table_rows {
            let columns = DesignedTableRepo::list_columns(&mut *conn, row.id).await?;
            tables.push(row.into_spec(columns));
        }

        tracing::debug!(
            project_id,
            rules = rules.len(),
            tables = tables.len(),
            "Reconstructing design from history"
        );
        Ok(reconstruct(rules, tables))
    }
}
