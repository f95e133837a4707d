//! Repository for the `business_rules` table.

use dbarchitect_core::design::BusinessRule;
use dbarchitect_core::types::DbId;
use sqlx::{Sqlite, SqliteExecutor, Transaction};

use crate::models::business_rule::BusinessRuleRow;

const COLUMNS: &str = "id, project_id, br_id, rule_type, rule_statement, \
     er_component, implementation_tip, rationale";

pub struct BusinessRuleRepo;

impl BusinessRuleRepo {
    /// Insert every rule for `project_id` inside `tx`, in the given order.
    ///
    /// The rule's `Type` lands in the `rule_type` column. Returns the number
    /// of rows written.
    pub async fn insert_many(
        tx: &mut Transaction<'_, Sqlite>,
        project_id: DbId,
        rules: &[BusinessRule],
    ) -> Result<usize, sqlx::Error> {
        for rule in rules {
            sqlx::query(
                "INSERT INTO business_rules
                    (project_id, br_id, rule_type, rule_statement, er_component,
                     implementation_tip, rationale)
                 VALUES (?, ?, ?, ?, ?, ?, ?)",
            )
            .bind(project_id)
            .bind(&rule.br_id)
            .bind(&rule.rule_type)
            .bind(&rule.rule_statement)
            .bind(&rule.er_component)
            .bind(&rule.implementation_tip)
            .bind(&rule.rationale)
            .execute(&mut **tx)
            .await?;
        }
        Ok(rules.len())
    }

    /// List a project's rules in insertion order.
    pub async fn list_by_project<'c, E>(
        executor: E,
        project_id: DbId,
    ) -> Result<Vec<BusinessRuleRow>, sqlx::Error>
    where
        E: SqliteExecutor<'c>,
    {
        let query = format!("SELECT {COLUMNS} FROM business_rules WHERE project_id = ? ORDER BY id");
        sqlx::query_as::<_, BusinessRuleRow>(&query)
            .bind(project_id)
            .fetch_all(executor)
            .await
    }
}
