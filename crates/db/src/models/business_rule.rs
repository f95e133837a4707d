//! Business rule rows.

use dbarchitect_core::design::BusinessRule;
use dbarchitect_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `business_rules` table.
///
/// `rule_type` holds what the generation service calls `Type`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BusinessRuleRow {
    pub id: DbId,
    pub project_id: DbId,
    pub br_id: String,
    pub rule_type: String,
    pub rule_statement: String,
    pub er_component: Option<String>,
    pub implementation_tip: Option<String>,
    pub rationale: Option<String>,
}

impl From<BusinessRuleRow> for BusinessRule {
    fn from(row: BusinessRuleRow) -> Self {
        Self {
            br_id: row.br_id,
            rule_type: row.rule_type,
            rule_statement: row.rule_statement,
            er_component: row.er_component,
            implementation_tip: row.implementation_tip,
            rationale: row.rationale,
        }
    }
}
