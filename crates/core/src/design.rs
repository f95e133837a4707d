//! Typed design record exchanged with the generation service.
//!
//! The wire key names (`BR_ID`, `Type`, `TableName`, `Columns`, ...) are the
//! ones the generation service is instructed to emit, and they are kept on
//! the way out so history replays serialize identically to live results.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::identifier::validate_identifier;

/// Maximum length of a single free-text form field, in characters.
pub const MAX_REQUEST_FIELD_LENGTH: usize = 2_000;

/// The seven free-text fields describing what should be designed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesignRequest {
    #[serde(default)]
    pub domain: String,
    #[serde(default)]
    pub primary_entity: String,
    #[serde(default)]
    pub constraints: String,
    #[serde(default)]
    pub advanced_features: String,
    #[serde(default)]
    pub security_requirements: String,
    #[serde(default)]
    pub reporting_requirements: String,
    #[serde(default)]
    pub common_tasks: String,
}

impl DesignRequest {
    /// Field labels paired with their values, in form order.
    pub fn fields(&self) -> [(&'static str, &str); 7] {
        [
            ("domain", &self.domain),
            ("primary_entity", &self.primary_entity),
            ("constraints", &self.constraints),
            ("advanced_features", &self.advanced_features),
            ("security_requirements", &self.security_requirements),
            ("reporting_requirements", &self.reporting_requirements),
            ("common_tasks", &self.common_tasks),
        ]
    }

    /// Reject requests with nothing to design from, or oversized fields.
    pub fn validate(&self) -> Result<(), CoreError> {
        let fields = self.fields();

        if fields.iter().all(|(_, value)| value.trim().is_empty()) {
            return Err(CoreError::Validation(
                "At least one design field must be filled in".to_string(),
            ));
        }

        for (label, value) in fields {
            let len = value.chars().count();
            if len > MAX_REQUEST_FIELD_LENGTH {
                return Err(CoreError::Validation(format!(
                    "Field '{label}' exceeds maximum length of {MAX_REQUEST_FIELD_LENGTH} characters (got {len})"
                )));
            }
        }

        Ok(())
    }
}

/// The five-field record produced by a live generation or a history replay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignRecord {
    pub sql_code: String,
    pub graphviz_dot: String,
    pub business_rules: Vec<BusinessRule>,
    pub tables: Vec<TableSpec>,
    pub normalization_steps: String,
}

impl DesignRecord {
    /// Check every name that ends up interpolated into SQL or DOT text.
    ///
    /// Table names, column names and foreign-key targets must all be safe
    /// identifiers. The first offending name is reported.
    pub fn validate_identifiers(&self) -> Result<(), CoreError> {
        for table in &self.tables {
            validate_identifier("table", &table.table_name)?;
            for column in &table.columns {
                validate_identifier("column", &column.column_name).map_err(|e| match e {
                    CoreError::Validation(msg) => {
                        CoreError::Validation(format!("{msg} (in table '{}')", table.table_name))
                    }
                    other => other,
                })?;
                if let Some(target) = column.references() {
                    validate_identifier("foreign key target", target)?;
                }
            }
        }
        Ok(())
    }
}

/// A business rule as emitted by the generation service.
///
/// Stored with `Type` under the `rule_type` column and read back under the
/// same `Type` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessRule {
    #[serde(rename = "BR_ID")]
    pub br_id: String,
    #[serde(rename = "Type")]
    pub rule_type: String,
    #[serde(rename = "RuleStatement")]
    pub rule_statement: String,
    #[serde(rename = "ERComponent")]
    pub er_component: Option<String>,
    #[serde(rename = "ImplementationTip")]
    pub implementation_tip: Option<String>,
    #[serde(rename = "Rationale")]
    pub rationale: Option<String>,
}

/// A designed table with its columns in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSpec {
    #[serde(rename = "TableName")]
    pub table_name: String,
    #[serde(rename = "Description")]
    pub description: Option<String>,
    #[serde(rename = "Columns", default)]
    pub columns: Vec<ColumnSpec>,
}

/// A single column of a designed table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSpec {
    #[serde(rename = "ColumnName")]
    pub column_name: String,
    #[serde(rename = "DataType")]
    pub data_type: String,
    #[serde(rename = "IsPrimaryKey", default)]
    pub is_primary_key: bool,
    #[serde(rename = "IsForeignKey", default)]
    pub is_foreign_key: bool,
    #[serde(rename = "IsNullable", default = "default_nullable")]
    pub is_nullable: bool,
    #[serde(rename = "TargetTable")]
    pub target_table: Option<String>,
    #[serde(rename = "ExtraConstraint")]
    pub extra_constraint: Option<String>,
}

fn default_nullable() -> bool {
    true
}

impl ColumnSpec {
    /// The referenced table, if this column is a foreign key with a target.
    ///
    /// A foreign-key flag without a target (or with a blank one) yields
    /// `None`; such columns simply produce no relationship.
    pub fn references(&self) -> Option<&str> {
        if !self.is_foreign_key {
            return None;
        }
        self.target_table
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }

    /// Extra constraint text, ignoring empty strings.
    pub fn extra(&self) -> Option<&str> {
        self.extra_constraint
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
    }
}
