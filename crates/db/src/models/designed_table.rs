//! Designed table and column rows.

use dbarchitect_core::design::{ColumnSpec, TableSpec};
use dbarchitect_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `designed_tables` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DesignedTable {
    pub id: DbId,
    pub project_id: DbId,
    pub table_name: String,
    pub description: Option<String>,
}

/// A row from the `designed_columns` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DesignedColumn {
    pub id: DbId,
    pub table_id: DbId,
    pub column_name: String,
    pub data_type: String,
    pub is_primary_key: bool,
    pub is_foreign_key: bool,
    pub is_nullable: bool,
    pub target_table: Option<String>,
    pub extra_constraint: Option<String>,
}

impl From<DesignedColumn> for ColumnSpec {
    fn from(row: DesignedColumn) -> Self {
        Self {
            column_name: row.column_name,
            data_type: row.data_type,
            is_primary_key: row.is_primary_key,
            is_foreign_key: row.is_foreign_key,
            is_nullable: row.is_nullable,
            target_table: row.target_table,
            extra_constraint: row.extra_constraint,
        }
    }
}

impl DesignedTable {
    /// Combine this row with its columns (already in stored order).
    pub fn into_spec(self, columns: Vec<DesignedColumn>) -> TableSpec {
        TableSpec {
            table_name: self.table_name,
            description: self.description,
            columns: columns.into_iter().map(ColumnSpec::from).collect(),
        }
    }
}
