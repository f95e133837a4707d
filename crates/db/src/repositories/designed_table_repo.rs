//! Repository for the `designed_tables` and `designed_columns` tables.

use dbarchitect_core::design::TableSpec;
use dbarchitect_core::types::DbId;
use sqlx::{Sqlite, SqliteExecutor, Transaction};

use crate::models::designed_table::{DesignedColumn, DesignedTable};

const TABLE_COLUMNS: &str = "id, project_id, table_name, description";

const COLUMN_COLUMNS: &str = "id, table_id, column_name, data_type, is_primary_key, \
     is_foreign_key, is_nullable, target_table, extra_constraint";

pub struct DesignedTableRepo;

impl DesignedTableRepo {
    /// Insert a table and then its columns inside `tx`.
    ///
    /// Columns are inserted one by one in declaration order under the
    /// table's freshly assigned id, which is what keeps their order stable
    /// on the way back out.
    pub async fn insert_with_columns(
        tx: &mut Transaction<'_, Sqlite>,
        project_id: DbId,
        table: &TableSpec,
    ) -> Result<DesignedTable, sqlx::Error> {
        let query = format!(
            "INSERT INTO designed_tables (project_id, table_name, description)
             VALUES (?, ?, ?)
             RETURNING {TABLE_COLUMNS}"
        );
        let row = sqlx::query_as::<_, DesignedTable>(&query)
            .bind(project_id)
            .bind(&table.table_name)
            .bind(&table.description)
            .fetch_one(&mut **tx)
            .await?;

        for column in &table.columns {
            sqlx::query(
                "INSERT INTO designed_columns
                    (table_id, column_name, data_type, is_primary_key, is_foreign_key,
                     is_nullable, target_table, extra_constraint)
                 VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
            )
            .bind(row.id)
            .bind(&column.column_name)
            .bind(&column.data_type)
            .bind(column.is_primary_key)
            .bind(column.is_foreign_key)
            .bind(column.is_nullable)
            .bind(&column.target_table)
            .bind(&column.extra_constraint)
            .execute(&mut **tx)
            .await?;
        }

        Ok(row)
    }

    /// List a project's tables in insertion order.
    pub async fn list_by_project<'c, E>(
        executor: E,
        project_id: DbId,
    ) -> Result<Vec<DesignedTable>, sqlx::Error>
    where
        E: SqliteExecutor<'c>,
    {
        let query =
            format!("SELECT {TABLE_COLUMNS} FROM designed_tables WHERE project_id = ? ORDER BY id");
        sqlx::query_as::<_, DesignedTable>(&query)
            .bind(project_id)
            .fetch_all(executor)
            .await
    }

    /// List a table's columns in insertion order.
    pub async fn list_columns<'c, E>(
        executor: E,
        table_id: DbId,
    ) -> Result<Vec<DesignedColumn>, sqlx::Error>
    where
        E: SqliteExecutor<'c>,
    {
        let query =
            format!("SELECT {COLUMN_COLUMNS} FROM designed_columns WHERE table_id = ? ORDER BY id");
        sqlx::query_as::<_, DesignedColumn>(&query)
            .bind(table_id)
            .fetch_all(executor)
            .await
    }
}
