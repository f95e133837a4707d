//! History reconstruction.
//!
//! Rebuilds the SQL and diagram fields of a [`DesignRecord`] from the
//! normalized rows kept in the store. The generated text is deterministic:
//! the same rules and tables always render to the same strings, in the
//! order they are given.

use crate::design::{BusinessRule, ColumnSpec, DesignRecord, TableSpec};

/// Stand-in for the normalization narrative, which is never persisted.
pub const NORMALIZATION_PLACEHOLDER: &str =
    "**Note:** Normalization steps are not stored in history.";

/// Opening of every reconstructed diagram: left-to-right ranking, and plain
/// node shapes so the HTML-like labels draw the table boxes.
pub const DOT_PREAMBLE: &str =
    "digraph G {\n  rankdir=LR;\n  node [shape=plaintext fontname=\"Arial\"];\n";

/// Closing marker of every reconstructed diagram.
pub const DOT_CLOSING: &str = "}";

/// Rebuild a full record from stored rules and tables.
///
/// Never fails: tables without columns and foreign keys without targets
/// render as best they can. With no tables at all, `sql_code` is empty and
/// the diagram holds only the preamble and closing marker.
pub fn reconstruct(business_rules: Vec<BusinessRule>, tables: Vec<TableSpec>) -> DesignRecord {
    DesignRecord {
        sql_code: render_sql(&tables),
        graphviz_dot: render_dot(&tables),
        business_rules,
        tables,
        normalization_steps: NORMALIZATION_PLACEHOLDER.to_string(),
    }
}

// ---------------------------------------------------------------------------
// SQL
// ---------------------------------------------------------------------------

/// Render one column clause: `<name> <type>[ PRIMARY KEY][ NOT NULL][ <extra>]`.
pub fn render_column_definition(column: &ColumnSpec) -> String {
    let mut def = format!("{} {}", column.column_name, column.data_type);
    if column.is_primary_key {
        def.push_str(" PRIMARY KEY");
    }
    if !column.is_nullable {
        def.push_str(" NOT NULL");
    }
    if let Some(extra) = column.extra() {
        def.push(' ');
        def.push_str(extra);
    }
    def
}

/// Render a `CREATE TABLE` statement with one clause per column, in order.
pub fn render_create_table(table: &TableSpec) -> String {
    let defs: Vec<String> = table.columns.iter().map(render_column_definition).collect();
    format!(
        "CREATE TABLE {} (\n  {}\n);",
        table.table_name,
        defs.join(",\n  ")
    )
}

/// All `CREATE TABLE` statements separated by a blank line.
pub fn render_sql(tables: &[TableSpec]) -> String {
    tables
        .iter()
        .map(render_create_table)
        .collect::<Vec<_>>()
        .join("\n\n")
}

// ---------------------------------------------------------------------------
// Graphviz
// ---------------------------------------------------------------------------

/// Render a node whose HTML-like label has a header row plus one row per
/// column. Each column row carries a `port` named after the column so
/// edges can attach to it.
pub fn render_dot_node(table: &TableSpec) -> String {
    let name = &table.table_name;
    let mut label = format!(
        "<<table border=\"0\" cellborder=\"1\" cellspacing=\"0\"><tr><td bgcolor=\"lightgrey\"><b>{name}</b></td></tr>"
    );
    for column in &table.columns {
        let col = &column.column_name;
        label.push_str(&format!(
            "<tr><td port=\"{col}\" align=\"left\">{col}</td></tr>"
        ));
    }
    label.push_str("</table>>");
    format!("  {name} [label={label}];")
}

/// One `FK` edge per foreign-key column that names a target table.
pub fn render_dot_edges(table: &TableSpec) -> Vec<String> {
    table
        .columns
        .iter()
        .filter_map(|column| {
            column.references().map(|target| {
                format!(
                    "  {}:{} -> {} [label=\"FK\"];",
                    table.table_name, column.column_name, target
                )
            })
        })
        .collect()
}

/// Full diagram: preamble, every node, every edge, closing marker.
pub fn render_dot(tables: &[TableSpec]) -> String {
    let nodes: Vec<String> = tables.iter().map(render_dot_node).collect();
    let edges: Vec<String> = tables.iter().flat_map(render_dot_edges).collect();
    format!(
        "{DOT_PREAMBLE}{}\n{}\n{DOT_CLOSING}",
        nodes.join("\n"),
        edges.join("\n")
    )
}
