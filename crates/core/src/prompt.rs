//! Prompt template for the design-generation service.

use crate::design::DesignRequest;

/// System message sent ahead of every design prompt.
pub const SYSTEM_PROMPT: &str = "You are a JSON generator. Respond ONLY with valid JSON.";

/// Build the user prompt asking for a complete normalized design.
///
/// The key order requested here matches [`crate::parse::REQUIRED_KEYS`]:
/// long replies get cut off at the end, so the cheap-to-lose narrative
/// comes last.
pub fn build_design_prompt(request: &DesignRequest) -> String {
    let DesignRequest {
        domain,
        primary_entity,
        constraints,
        advanced_features,
        security_requirements,
        reporting_requirements,
        common_tasks,
    } = request;

    format!(
        r#"Act as a Senior Database Architect. Design a complete normalized database for:
Domain: {domain}
Primary Entity: {primary_entity}
Constraints: {constraints}
Advanced Features: {advanced_features}
Security: {security_requirements}
Reporting: {reporting_requirements}
Common Tasks: {common_tasks}

CRITICAL INSTRUCTION: Output MUST be a valid JSON object. Do not include any text outside the JSON.

To ensure nothing is cut off, generate the JSON keys in THIS EXACT ORDER:
1. "sql_code"
2. "graphviz_dot"
3. "business_rules"
4. "tables"
5. "normalization_steps"

DETAILED REQUIREMENTS FOR EACH KEY:

1. "sql_code":
   - Write full CREATE TABLE statements with constraints (PK, FK).
   - INCLUDE at least 1 CREATE TRIGGER (e.g., for logging or checks).
   - INCLUDE at least 1 CREATE VIEW (for reporting).
   - INCLUDE at least 1 CREATE ROLE (for security).
   - INCLUDE at least 3 COMPLEX SELECT QUERIES that satisfy the '{reporting_requirements}' requirement (use JOINs, GROUP BY, etc.).

2. "graphviz_dot":
   - Generate valid Graphviz DOT syntax using Crow's Foot Notation style.
   - Use `rankdir=LR;`
   - Tables must use HTML-like labels to show columns (e.g., <<table...>>).
   - Relationships MUST use Crow's Foot attributes:
     * One-to-Many: `edge [dir=both arrowtail=tee arrowhead=crow];`
     * Many-to-Many: `edge [dir=both arrowtail=crow arrowhead=crow];`
     * One-to-One: `edge [dir=both arrowtail=tee arrowhead=tee];`
   - Label the edges with specific cardinalities (e.g., label="1:N").

3. "business_rules":
   - Array of objects: {{ "BR_ID": "BR-01", "Type": "Structural", "RuleStatement": "...", "ERComponent": "Entity", "ImplementationTip": "...", "Rationale": "..." }}

4. "tables":
   - Array of objects: {{ "TableName": "...", "Description": "...", "Columns": [ {{ "ColumnName": "...", "DataType": "...", "IsPrimaryKey": true, "IsForeignKey": false, "IsNullable": false, "TargetTable": null, "ExtraConstraint": null }} ] }}
   - TableName, ColumnName and TargetTable must be plain identifiers: letters, digits and underscores only, not starting with a digit.

5. "normalization_steps":
   - Return a SINGLE STRING formatted in MARKDOWN.
   - Be CONCISE.
   - Create a STEP-BY-STEP SCENARIO with DUMMY DATA.
   - Format:
     ### 0NF
     (Brief explanation + Raw Markdown Table)
     ### 1NF
     (Brief explanation + Atomic Markdown Tables)
     ### 2NF
     (Brief explanation + Thematic Markdown Tables)
     ### 3NF
     (Brief explanation + Final Markdown Tables)
"#
    )
}
