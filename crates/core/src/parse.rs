//! Parsing of raw generation-service replies into a [`DesignRecord`].
//!
//! Models are told to answer with bare JSON but regularly wrap it in a
//! markdown code fence anyway, so fences are stripped first. The result is
//! then checked for the five required keys before being deserialized, so
//! a truncated reply reports exactly which sections are missing.

use serde_json::Value;

use crate::design::DesignRecord;
use crate::error::CoreError;

/// Top-level keys every reply must carry, in the order the model is asked
/// to emit them.
pub const REQUIRED_KEYS: [&str; 5] = [
    "sql_code",
    "graphviz_dot",
    "business_rules",
    "tables",
    "normalization_steps",
];

/// Remove every "```json" / "```" marker and surrounding whitespace.
pub fn strip_code_fences(text: &str) -> String {
    text.replace("```json", "").replace("```", "").trim().to_string()
}

/// Parse a raw model reply into a validated [`DesignRecord`].
///
/// Fails with [`CoreError::Validation`] when the reply is not a JSON object,
/// lacks any of [`REQUIRED_KEYS`], has fields of the wrong shape, or names a
/// table/column that is not a safe identifier.
pub fn parse_design_reply(text: &str) -> Result<DesignRecord, CoreError> {
    let cleaned = strip_code_fences(text);
    if cleaned.is_empty() {
        return Err(CoreError::Validation(
            "Design reply is empty".to_string(),
        ));
    }

    let value: Value = serde_json::from_str(&cleaned).map_err(|e| {
        CoreError::Validation(format!("Design reply is not valid JSON: {e}"))
    })?;

    let Some(object) = value.as_object() else {
        return Err(CoreError::Validation(
            "Design reply must be a JSON object".to_string(),
        ));
    };

    let missing: Vec<&str> = REQUIRED_KEYS
        .iter()
        .copied()
        .filter(|key| !object.contains_key(*key))
        .collect();
    if !missing.is_empty() {
        return Err(CoreError::Validation(format!(
            "Design reply is missing keys: {}",
            missing.join(", ")
        )));
    }

    let record: DesignRecord = serde_json::from_value(value).map_err(|e| {
        CoreError::Validation(format!("Design reply has an unexpected shape: {e}"))
    })?;

    record.validate_identifiers()?;
    Ok(record)
}
