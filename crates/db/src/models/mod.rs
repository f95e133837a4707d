//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts where the API accepts one
//! - Conversions into the `dbarchitect_core::design` types

pub mod business_rule;
pub mod design;
pub mod designed_table;
pub mod project;
