//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods. Reads
//! accept any SQLite executor (pool or a held connection); writes that are
//! part of a save run inside the caller's transaction.

pub mod business_rule_repo;
pub mod design_repo;
pub mod designed_table_repo;
pub mod project_repo;

pub use business_rule_repo::BusinessRuleRepo;
pub use design_repo::DesignRepo;
pub use designed_table_repo::DesignedTableRepo;
pub use project_repo::ProjectRepo;
