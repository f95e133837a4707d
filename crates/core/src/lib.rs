//! Domain logic for the database design assistant.
//!
//! Everything in this crate is pure: no database, no HTTP. The store and
//! the generation client build on these types.

pub mod design;
pub mod error;
pub mod identifier;
pub mod parse;
pub mod prompt;
pub mod reconstruct;
pub mod session;
pub mod types;
