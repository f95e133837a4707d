//! Client for the hosted model that generates database designs.
//!
//! Provides configuration loading, the [`DesignGenerator`] seam used by
//! the API, and an OpenAI-compatible chat-completions implementation.

pub mod client;
pub mod config;
pub mod error;
pub mod generator;

pub use client::OpenAiDesignClient;
pub use config::GenAiConfig;
pub use error::GenAiError;
pub use generator::DesignGenerator;
