use async_trait::async_trait;
use dbarchitect_core::design::{DesignRecord, DesignRequest};

use crate::error::GenAiError;

/// Anything that can turn a design request into a design record.
///
/// The API holds one behind an `Arc<dyn DesignGenerator>` so tests can swap
/// in a canned implementation.
#[async_trait]
pub trait DesignGenerator: Send + Sync {
    async fn generate(&self, request: &DesignRequest) -> Result<DesignRecord, GenAiError>;
}
