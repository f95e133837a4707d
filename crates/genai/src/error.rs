use dbarchitect_core::error::CoreError;

/// Errors from the design-generation service layer.
#[derive(Debug, thiserror::Error)]
pub enum GenAiError {
    /// The service credential is missing or malformed. Nothing was sent.
    #[error("Generation service is not configured: {0}")]
    Config(String),

    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The service returned a non-2xx status code.
    #[error("Generation service error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Upstream error message, or the raw body when it has none.
        message: String,
    },

    /// The reply carried no message content.
    #[error("Generation service returned an empty reply")]
    EmptyReply,

    /// The reply content could not be turned into a design record.
    #[error("Generation service reply is unusable: {0}")]
    InvalidReply(#[source] CoreError),
}
