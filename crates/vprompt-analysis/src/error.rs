//! Analysis error types.
//!
//! Every variant is terminal for the current request: the client never
//! recovers locally, and a failed call produces no report at all.

use thiserror::Error;

pub type AnalysisResult<T> = Result<T, AnalysisError>;

#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Provider unreachable or credentials rejected.
    #[error("analysis provider unavailable: {0}")]
    ProviderUnavailable(String),

    /// Provider responded, but the payload is not valid JSON matching the
    /// declared output schema. The raw payload is retained for diagnostics
    /// and is deliberately excluded from the display message.
    #[error("response violates output schema: {reason}")]
    SchemaViolation { reason: String, raw: String },

    /// The bounded wait for the provider elapsed.
    #[error("analysis timed out after {0} seconds")]
    Timeout(u64),

    /// Caller handed the builder unusable input (empty or oversized video).
    #[error("precondition violation: {0}")]
    PreconditionViolation(String),
}

impl AnalysisError {
    pub fn provider_unavailable(msg: impl Into<String>) -> Self {
        Self::ProviderUnavailable(msg.into())
    }

    pub fn schema_violation(reason: impl Into<String>, raw: impl Into<String>) -> Self {
        Self::SchemaViolation {
            reason: reason.into(),
            raw: raw.into(),
        }
    }

    pub fn precondition(msg: impl Into<String>) -> Self {
        Self::PreconditionViolation(msg.into())
    }

    /// The raw provider payload, when one was received and rejected.
    pub fn raw_payload(&self) -> Option<&str> {
        match self {
            Self::SchemaViolation { raw, .. } => Some(raw),
            _ => None,
        }
    }
}
