//! Session error types.

use thiserror::Error;

pub type SessionResult<T> = Result<T, SessionError>;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("snapshot I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("snapshot serialization error: {0}")]
    Snapshot(#[from] serde_json::Error),

    #[error("no authenticated user in this session")]
    NotAuthenticated,

    #[error("invalid profile: {0}")]
    InvalidProfile(String),

    #[error("verification code did not match")]
    VerificationFailed,

    #[error("cannot {action} from state {from}")]
    InvalidTransition {
        from: &'static str,
        action: &'static str,
    },
}

impl SessionError {
    pub(crate) fn invalid_transition(from: &'static str, action: &'static str) -> Self {
        Self::InvalidTransition { from, action }
    }
}
