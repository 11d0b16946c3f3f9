//! Fault injection errors.

use thiserror::Error;

/// Errors raised by the fault injection core
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FaultError {
    /// Configuration rejected at construction time
    #[error("Invalid fault configuration: {0}")]
    InvalidConfig(String),

    /// An injected delay was abandoned because the request was cancelled
    #[error("Request cancelled during injected delay")]
    Cancelled,
}

impl FaultError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Whether this error came from construction-time validation
    #[must_use]
    pub const fn is_invalid_config(&self) -> bool {
        matches!(self, Self::InvalidConfig(_))
    }
}
