use thiserror::Error;

/// Errors returned by product construction and invoice mutation.
///
/// Every error is a caller error detected before any state changes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum FakturaError {
    /// An argument violated a documented precondition.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl FakturaError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}

/// Result alias used throughout the crate.
pub type Result<T, E = FakturaError> = std::result::Result<T, E>;
