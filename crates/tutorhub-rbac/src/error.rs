//! Error types for the reconciliation core.

use thiserror::Error;

/// Error type for storage backends.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The persistence layer cannot be reached or rejected the operation.
    ///
    /// Propagated as-is; retry policy belongs to the caller, not the core.
    #[error("storage unavailable: {0}")]
    Unavailable(#[source] anyhow::Error),
}

impl StoreError {
    /// Wrap a backend error as [`StoreError::Unavailable`].
    pub fn unavailable<E>(err: E) -> Self
    where
        E: Into<anyhow::Error>,
    {
        Self::Unavailable(err.into())
    }
}

/// Error type for reconciliation operations.
///
/// The unknown-reference variants are only produced under
/// [`ResolutionPolicy::Strict`](crate::ResolutionPolicy::Strict); the default
/// lenient policy logs and skips instead.
#[derive(Debug, Error)]
pub enum ReconcileError {
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A declared role does not exist in storage at assignment time.
    #[error("unknown role '{0}'")]
    UnknownRole(String),

    /// Declared permission names with no stored permission row.
    #[error("unknown permissions for role '{role}': {names:?}")]
    UnknownPermissions { role: String, names: Vec<String> },
}
