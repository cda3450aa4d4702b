//! Error type shared by domains, orbit expansion, projection, and assembly.

use std::fmt;

/// Errors surfaced by the core and the catalogue.
///
/// None of these are retried internally. Falling back from an exact to an
/// approximate domain is a caller decision.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PolytopeError {
    /// A value is not representable in the requested domain, or would need a
    /// field extension the caller did not allow.
    DomainMismatch { reason: String },
    /// Empty, non-closed, or dimension-incompatible group action.
    InvalidGroupAction { reason: String },
    /// Pass-through from the hull backend.
    BackendFailure { backend: String, reason: String },
    /// Arguments out of range (dimensions, counts, zero divisors).
    InvalidParams { reason: String },
}

impl PolytopeError {
    pub(crate) fn mismatch(reason: impl Into<String>) -> Self {
        Self::DomainMismatch {
            reason: reason.into(),
        }
    }

    pub(crate) fn group(reason: impl Into<String>) -> Self {
        Self::InvalidGroupAction {
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParams {
            reason: reason.into(),
        }
    }

    /// Re-tag a group construction failure as a bad recipe argument.
    pub(crate) fn into_params(self) -> Self {
        match self {
            Self::InvalidGroupAction { reason } => Self::InvalidParams { reason },
            other => other,
        }
    }

    /// Backend failures are public so external `HullBackend`s can build them.
    pub fn backend(backend: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::BackendFailure {
            backend: backend.into(),
            reason: reason.into(),
        }
    }

    #[inline]
    pub fn is_domain_mismatch(&self) -> bool {
        matches!(self, Self::DomainMismatch { .. })
    }
}

impl fmt::Display for PolytopeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DomainMismatch { reason } => write!(f, "domain mismatch: {reason}"),
            Self::InvalidGroupAction { reason } => write!(f, "invalid group action: {reason}"),
            Self::BackendFailure { backend, reason } => {
                write!(f, "backend `{backend}` failed: {reason}")
            }
            Self::InvalidParams { reason } => write!(f, "invalid params: {reason}"),
        }
    }
}

impl std::error::Error for PolytopeError {}
