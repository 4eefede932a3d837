use coursebook_core::AppError;
use thiserror::Error;

/// Body of every 401 and 403 produced by the gate.
pub const ACCESS_DENIED: &str = "Access Denied";

/// Expected, tagged outcomes of the gate. None of these are exceptional.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AuthFailure {
    /// The request carried no usable credential.
    #[error("missing credentials")]
    Missing,

    /// No principal is registered under the supplied identifier.
    #[error("unknown principal")]
    NotFound,

    /// The principal exists but the secret does not match.
    #[error("credential mismatch")]
    Mismatch,

    /// Authenticated, but not the owner of the target resource.
    #[error("Access Denied")]
    Forbidden,
}

impl AuthFailure {
    /// `true` for the failures a client must not be able to tell apart.
    pub fn is_credential_failure(&self) -> bool {
        matches!(self, Self::NotFound | Self::Mismatch)
    }

    /// `true` when the request never established an identity.
    pub fn is_unauthenticated(&self) -> bool {
        !matches!(self, Self::Forbidden)
    }
}

#[derive(Debug, Error)]
pub enum GateError {
    #[error(transparent)]
    Auth(#[from] AuthFailure),

    /// The target resource does not exist. Reported before ownership.
    #[error("{resource} Not Found")]
    ResourceNotFound { resource: &'static str },

    /// The principal store failed; not an authentication outcome.
    #[error("principal store failure: {0}")]
    Store(#[source] anyhow::Error),
}

impl GateError {
    pub fn auth_failure(&self) -> Option<AuthFailure> {
        match self {
            Self::Auth(failure) => Some(*failure),
            _ => None,
        }
    }
}

/// `Missing`, `NotFound` and `Mismatch` collapse into one 401 so a client
/// cannot tell which accounts exist.
impl From<GateError> for AppError {
    fn from(err: GateError) -> Self {
        match err {
            GateError::Auth(AuthFailure::Forbidden) => {
                AppError::forbidden(anyhow::anyhow!(ACCESS_DENIED))
            }
            GateError::Auth(_) => AppError::unauthorized(anyhow::anyhow!(ACCESS_DENIED)),
            GateError::ResourceNotFound { .. } => AppError::not_found(err),
            GateError::Store(source) => AppError::internal(source),
        }
    }
}
