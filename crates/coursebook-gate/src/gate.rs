use coursebook_core::password::{hash_password_with_cost, verify_password};
use tracing::{debug, instrument, warn};

use crate::credentials::Credentials;
use crate::error::{AuthFailure, GateError};
use crate::principal::{Principal, PrincipalSource};

/// Authenticates requests against a [`PrincipalSource`].
///
/// Holds no per-request state. The only field is a bcrypt hash of a throwaway
/// secret, verified against when the identifier is unknown so that an unknown
/// account costs as much as a wrong password.
#[derive(Clone)]
pub struct Gate {
    dummy_hash: String,
}

impl std::fmt::Debug for Gate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Gate").finish_non_exhaustive()
    }
}

impl Gate {
    /// `cost` should match the cost used for stored hashes.
    pub fn new(cost: u32) -> anyhow::Result<Self> {
        let dummy_hash = hash_password_with_cost("coursebook-unknown-principal", cost)
            .map_err(|e| e.error)?;
        Ok(Self { dummy_hash })
    }

    /// Resolves the request's principal.
    ///
    /// `NotFound` and `Mismatch` are both returned as distinct tags for
    /// logging, but callers must surface them identically.
    #[instrument(skip(self, source, credentials), fields(identifier = tracing::field::Empty))]
    pub async fn authenticate<S>(
        &self,
        source: &S,
        credentials: Option<&Credentials>,
    ) -> Result<Principal, GateError>
    where
        S: PrincipalSource + ?Sized,
    {
        let Some(credentials) = credentials else {
            debug!("No credentials supplied");
            return Err(AuthFailure::Missing.into());
        };
        tracing::Span::current().record("identifier", credentials.identifier.as_str());

        let stored = source
            .principal_by_email(&credentials.identifier)
            .await
            .map_err(GateError::Store)?;

        let Some(stored) = stored else {
            let _ = verify_password(&credentials.secret, &self.dummy_hash);
            debug!("Unknown principal");
            return Err(AuthFailure::NotFound.into());
        };

        match verify_password(&credentials.secret, &stored.password_hash) {
            Ok(true) => Ok(stored.principal),
            Ok(false) => {
                debug!(principal_id = %stored.principal.id, "Credential mismatch");
                Err(AuthFailure::Mismatch.into())
            }
            Err(err) => {
                warn!(
                    principal_id = %stored.principal.id,
                    error = %err.error,
                    "Stored credential is not a bcrypt hash"
                );
                Err(AuthFailure::Mismatch.into())
            }
        }
    }
}
