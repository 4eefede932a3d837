use axum::{extract::FromRequestParts, http::request::Parts};
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Basic},
};
use coursebook_core::AppError;
use coursebook_gate::{Credentials, Principal};

use crate::metrics::track_gate_failure;
use crate::state::AppState;

/// Extractor that runs the gate's authentication step on the
/// `Authorization: Basic` header and yields the authenticated principal.
///
/// An absent or undecodable header counts as no credential at all.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub Principal);

/// Decodes the Basic credential, if any. The email is the identifier.
pub async fn basic_credentials(parts: &mut Parts, state: &AppState) -> Option<Credentials> {
    let TypedHeader(Authorization(basic)) =
        TypedHeader::<Authorization<Basic>>::from_request_parts(parts, state)
            .await
            .ok()?;

    Some(Credentials::new(basic.username(), basic.password()))
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let credentials = basic_credentials(parts, state).await;

        let principal = state
            .gate
            .authenticate(state.store.as_ref(), credentials.as_ref())
            .await
            .inspect_err(track_gate_failure)?;

        Ok(CurrentUser(principal))
    }
}
