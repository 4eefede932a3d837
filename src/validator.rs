use anyhow::anyhow;
use axum::{
    Json,
    extract::{
        FromRequest, FromRequestParts, Path, Request,
        rejection::{JsonRejection, PathRejection},
    },
    http::request::Parts,
};
use coursebook_core::AppError;
use serde::de::DeserializeOwned;
use validator::Validate;

/// JSON body that has already passed its `validator` constraints.
///
/// Bodies that are not JSON at all are rejected with `{"message": ...}`;
/// constraint failures become `{"errors": [...]}`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| match rejection {
                JsonRejection::MissingJsonContentType(_) => {
                    AppError::bad_request(anyhow!("Missing 'Content-Type: application/json' header"))
                }
                JsonRejection::JsonDataError(_) => {
                    AppError::bad_request(anyhow!("Invalid field type in request"))
                }
                _ => AppError::bad_request(anyhow!("Invalid request body")),
            })?;

        value.validate()?;

        Ok(ValidatedJson(value))
    }
}

/// Path parameters, with a malformed value (`/api/courses/abc`) answered by
/// a JSON 400 like every other client error.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedPath<T>(pub T);

impl<T, S> FromRequestParts<S> for ValidatedPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| match rejection {
                PathRejection::FailedToDeserializePathParams(_) => {
                    AppError::bad_request(anyhow!("Invalid id in request path"))
                }
                other => AppError::internal(anyhow!(other.body_text())),
            })?;

        Ok(ValidatedPath(value))
    }
}
