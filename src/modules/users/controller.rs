use axum::{
    Json,
    extract::State,
    http::{StatusCode, header},
    response::IntoResponse,
};
use coursebook_core::AppError;
use coursebook_models::{
    CourseWithOwner, CurrentUserResponse, MessageResponse, RegisterUserDto, UserId,
};
use tracing::instrument;

use crate::metrics::track_user_created;
use crate::middleware::auth::CurrentUser;
use crate::modules::users::service::UserService;
use crate::state::AppState;
use crate::validator::{ValidatedJson, ValidatedPath};

#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "The authenticated user", body = CurrentUserResponse),
        (status = 401, description = "Missing or invalid credentials", body = MessageResponse),
        (status = 500, description = "Internal server error", body = MessageResponse)
    ),
    security(
        ("basic_auth" = [])
    ),
    tag = "Users"
)]
#[instrument(skip_all, fields(user_id = %user.id))]
pub async fn get_current_user(CurrentUser(user): CurrentUser) -> Json<CurrentUserResponse> {
    Json(CurrentUserResponse {
        id: user.id,
        first_name: user.first_name,
        last_name: user.last_name,
        email: user.email,
    })
}

#[utoipa::path(
    post,
    path = "/api/users",
    request_body = RegisterUserDto,
    responses(
        (status = 201, description = "Account created", body = MessageResponse,
            headers(("Location" = String, description = "Always /api/users"))),
        (status = 400, description = "Validation failed or email already used"),
        (status = 500, description = "Internal server error", body = MessageResponse)
    ),
    tag = "Users"
)]
#[instrument(skip(state, dto))]
pub async fn register_user(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<RegisterUserDto>,
) -> Result<impl IntoResponse, AppError> {
    UserService::register(state.store.as_ref(), dto, state.security.bcrypt_cost).await?;
    track_user_created();

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, "/api/users")],
        Json(MessageResponse::new("Account successfully created!")),
    ))
}

#[utoipa::path(
    get,
    path = "/api/users/{id}/courses",
    params(
        ("id" = i64, Path, description = "Owner user ID")
    ),
    responses(
        (status = 200, description = "Courses owned by the user", body = Vec<CourseWithOwner>),
        (status = 400, description = "Malformed id", body = MessageResponse),
        (status = 404, description = "User not found", body = MessageResponse),
        (status = 500, description = "Internal server error", body = MessageResponse)
    ),
    tag = "Users"
)]
#[instrument(skip(state))]
pub async fn get_user_courses(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<UserId>,
) -> Result<Json<Vec<CourseWithOwner>>, AppError> {
    let courses = UserService::courses_of(state.store.as_ref(), id).await?;
    Ok(Json(courses))
}
