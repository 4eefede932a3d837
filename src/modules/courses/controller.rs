use axum::{
    Json,
    extract::State,
    http::{StatusCode, header},
    response::IntoResponse,
};
use coursebook_core::AppError;
use coursebook_models::{CourseDto, CourseId, CourseWithOwner, MessageResponse};
use tracing::instrument;

use crate::metrics::{track_course_created, track_course_mutation};
use crate::middleware::auth::CurrentUser;
use crate::modules::courses::service::CourseService;
use crate::state::AppState;
use crate::validator::{ValidatedJson, ValidatedPath};

#[utoipa::path(
    get,
    path = "/api/courses",
    responses(
        (status = 200, description = "All courses with their owners", body = Vec<CourseWithOwner>),
        (status = 500, description = "Internal server error", body = MessageResponse)
    ),
    tag = "Courses"
)]
#[instrument(skip(state))]
pub async fn get_courses(
    State(state): State<AppState>,
) -> Result<Json<Vec<CourseWithOwner>>, AppError> {
    let courses = CourseService::list(state.store.as_ref()).await?;
    Ok(Json(courses))
}

#[utoipa::path(
    get,
    path = "/api/courses/{id}",
    params(
        ("id" = i64, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "Course details", body = CourseWithOwner),
        (status = 400, description = "Malformed id", body = MessageResponse),
        (status = 404, description = "Course not found", body = MessageResponse),
        (status = 500, description = "Internal server error", body = MessageResponse)
    ),
    tag = "Courses"
)]
#[instrument(skip(state))]
pub async fn get_course(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<CourseId>,
) -> Result<Json<CourseWithOwner>, AppError> {
    let course = CourseService::get(state.store.as_ref(), id).await?;
    Ok(Json(course))
}

#[utoipa::path(
    post,
    path = "/api/courses",
    request_body = CourseDto,
    responses(
        (status = 201, description = "Course created", body = MessageResponse,
            headers(("Location" = String, description = "URI of the new course"))),
        (status = 400, description = "Validation failed"),
        (status = 401, description = "Missing or invalid credentials", body = MessageResponse),
        (status = 500, description = "Internal server error", body = MessageResponse)
    ),
    security(
        ("basic_auth" = [])
    ),
    tag = "Courses"
)]
#[instrument(skip_all, fields(user_id = %user.id))]
pub async fn create_course(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    ValidatedJson(dto): ValidatedJson<CourseDto>,
) -> Result<impl IntoResponse, AppError> {
    let course = CourseService::create(state.store.as_ref(), &user, dto).await?;
    track_course_created();

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/api/courses/{}", course.id))],
        Json(MessageResponse::new("Course successfully created!")),
    ))
}

#[utoipa::path(
    put,
    path = "/api/courses/{id}",
    params(
        ("id" = i64, Path, description = "Course ID")
    ),
    request_body = CourseDto,
    responses(
        (status = 204, description = "Course updated"),
        (status = 400, description = "Validation failed"),
        (status = 401, description = "Missing or invalid credentials", body = MessageResponse),
        (status = 403, description = "Not the owner of the course", body = MessageResponse),
        (status = 404, description = "Course not found", body = MessageResponse),
        (status = 500, description = "Internal server error", body = MessageResponse)
    ),
    security(
        ("basic_auth" = [])
    ),
    tag = "Courses"
)]
#[instrument(skip_all, fields(user_id = %user.id, course_id = %id))]
pub async fn update_course(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    ValidatedPath(id): ValidatedPath<CourseId>,
    ValidatedJson(dto): ValidatedJson<CourseDto>,
) -> Result<StatusCode, AppError> {
    CourseService::update(state.store.as_ref(), &user, id, dto).await?;
    track_course_mutation("update");

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/api/courses/{id}",
    params(
        ("id" = i64, Path, description = "Course ID")
    ),
    responses(
        (status = 204, description = "Course deleted"),
        (status = 400, description = "Malformed id", body = MessageResponse),
        (status = 401, description = "Missing or invalid credentials", body = MessageResponse),
        (status = 403, description = "Not the owner of the course", body = MessageResponse),
        (status = 404, description = "Course not found", body = MessageResponse),
        (status = 500, description = "Internal server error", body = MessageResponse)
    ),
    security(
        ("basic_auth" = [])
    ),
    tag = "Courses"
)]
#[instrument(skip_all, fields(user_id = %user.id, course_id = %id))]
pub async fn delete_course(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    ValidatedPath(id): ValidatedPath<CourseId>,
) -> Result<StatusCode, AppError> {
    CourseService::delete(state.store.as_ref(), &user, id).await?;
    track_course_mutation("delete");

    Ok(StatusCode::NO_CONTENT)
}
