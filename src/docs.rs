use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use coursebook_models::{
    Course, CourseDto, CourseOwner, CourseWithOwner, CurrentUserResponse, MessageResponse,
    RegisterUserDto,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::users::controller::get_current_user,
        crate::modules::users::controller::register_user,
        crate::modules::users::controller::get_user_courses,
        crate::modules::courses::controller::get_courses,
        crate::modules::courses::controller::get_course,
        crate::modules::courses::controller::create_course,
        crate::modules::courses::controller::update_course,
        crate::modules::courses::controller::delete_course,
    ),
    components(
        schemas(
            Course,
            CourseDto,
            CourseOwner,
            CourseWithOwner,
            CurrentUserResponse,
            MessageResponse,
            RegisterUserDto,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Users", description = "Account registration and the current user"),
        (name = "Courses", description = "Course catalog; mutations are restricted to the owner")
    ),
    info(
        title = "Coursebook API",
        version = "0.1.0",
        description = "Course catalog REST API with HTTP Basic authentication and owner-only mutations.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "basic_auth",
                SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Basic).build()),
            )
        }
    }
}
