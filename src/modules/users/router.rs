use crate::modules::users::controller::{get_current_user, get_user_courses, register_user};
use crate::state::AppState;
use axum::{Router, routing::get};

pub fn init_users_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_current_user).post(register_user))
        .route("/{id}/courses", get(get_user_courses))
}
