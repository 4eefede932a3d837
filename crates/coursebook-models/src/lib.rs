//! # Coursebook Models
//!
//! Domain models and DTOs for the Coursebook API: database rows, request
//! bodies with their validation rules, and response shapes.
//!
//! # Modules
//!
//! - [`ids`]: Strongly-typed `i64` ids
//! - [`users`]: Registered users and registration requests
//! - [`courses`]: Courses, their owners and create/update requests
//! - [`validation`]: Field validators shared by the request bodies
//!
//! # Example
//!
//! ```ignore
//! use coursebook_models::{CourseDto, CourseId, UserId};
//! use validator::Validate;
//!
//! let dto: CourseDto = serde_json::from_value(body)?;
//! dto.validate()?;
//! let course = dto.into_new_course();
//! ```

pub mod courses;
pub mod ids;
pub mod users;
pub mod validation;

// Re-export commonly used types at crate root for convenience
pub use courses::{Course, CourseDto, CourseOwner, CourseWithOwner, NewCourse};
pub use ids::{CourseId, UserId};
pub use users::{CurrentUserResponse, MessageResponse, NewUser, RegisterUserDto, User, UserWithPassword};
