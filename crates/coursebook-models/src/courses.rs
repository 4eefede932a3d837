//! Course domain models and DTOs.
//!
//! A course is owned by exactly one user (`user_id`). Only the owner may
//! update or delete it; anyone may read it.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::ids::{CourseId, UserId};
use crate::validation::not_blank;
use crate::users::User;

#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct Course {
    pub id: CourseId,
    pub title: String,
    pub description: String,
    pub estimated_time: Option<String>,
    pub materials_needed: Option<String>,
    /// Owner of the course.
    pub user_id: UserId,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// Public summary of a course owner.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct CourseOwner {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl From<&User> for CourseOwner {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
        }
    }
}

/// Read model returned by the course listing and detail endpoints.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct CourseWithOwner {
    #[serde(flatten)]
    pub course: Course,
    pub owner: CourseOwner,
}

/// Create and update request body.
///
/// `PUT` replaces every writable field, so both verbs share this shape.
#[derive(Deserialize, Debug, Clone, Default, Validate, ToSchema)]
pub struct CourseDto {
    #[serde(default)]
    #[validate(
        required(message = "A title is required"),
        custom(function = "not_blank", message = "Please provide a title")
    )]
    #[schema(example = "Build a Basic Bookcase")]
    pub title: Option<String>,

    #[serde(default)]
    #[validate(
        required(message = "A description is required"),
        custom(function = "not_blank", message = "Please provide a description")
    )]
    pub description: Option<String>,

    #[serde(default, alias = "estimatedTime")]
    #[schema(example = "12 hours")]
    pub estimated_time: Option<String>,

    #[serde(default, alias = "materialsNeeded")]
    pub materials_needed: Option<String>,
}

impl CourseDto {
    /// Call only after `validate()` succeeded.
    pub fn into_new_course(self) -> NewCourse {
        NewCourse {
            title: self.title.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            estimated_time: self.estimated_time,
            materials_needed: self.materials_needed,
        }
    }
}

/// Validated writable fields of a course.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCourse {
    pub title: String,
    pub description: String,
    pub estimated_time: Option<String>,
    pub materials_needed: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_dto_requires_title_and_description() {
        let errors = CourseDto::default().validate().unwrap_err();
        let fields = errors.field_errors();

        assert!(fields.contains_key("title"));
        assert!(fields.contains_key("description"));
        assert!(!fields.contains_key("estimated_time"));
    }

    #[test]
    fn test_course_dto_rejects_empty_title() {
        let dto = CourseDto {
            title: Some(String::new()),
            description: Some("Learn to build".to_string()),
            ..Default::default()
        };
        let errors = dto.validate().unwrap_err();
        let title_errors = errors.field_errors()["title"];

        assert_eq!(
            title_errors[0].message.as_deref(),
            Some("Please provide a title")
        );
    }

    #[test]
    fn test_course_dto_rejects_whitespace_only_values() {
        let dto = CourseDto {
            title: Some("   ".to_string()),
            description: Some("\n\t".to_string()),
            ..Default::default()
        };
        let errors = dto.validate().unwrap_err();
        let fields = errors.field_errors();

        assert_eq!(
            fields["title"][0].message.as_deref(),
            Some("Please provide a title")
        );
        assert_eq!(
            fields["description"][0].message.as_deref(),
            Some("Please provide a description")
        );
    }

    #[test]
    fn test_course_dto_into_new_course() {
        let dto: CourseDto = serde_json::from_value(serde_json::json!({
            "title": "Bookcase",
            "description": "Build one",
            "estimatedTime": "12 hours"
        }))
        .unwrap();

        assert!(dto.validate().is_ok());
        assert_eq!(
            dto.into_new_course(),
            NewCourse {
                title: "Bookcase".to_string(),
                description: "Build one".to_string(),
                estimated_time: Some("12 hours".to_string()),
                materials_needed: None,
            }
        );
    }

    #[test]
    fn test_course_with_owner_flattens_course() {
        let now = chrono::Utc::now();
        let view = CourseWithOwner {
            course: Course {
                id: CourseId(10),
                title: "Bookcase".to_string(),
                description: "Build one".to_string(),
                estimated_time: None,
                materials_needed: None,
                user_id: UserId(1),
                created_at: now,
                updated_at: now,
            },
            owner: CourseOwner {
                id: UserId(1),
                first_name: "Joe".to_string(),
                last_name: "Smith".to_string(),
                email: "joe@smith.com".to_string(),
            },
        };

        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["id"], 10);
        assert_eq!(json["user_id"], 1);
        assert_eq!(json["owner"]["email"], "joe@smith.com");
    }
}
