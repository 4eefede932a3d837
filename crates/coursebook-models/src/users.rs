//! User domain models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::ids::UserId;
use crate::validation::not_blank;

/// A registered user, as stored minus the credential.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct User {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// A user row together with its bcrypt hash. Never serialized.
#[derive(FromRow, Debug, Clone)]
pub struct UserWithPassword {
    #[sqlx(flatten)]
    pub user: User,
    pub password: String,
}

/// Registration request body.
///
/// Fields are optional at the serde level so that a missing field is reported
/// with the same `{"errors": [...]}` shape as an empty one.
#[derive(Deserialize, Debug, Clone, Default, Validate, ToSchema)]
pub struct RegisterUserDto {
    #[serde(default, alias = "firstName")]
    #[validate(
        required(message = "A first name is required"),
        custom(function = "not_blank", message = "Please provide a first name")
    )]
    #[schema(example = "Joe")]
    pub first_name: Option<String>,

    #[serde(default, alias = "lastName")]
    #[validate(
        required(message = "A last name is required"),
        custom(function = "not_blank", message = "Please provide a last name")
    )]
    #[schema(example = "Smith")]
    pub last_name: Option<String>,

    #[serde(default, alias = "emailAddress")]
    #[validate(
        required(message = "An email address is required"),
        email(message = "Please provide a valid email address")
    )]
    #[schema(example = "joe@smith.com")]
    pub email: Option<String>,

    #[serde(default)]
    #[validate(
        required(message = "A password is required"),
        custom(function = "not_blank", message = "Please provide a password")
    )]
    #[schema(example = "joepassword")]
    pub password: Option<String>,
}

/// A validated registration, ready to persist.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password_hash: String,
}

impl NewUser {
    /// Builds the insert payload from an already validated request.
    pub fn from_dto(dto: RegisterUserDto, password_hash: String) -> Self {
        Self {
            first_name: dto.first_name.unwrap_or_default(),
            last_name: dto.last_name.unwrap_or_default(),
            email: dto.email.unwrap_or_default(),
            password_hash,
        }
    }
}

/// Body of `GET /api/users`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct CurrentUserResponse {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_dto() -> RegisterUserDto {
        RegisterUserDto {
            first_name: Some("Joe".to_string()),
            last_name: Some("Smith".to_string()),
            email: Some("joe@smith.com".to_string()),
            password: Some("joepassword".to_string()),
        }
    }

    fn messages(dto: &RegisterUserDto) -> Vec<String> {
        dto.validate()
            .unwrap_err()
            .field_errors()
            .values()
            .flat_map(|errors| errors.iter())
            .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
            .collect()
    }

    #[test]
    fn test_register_dto_valid() {
        assert!(valid_dto().validate().is_ok());
    }

    #[test]
    fn test_register_dto_missing_fields() {
        let all = messages(&RegisterUserDto::default());

        assert_eq!(all.len(), 4);
        assert!(all.contains(&"A first name is required".to_string()));
        assert!(all.contains(&"A password is required".to_string()));
    }

    #[test]
    fn test_register_dto_empty_first_name() {
        let dto = RegisterUserDto {
            first_name: Some(String::new()),
            ..valid_dto()
        };

        assert_eq!(messages(&dto), vec!["Please provide a first name".to_string()]);
    }

    #[test]
    fn test_register_dto_rejects_whitespace_only_values() {
        let dto = RegisterUserDto {
            first_name: Some("   ".to_string()),
            last_name: Some("\t".to_string()),
            password: Some(" \n ".to_string()),
            ..valid_dto()
        };

        let all = messages(&dto);
        assert_eq!(all.len(), 3);
        assert!(all.contains(&"Please provide a first name".to_string()));
        assert!(all.contains(&"Please provide a last name".to_string()));
        assert!(all.contains(&"Please provide a password".to_string()));
    }

    #[test]
    fn test_register_dto_invalid_email() {
        let dto = RegisterUserDto {
            email: Some("not-an-email".to_string()),
            ..valid_dto()
        };

        assert_eq!(
            messages(&dto),
            vec!["Please provide a valid email address".to_string()]
        );
    }

    #[test]
    fn test_register_dto_accepts_camel_case_aliases() {
        let dto: RegisterUserDto = serde_json::from_value(serde_json::json!({
            "firstName": "Joe",
            "lastName": "Smith",
            "emailAddress": "joe@smith.com",
            "password": "joepassword"
        }))
        .unwrap();

        assert!(dto.validate().is_ok());
        assert_eq!(dto.email.as_deref(), Some("joe@smith.com"));
    }

    #[test]
    fn test_new_user_from_dto() {
        let user = NewUser::from_dto(valid_dto(), "$2b$hash".to_string());

        assert_eq!(user.first_name, "Joe");
        assert_eq!(user.email, "joe@smith.com");
        assert_eq!(user.password_hash, "$2b$hash");
    }
}
