use coursebook_models::{Course, CourseWithOwner, UserId};

use crate::error::{AuthFailure, GateError};
use crate::principal::Principal;

/// A record with exactly one owning principal.
pub trait Owned {
    fn owner_id(&self) -> UserId;
}

impl Owned for Course {
    fn owner_id(&self) -> UserId {
        self.user_id
    }
}

impl Owned for CourseWithOwner {
    fn owner_id(&self) -> UserId {
        self.course.user_id
    }
}

/// Succeeds only when `principal` owns `resource`.
pub fn authorize<R>(principal: &Principal, resource: &R) -> Result<(), AuthFailure>
where
    R: Owned + ?Sized,
{
    if resource.owner_id() == principal.id {
        Ok(())
    } else {
        Err(AuthFailure::Forbidden)
    }
}

/// Takes the result of loading a resource by id and lets the request through
/// only if it exists and belongs to `principal`, in that order.
pub fn admit<R>(
    principal: &Principal,
    resource: Option<R>,
    kind: &'static str,
) -> Result<R, GateError>
where
    R: Owned,
{
    let resource = resource.ok_or(GateError::ResourceNotFound { resource: kind })?;
    authorize(principal, &resource)?;
    Ok(resource)
}

#[cfg(test)]
mod tests {
    use super::*;
    use coursebook_models::CourseId;
    use std::cell::Cell;

    fn principal(id: i64) -> Principal {
        Principal {
            id: UserId(id),
            first_name: "Test".to_string(),
            last_name: "User".to_string(),
            email: format!("user{}@test.com", id),
        }
    }

    fn course(id: i64, owner: i64) -> Course {
        let now = chrono::Utc::now();
        Course {
            id: CourseId(id),
            title: "Bookcase".to_string(),
            description: "Build one".to_string(),
            estimated_time: None,
            materials_needed: None,
            user_id: UserId(owner),
            created_at: now,
            updated_at: now,
        }
    }

    #[derive(Debug)]
    struct Tracked<'a> {
        owner: UserId,
        checked: &'a Cell<bool>,
    }

    impl Owned for Tracked<'_> {
        fn owner_id(&self) -> UserId {
            self.checked.set(true);
            self.owner
        }
    }

    #[test]
    fn test_owner_is_authorized() {
        assert_eq!(authorize(&principal(1), &course(10, 1)), Ok(()));
    }

    #[test]
    fn test_non_owner_is_forbidden() {
        assert_eq!(
            authorize(&principal(2), &course(10, 1)),
            Err(AuthFailure::Forbidden)
        );
    }

    #[test]
    fn test_compares_owner_not_resource_id() {
        // Principal 10 matches the course id but not its owner.
        assert_eq!(
            authorize(&principal(10), &course(10, 1)),
            Err(AuthFailure::Forbidden)
        );
    }

    #[test]
    fn test_authorize_over_id_grid() {
        for owner in 1..=4 {
            for caller in 1..=4 {
                let result = authorize(&principal(caller), &course(99, owner));
                assert_eq!(result.is_ok(), owner == caller);
            }
        }
    }

    #[test]
    fn test_admit_missing_resource_is_not_found() {
        let err = admit::<Course>(&principal(1), None, "Course").unwrap_err();

        assert!(matches!(
            err,
            GateError::ResourceNotFound { resource: "Course" }
        ));
    }

    #[test]
    fn test_admit_never_checks_ownership_of_missing_resource() {
        let checked = Cell::new(false);
        let missing: Option<Tracked<'_>> = None;

        let err = admit(&principal(1), missing, "Course").unwrap_err();
        assert!(matches!(err, GateError::ResourceNotFound { .. }));
        assert!(!checked.get());

        let present = Tracked {
            owner: UserId(1),
            checked: &checked,
        };
        assert!(admit(&principal(1), Some(present), "Course").is_ok());
        assert!(checked.get());
    }

    #[test]
    fn test_admit_forbidden_for_non_owner() {
        let err = admit(&principal(2), Some(course(10, 1)), "Course").unwrap_err();

        assert_eq!(err.auth_failure(), Some(AuthFailure::Forbidden));
    }

    #[test]
    fn test_admit_returns_resource_to_owner() {
        let admitted = admit(&principal(1), Some(course(10, 1)), "Course").unwrap();

        assert_eq!(admitted.id, CourseId(10));
    }
}
