//! Repository traits injected into the gate and handlers.

use async_trait::async_trait;
use coursebook_gate::PrincipalSource;
use coursebook_models::{Course, CourseId, CourseWithOwner, NewCourse, NewUser, User, UserId};

use crate::error::StoreError;

#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_user(&self, id: UserId) -> Result<Option<User>, StoreError>;

    /// Fails with [`StoreError::UniqueViolation`] when the email is taken.
    async fn create_user(&self, user: NewUser) -> Result<User, StoreError>;
}

#[async_trait]
pub trait CourseStore: Send + Sync {
    async fn list_courses(&self) -> Result<Vec<CourseWithOwner>, StoreError>;

    async fn list_courses_by_owner(&self, owner: UserId)
    -> Result<Vec<CourseWithOwner>, StoreError>;

    async fn find_course(&self, id: CourseId) -> Result<Option<Course>, StoreError>;

    async fn find_course_with_owner(
        &self,
        id: CourseId,
    ) -> Result<Option<CourseWithOwner>, StoreError>;

    async fn create_course(&self, owner: UserId, course: NewCourse) -> Result<Course, StoreError>;

    /// Replaces the writable fields of a course still owned by `owner`.
    /// `None` when no such row exists anymore.
    async fn update_course(
        &self,
        id: CourseId,
        owner: UserId,
        course: NewCourse,
    ) -> Result<Option<Course>, StoreError>;

    /// `false` when no course with that id and owner existed.
    async fn delete_course(&self, id: CourseId, owner: UserId) -> Result<bool, StoreError>;
}

/// Everything the application needs from persistence.
pub trait CatalogStore: UserStore + CourseStore + PrincipalSource {}

impl<T> CatalogStore for T where T: UserStore + CourseStore + PrincipalSource {}
