//! In-process store enforcing the same constraints as the PostgreSQL schema
//! (unique email, owner foreign key). Used by tests and the `test-utils`
//! feature.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use coursebook_gate::{Principal, PrincipalSource, StoredPrincipal};
use coursebook_models::{
    Course, CourseId, CourseOwner, CourseWithOwner, NewCourse, NewUser, User, UserId,
};
use tokio::sync::RwLock;

use crate::error::StoreError;
use crate::store::{CourseStore, UserStore};

#[derive(Default)]
struct Tables {
    users: BTreeMap<UserId, (User, String)>,
    courses: BTreeMap<CourseId, Course>,
    last_user_id: i64,
    last_course_id: i64,
}

impl Tables {
    fn with_owner(&self, course: &Course) -> Option<CourseWithOwner> {
        let (owner, _) = self.users.get(&course.user_id)?;
        Some(CourseWithOwner {
            course: course.clone(),
            owner: CourseOwner::from(owner),
        })
    }
}

#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn course_count(&self) -> usize {
        self.tables.read().await.courses.len()
    }
}

#[async_trait]
impl PrincipalSource for MemoryStore {
    async fn principal_by_email(&self, email: &str) -> anyhow::Result<Option<StoredPrincipal>> {
        let tables = self.tables.read().await;
        Ok(tables
            .users
            .values()
            .find(|(user, _)| user.email == email)
            .map(|(user, hash)| StoredPrincipal {
                principal: Principal::from(user.clone()),
                password_hash: hash.clone(),
            }))
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn find_user(&self, id: UserId) -> Result<Option<User>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables.users.get(&id).map(|(user, _)| user.clone()))
    }

    async fn create_user(&self, user: NewUser) -> Result<User, StoreError> {
        let mut tables = self.tables.write().await;
        if tables.users.values().any(|(u, _)| u.email == user.email) {
            return Err(StoreError::UniqueViolation("users_email_key".to_string()));
        }

        tables.last_user_id += 1;
        let now = Utc::now();
        let created = User {
            id: UserId(tables.last_user_id),
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            created_at: now,
            updated_at: now,
        };
        tables
            .users
            .insert(created.id, (created.clone(), user.password_hash));

        Ok(created)
    }
}

#[async_trait]
impl CourseStore for MemoryStore {
    async fn list_courses(&self) -> Result<Vec<CourseWithOwner>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables
            .courses
            .values()
            .filter_map(|course| tables.with_owner(course))
            .collect())
    }

    async fn list_courses_by_owner(
        &self,
        owner: UserId,
    ) -> Result<Vec<CourseWithOwner>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables
            .courses
            .values()
            .filter(|course| course.user_id == owner)
            .filter_map(|course| tables.with_owner(course))
            .collect())
    }

    async fn find_course(&self, id: CourseId) -> Result<Option<Course>, StoreError> {
        Ok(self.tables.read().await.courses.get(&id).cloned())
    }

    async fn find_course_with_owner(
        &self,
        id: CourseId,
    ) -> Result<Option<CourseWithOwner>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables
            .courses
            .get(&id)
            .and_then(|course| tables.with_owner(course)))
    }

    async fn create_course(&self, owner: UserId, course: NewCourse) -> Result<Course, StoreError> {
        let mut tables = self.tables.write().await;
        if !tables.users.contains_key(&owner) {
            return Err(StoreError::ForeignKeyViolation(
                "courses_user_id_fkey".to_string(),
            ));
        }

        tables.last_course_id += 1;
        let now = Utc::now();
        let created = Course {
            id: CourseId(tables.last_course_id),
            title: course.title,
            description: course.description,
            estimated_time: course.estimated_time,
            materials_needed: course.materials_needed,
            user_id: owner,
            created_at: now,
            updated_at: now,
        };
        tables.courses.insert(created.id, created.clone());

        Ok(created)
    }

    async fn update_course(
        &self,
        id: CourseId,
        owner: UserId,
        course: NewCourse,
    ) -> Result<Option<Course>, StoreError> {
        let mut tables = self.tables.write().await;
        let Some(existing) = tables
            .courses
            .get_mut(&id)
            .filter(|existing| existing.user_id == owner)
        else {
            return Ok(None);
        };

        existing.title = course.title;
        existing.description = course.description;
        existing.estimated_time = course.estimated_time;
        existing.materials_needed = course.materials_needed;
        existing.updated_at = Utc::now();

        Ok(Some(existing.clone()))
    }

    async fn delete_course(&self, id: CourseId, owner: UserId) -> Result<bool, StoreError> {
        let mut tables = self.tables.write().await;
        let owned = tables
            .courses
            .get(&id)
            .is_some_and(|course| course.user_id == owner);
        if owned {
            tables.courses.remove(&id);
        }
        Ok(owned)
    }
}
