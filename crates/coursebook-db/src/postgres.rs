use async_trait::async_trait;
use coursebook_gate::{Principal, PrincipalSource, StoredPrincipal};
use coursebook_models::{
    Course, CourseId, CourseOwner, CourseWithOwner, NewCourse, NewUser, User, UserId,
    UserWithPassword,
};
use sqlx::{FromRow, PgPool};
use tracing::instrument;

use crate::error::StoreError;
use crate::store::{CourseStore, UserStore};

const USER_COLUMNS: &str = "id, first_name, last_name, email, created_at, updated_at";

const COURSE_COLUMNS: &str = "id, title, description, estimated_time, materials_needed, user_id, created_at, updated_at";

const COURSE_WITH_OWNER_SELECT: &str = r#"SELECT
    c.id,
    c.title,
    c.description,
    c.estimated_time,
    c.materials_needed,
    c.user_id,
    c.created_at,
    c.updated_at,
    u.first_name AS owner_first_name,
    u.last_name AS owner_last_name,
    u.email AS owner_email
   FROM courses c
   JOIN users u ON u.id = c.user_id"#;

#[derive(FromRow)]
struct CourseOwnerRow {
    #[sqlx(flatten)]
    course: Course,
    owner_first_name: String,
    owner_last_name: String,
    owner_email: String,
}

impl From<CourseOwnerRow> for CourseWithOwner {
    fn from(row: CourseOwnerRow) -> Self {
        let owner = CourseOwner {
            id: row.course.user_id,
            first_name: row.owner_first_name,
            last_name: row.owner_last_name,
            email: row.owner_email,
        };
        Self {
            course: row.course,
            owner,
        }
    }
}

/// PostgreSQL-backed store.
#[derive(Clone, Debug)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl PrincipalSource for PgStore {
    #[instrument(skip(self))]
    async fn principal_by_email(&self, email: &str) -> anyhow::Result<Option<StoredPrincipal>> {
        let row = sqlx::query_as::<_, UserWithPassword>(&format!(
            "SELECT {USER_COLUMNS}, password FROM users WHERE email = $1"
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|row| StoredPrincipal {
            principal: Principal::from(row.user),
            password_hash: row.password,
        }))
    }
}

#[async_trait]
impl UserStore for PgStore {
    #[instrument(skip(self))]
    async fn find_user(&self, id: UserId) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    #[instrument(skip(self, user), fields(email = %user.email))]
    async fn create_user(&self, user: NewUser) -> Result<User, StoreError> {
        let user = sqlx::query_as::<_, User>(&format!(
            r#"INSERT INTO users (first_name, last_name, email, password)
               VALUES ($1, $2, $3, $4)
               RETURNING {USER_COLUMNS}"#
        ))
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.email)
        .bind(&user.password_hash)
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }
}

#[async_trait]
impl CourseStore for PgStore {
    #[instrument(skip(self))]
    async fn list_courses(&self) -> Result<Vec<CourseWithOwner>, StoreError> {
        let rows = sqlx::query_as::<_, CourseOwnerRow>(&format!(
            "{COURSE_WITH_OWNER_SELECT} ORDER BY c.id"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(CourseWithOwner::from).collect())
    }

    #[instrument(skip(self))]
    async fn list_courses_by_owner(
        &self,
        owner: UserId,
    ) -> Result<Vec<CourseWithOwner>, StoreError> {
        let rows = sqlx::query_as::<_, CourseOwnerRow>(&format!(
            "{COURSE_WITH_OWNER_SELECT} WHERE c.user_id = $1 ORDER BY c.id"
        ))
        .bind(owner)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(CourseWithOwner::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_course(&self, id: CourseId) -> Result<Option<Course>, StoreError> {
        let course = sqlx::query_as::<_, Course>(&format!(
            "SELECT {COURSE_COLUMNS} FROM courses WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(course)
    }

    #[instrument(skip(self))]
    async fn find_course_with_owner(
        &self,
        id: CourseId,
    ) -> Result<Option<CourseWithOwner>, StoreError> {
        let row = sqlx::query_as::<_, CourseOwnerRow>(&format!(
            "{COURSE_WITH_OWNER_SELECT} WHERE c.id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(CourseWithOwner::from))
    }

    #[instrument(skip(self, course))]
    async fn create_course(&self, owner: UserId, course: NewCourse) -> Result<Course, StoreError> {
        let course = sqlx::query_as::<_, Course>(&format!(
            r#"INSERT INTO courses (title, description, estimated_time, materials_needed, user_id)
               VALUES ($1, $2, $3, $4, $5)
               RETURNING {COURSE_COLUMNS}"#
        ))
        .bind(&course.title)
        .bind(&course.description)
        .bind(&course.estimated_time)
        .bind(&course.materials_needed)
        .bind(owner)
        .fetch_one(&self.pool)
        .await?;

        Ok(course)
    }

    #[instrument(skip(self, course))]
    async fn update_course(
        &self,
        id: CourseId,
        owner: UserId,
        course: NewCourse,
    ) -> Result<Option<Course>, StoreError> {
        let course = sqlx::query_as::<_, Course>(&format!(
            r#"UPDATE courses
               SET title = $1, description = $2, estimated_time = $3,
                   materials_needed = $4, updated_at = NOW()
               WHERE id = $5 AND user_id = $6
               RETURNING {COURSE_COLUMNS}"#
        ))
        .bind(&course.title)
        .bind(&course.description)
        .bind(&course.estimated_time)
        .bind(&course.materials_needed)
        .bind(id)
        .bind(owner)
        .fetch_optional(&self.pool)
        .await?;

        Ok(course)
    }

    #[instrument(skip(self))]
    async fn delete_course(&self, id: CourseId, owner: UserId) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM courses WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(owner)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
