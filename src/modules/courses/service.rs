//! Course reads are public. Every mutation goes through the gate's
//! `admit` step first: the course is loaded by id, a missing course is a
//! 404, and only then is ownership compared.
//!
//! The owner-scoped store calls repeat the ownership condition in the write
//! itself, so a course that changes hands or disappears between the check
//! and the write is never modified.

use coursebook_core::AppError;
use coursebook_db::CatalogStore;
use coursebook_gate::{GateError, Principal, admit};
use coursebook_models::{Course, CourseDto, CourseId, CourseWithOwner};
use tracing::instrument;

use crate::metrics::track_gate_failure;

const RESOURCE: &str = "Course";

fn course_not_found() -> AppError {
    GateError::ResourceNotFound { resource: RESOURCE }.into()
}

pub struct CourseService;

impl CourseService {
    #[instrument(skip(store))]
    pub async fn list(store: &dyn CatalogStore) -> Result<Vec<CourseWithOwner>, AppError> {
        Ok(store.list_courses().await?)
    }

    #[instrument(skip(store))]
    pub async fn get(store: &dyn CatalogStore, id: CourseId) -> Result<CourseWithOwner, AppError> {
        store
            .find_course_with_owner(id)
            .await?
            .ok_or_else(course_not_found)
    }

    #[instrument(skip(store, principal, dto), fields(owner_id = %principal.id))]
    pub async fn create(
        store: &dyn CatalogStore,
        principal: &Principal,
        dto: CourseDto,
    ) -> Result<Course, AppError> {
        Ok(store
            .create_course(principal.id, dto.into_new_course())
            .await?)
    }

    #[instrument(skip(store, principal, dto), fields(principal_id = %principal.id))]
    pub async fn update(
        store: &dyn CatalogStore,
        principal: &Principal,
        id: CourseId,
        dto: CourseDto,
    ) -> Result<Course, AppError> {
        let course = admit(principal, store.find_course(id).await?, RESOURCE)
            .inspect_err(track_gate_failure)?;

        store
            .update_course(course.id, principal.id, dto.into_new_course())
            .await?
            .ok_or_else(course_not_found)
    }

    #[instrument(skip(store, principal), fields(principal_id = %principal.id))]
    pub async fn delete(
        store: &dyn CatalogStore,
        principal: &Principal,
        id: CourseId,
    ) -> Result<(), AppError> {
        let course = admit(principal, store.find_course(id).await?, RESOURCE)
            .inspect_err(track_gate_failure)?;

        if store.delete_course(course.id, principal.id).await? {
            Ok(())
        } else {
            Err(course_not_found())
        }
    }
}
