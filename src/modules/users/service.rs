use anyhow::anyhow;
use coursebook_core::{AppError, hash_password_with_cost};
use coursebook_db::{CatalogStore, StoreError};
use coursebook_models::{CourseWithOwner, NewUser, RegisterUserDto, User, UserId};
use tracing::instrument;

pub const DUPLICATE_EMAIL: &str = "The email address you entered is already used";

pub struct UserService;

impl UserService {
    /// Hashes the password and stores the account. A taken email is
    /// reported as a field error, like any other validation failure.
    #[instrument(skip(store, dto), fields(email = dto.email.as_deref().unwrap_or_default()))]
    pub async fn register(
        store: &dyn CatalogStore,
        dto: RegisterUserDto,
        bcrypt_cost: u32,
    ) -> Result<User, AppError> {
        let password = dto.password.as_deref().unwrap_or_default();
        let password_hash = hash_password_with_cost(password, bcrypt_cost)?;

        match store.create_user(NewUser::from_dto(dto, password_hash)).await {
            Ok(user) => Ok(user),
            Err(StoreError::UniqueViolation(_)) => {
                Err(AppError::validation(vec![DUPLICATE_EMAIL.to_string()]))
            }
            Err(e) => Err(e.into()),
        }
    }

    #[instrument(skip(store))]
    pub async fn get_user(store: &dyn CatalogStore, id: UserId) -> Result<User, AppError> {
        store
            .find_user(id)
            .await?
            .ok_or_else(|| AppError::not_found(anyhow!("User Not Found")))
    }

    #[instrument(skip(store))]
    pub async fn courses_of(
        store: &dyn CatalogStore,
        id: UserId,
    ) -> Result<Vec<CourseWithOwner>, AppError> {
        Self::get_user(store, id).await?;
        Ok(store.list_courses_by_owner(id).await?)
    }
}
