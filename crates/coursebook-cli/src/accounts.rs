//! Account creation outside the HTTP API.
//!
//! Runs the same validation and hashing as `POST /api/users`, so an account
//! created here is indistinguishable from a registered one.

use anyhow::bail;
use coursebook_core::{hash_password_with_cost, validation_messages};
use coursebook_db::{PgStore, StoreError, UserStore};
use coursebook_models::{NewUser, RegisterUserDto, User};
use sqlx::PgPool;
use validator::Validate;

pub async fn create_user(
    db: &PgPool,
    dto: RegisterUserDto,
    bcrypt_cost: u32,
) -> anyhow::Result<User> {
    if let Err(errors) = dto.validate() {
        bail!("{}", validation_messages(&errors).join("; "));
    }

    let password = dto.password.as_deref().unwrap_or_default();
    let password_hash = hash_password_with_cost(password, bcrypt_cost).map_err(|e| e.error)?;

    let store = PgStore::new(db.clone());
    match store.create_user(NewUser::from_dto(dto, password_hash)).await {
        Ok(user) => Ok(user),
        Err(StoreError::UniqueViolation(_)) => bail!("The email address you entered is already used"),
        Err(e) => Err(e.into()),
    }
}
