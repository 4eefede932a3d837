//! User seeding functionality.

use coursebook_models::UserId;
use fake::Fake;
use fake::faker::name::en::{FirstName, LastName};
use rayon::prelude::*;
use sqlx::{PgPool, Postgres, Transaction};
use std::time::Instant;

use super::models::{SEED_EMAIL_DOMAIN, UserSeed};

/// Generates `count` users numbered from `offset`, so repeated runs never
/// collide on email.
pub fn generate_users(count: usize, offset: usize, password_hash: &str) -> Vec<UserSeed> {
    (0..count)
        .into_par_iter()
        .map(|idx| {
            let first_name: String = FirstName().fake();
            let last_name: String = LastName().fake();

            let email = format!(
                "{}.{}+{}@{}",
                first_name.to_lowercase().replace(' ', ""),
                last_name.to_lowercase().replace(' ', ""),
                offset + idx,
                SEED_EMAIL_DOMAIN
            );

            UserSeed {
                first_name,
                last_name,
                email,
                password_hash: password_hash.to_string(),
            }
        })
        .collect()
}

/// Number of seeded accounts already present.
pub async fn count_seeded_users(db: &PgPool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE email LIKE $1")
        .bind(format!("%@{}", SEED_EMAIL_DOMAIN))
        .fetch_one(db)
        .await
}

pub async fn seed_users(
    db: &PgPool,
    count: usize,
    password_hash: &str,
) -> anyhow::Result<Vec<UserId>> {
    let start_time = Instant::now();
    println!("👥 Seeding {} users...", count);

    let offset = usize::try_from(count_seeded_users(db).await?)?;
    let users = generate_users(count, offset, password_hash);
    let ids = insert_users_batch(db, &users).await?;

    println!(
        "   ✓ Inserted {} users in {:?}",
        ids.len(),
        start_time.elapsed()
    );

    Ok(ids)
}

pub async fn insert_users_batch(db: &PgPool, users: &[UserSeed]) -> Result<Vec<UserId>, sqlx::Error> {
    let mut tx = db.begin().await?;

    // 4 params per user
    const BATCH_SIZE: usize = 1000;

    let mut ids = Vec::with_capacity(users.len());
    for chunk in users.chunks(BATCH_SIZE) {
        ids.extend(insert_users_chunk(&mut tx, chunk).await?);
    }

    tx.commit().await?;
    Ok(ids)
}

async fn insert_users_chunk(
    tx: &mut Transaction<'_, Postgres>,
    users: &[UserSeed],
) -> Result<Vec<UserId>, sqlx::Error> {
    if users.is_empty() {
        return Ok(Vec::new());
    }

    let mut query =
        String::from("INSERT INTO users (first_name, last_name, email, password) VALUES ");

    for i in 0..users.len() {
        if i > 0 {
            query.push_str(", ");
        }
        let p = i * 4;
        query.push_str(&format!("(${}, ${}, ${}, ${})", p + 1, p + 2, p + 3, p + 4));
    }

    query.push_str(" RETURNING id");

    let mut q = sqlx::query_scalar(&query);
    for user in users {
        q = q
            .bind(&user.first_name)
            .bind(&user.last_name)
            .bind(&user.email)
            .bind(&user.password_hash);
    }

    q.fetch_all(&mut **tx).await
}

/// Deletes seeded users; their courses go with them (`ON DELETE CASCADE`).
pub async fn clear_users(db: &PgPool) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM users WHERE email LIKE $1")
        .bind(format!("%@{}", SEED_EMAIL_DOMAIN))
        .execute(db)
        .await?;

    Ok(result.rows_affected())
}
