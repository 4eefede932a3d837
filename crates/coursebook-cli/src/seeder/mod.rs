//! Fake-data seeding for development databases.
//!
//! Seeded users share the [`SEED_EMAIL_DOMAIN`] email domain and the
//! password in [`SeedConfig::password`]; `clear_seeded_data` removes exactly
//! those users and, through the foreign key cascade, their courses.

pub mod courses;
pub mod models;
pub mod users;

pub use models::{CourseSeed, DEFAULT_SEED_PASSWORD, SEED_EMAIL_DOMAIN, SeedConfig, UserSeed};

use coursebook_core::hash_password_with_cost;
use sqlx::PgPool;
use std::time::Instant;

/// Result of a seeding run.
#[derive(Debug, Default)]
pub struct SeedSummary {
    pub users: usize,
    pub courses: usize,
}

pub async fn seed_all(db: &PgPool, config: SeedConfig) -> anyhow::Result<SeedSummary> {
    let start_time = Instant::now();
    println!(
        "🌱 Seeding {} users and {} courses",
        config.users,
        config.total_courses()
    );

    let password_hash = hash_password_with_cost(&config.password, config.bcrypt_cost)
        .map_err(|e| e.error)?;

    let user_ids = users::seed_users(db, config.users, &password_hash).await?;
    let course_ids = courses::seed_courses(db, &user_ids, config.courses_per_user).await?;

    println!("✅ Seeding finished in {:?}", start_time.elapsed());
    println!(
        "   Log in as any seeded user with password '{}'",
        config.password
    );

    Ok(SeedSummary {
        users: user_ids.len(),
        courses: course_ids.len(),
    })
}

/// Removes every seeded user and their courses. Returns the number of users
/// deleted.
pub async fn clear_seeded_data(db: &PgPool) -> Result<u64, sqlx::Error> {
    let removed = users::clear_users(db).await?;
    println!("🧹 Removed {} seeded users and their courses", removed);
    Ok(removed)
}
