//! Data models for database seeding configuration.

use coursebook_models::UserId;

/// Every seeded account uses this email domain, which is how
/// `clear-seed` finds them again.
pub const SEED_EMAIL_DOMAIN: &str = "seed.coursebook.dev";

/// Password shared by all seeded accounts.
pub const DEFAULT_SEED_PASSWORD: &str = "password123";

/// Seed data for creating a user.
pub struct UserSeed {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password_hash: String,
}

/// Seed data for creating a course.
pub struct CourseSeed {
    pub title: String,
    pub description: String,
    pub estimated_time: Option<String>,
    pub materials_needed: Option<String>,
    pub owner: UserId,
}

/// Main seeding configuration.
#[derive(Clone, Debug)]
pub struct SeedConfig {
    pub users: usize,
    pub courses_per_user: usize,
    pub password: String,
    pub bcrypt_cost: u32,
}

impl SeedConfig {
    pub fn new(users: usize) -> Self {
        Self {
            users,
            ..Default::default()
        }
    }

    pub fn with_courses_per_user(mut self, courses_per_user: usize) -> Self {
        self.courses_per_user = courses_per_user;
        self
    }

    pub fn with_bcrypt_cost(mut self, bcrypt_cost: u32) -> Self {
        self.bcrypt_cost = bcrypt_cost;
        self
    }

    pub fn total_courses(&self) -> usize {
        self.users * self.courses_per_user
    }
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            users: 5,
            courses_per_user: 3,
            password: DEFAULT_SEED_PASSWORD.to_string(),
            bcrypt_cost: coursebook_config::SecurityConfig::default().bcrypt_cost,
        }
    }
}
