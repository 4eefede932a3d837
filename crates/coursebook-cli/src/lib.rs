//! # Coursebook CLI
//!
//! Account administration and database seeding for Coursebook development.
//!
//! This library crate provides the functionality used by the CLI binary.
//!
//! ## Usage
//!
//! ```ignore
//! use coursebook_cli::seeder::{seed_all, SeedConfig};
//!
//! let config = SeedConfig::new(10).with_courses_per_user(3);
//! seed_all(&pool, config).await?;
//! ```

pub mod accounts;
pub mod seeder;
