use anyhow::Context;
use clap::{Parser, Subcommand};
use coursebook_cli::accounts;
use coursebook_cli::seeder::{self, SeedConfig};
use coursebook_config::{DatabaseConfig, SecurityConfig};
use coursebook_db::{PgPool, init_db_pool, run_migrations};
use coursebook_models::RegisterUserDto;
use dialoguer::{Input, Password};
use dotenvy::dotenv;

#[derive(Parser)]
#[command(name = "coursebook-cli")]
#[command(about = "Coursebook CLI - Administrative tools for Coursebook", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a user account
    CreateUser {
        /// First name
        #[arg(short = 'f', long)]
        first_name: Option<String>,

        /// Last name
        #[arg(short = 'l', long)]
        last_name: Option<String>,

        /// Email address
        #[arg(short = 'e', long)]
        email: Option<String>,

        /// Password (will be prompted securely if not provided)
        #[arg(short = 'p', long)]
        password: Option<String>,
    },
    /// Seed the database with fake users and courses
    Seed {
        /// Number of users to create
        #[arg(short = 'u', long, default_value = "5")]
        users: usize,

        /// Number of courses per user
        #[arg(short = 'c', long, default_value = "3")]
        courses_per_user: usize,
    },
    /// Remove seeded users and their courses
    ClearSeed,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let cli = Cli::parse();

    let pool = init_db_pool(&DatabaseConfig::from_env())
        .await
        .context("Failed to connect to database")?;
    run_migrations(&pool)
        .await
        .context("Failed to run database migrations")?;

    let security = SecurityConfig::from_env();

    match cli.command {
        Commands::CreateUser {
            first_name,
            last_name,
            email,
            password,
        } => {
            handle_create_user(&pool, security, first_name, last_name, email, password).await
        }
        Commands::Seed {
            users,
            courses_per_user,
        } => {
            let config = SeedConfig::new(users)
                .with_courses_per_user(courses_per_user)
                .with_bcrypt_cost(security.bcrypt_cost);
            seeder::seed_all(&pool, config)
                .await
                .context("Error seeding database")?;
            Ok(())
        }
        Commands::ClearSeed => {
            seeder::clear_seeded_data(&pool)
                .await
                .context("Error clearing seeded data")?;
            Ok(())
        }
    }
}

fn prompt(value: Option<String>, label: &str) -> anyhow::Result<String> {
    match value {
        Some(value) => Ok(value),
        None => Input::new()
            .with_prompt(label)
            .interact_text()
            .with_context(|| format!("Failed to read {}", label.to_lowercase())),
    }
}

async fn handle_create_user(
    pool: &PgPool,
    security: SecurityConfig,
    first_name: Option<String>,
    last_name: Option<String>,
    email: Option<String>,
    password: Option<String>,
) -> anyhow::Result<()> {
    let first_name = prompt(first_name, "First name")?;
    let last_name = prompt(last_name, "Last name")?;
    let email = prompt(email, "Email address")?;
    let password = match password {
        Some(password) => password,
        None => Password::new()
            .with_prompt("Password")
            .with_confirmation("Confirm password", "Passwords don't match")
            .interact()
            .context("Failed to read password")?,
    };

    let dto = RegisterUserDto {
        first_name: Some(first_name),
        last_name: Some(last_name),
        email: Some(email),
        password: Some(password),
    };

    let user = accounts::create_user(pool, dto, security.bcrypt_cost).await?;

    println!("\n✅ User created successfully!");
    println!("   ID: {}", user.id);
    println!("   Email: {}", user.email);
    println!("   Name: {} {}", user.first_name, user.last_name);

    Ok(())
}
