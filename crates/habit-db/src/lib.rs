//! # habit-db
//!
//! PostgreSQL implementations of the repository traits in `habit-core`.
//!
//! - Connection pool management and schema migrations
//! - Row models with SQLx `FromRow` derives
//! - Row → entity mappers
//! - Repository implementations
//!
//! ```rust,ignore
//! use habit_db::{create_pool, run_migrations, DatabaseConfig, PgHabitRepository};
//!
//! let pool = create_pool(&DatabaseConfig::from_env()).await?;
//! run_migrations(&pool).await?;
//! let habits = PgHabitRepository::new(pool);
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

pub use pool::{create_pool, run_migrations, DatabaseConfig, PgPool};
pub use repositories::{PgHabitLogRepository, PgHabitRepository, PgUserRepository};
