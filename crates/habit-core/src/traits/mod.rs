//! Repository traits (ports)

mod repositories;

pub use repositories::{HabitLogRepository, HabitRepository, RepoResult, UserRepository};
