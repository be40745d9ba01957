//! Service context - dependency container for services

use std::sync::Arc;

use chrono::NaiveDate;
use habit_common::auth::JwtService;
use habit_core::traits::{HabitLogRepository, HabitRepository, UserRepository};
use habit_core::{Clock, Snowflake, SnowflakeGenerator, SystemClock};
use habit_db::{PgHabitLogRepository, PgHabitRepository, PgPool, PgUserRepository};

/// Everything a service needs: repositories, token keys, ID generator, clock.
///
/// The pool is optional so the context can be assembled over in-memory
/// repositories; only the readiness probe needs it directly.
#[derive(Clone)]
pub struct ServiceContext {
    pool: Option<PgPool>,

    user_repo: Arc<dyn UserRepository>,
    habit_repo: Arc<dyn HabitRepository>,
    log_repo: Arc<dyn HabitLogRepository>,

    jwt_service: Arc<JwtService>,
    snowflake_generator: Arc<SnowflakeGenerator>,
    clock: Arc<dyn Clock>,
}

impl ServiceContext {
    /// Context backed by PostgreSQL repositories sharing one pool
    pub fn postgres(
        pool: PgPool,
        jwt_service: Arc<JwtService>,
        snowflake_generator: Arc<SnowflakeGenerator>,
    ) -> Self {
        Self {
            user_repo: Arc::new(PgUserRepository::new(pool.clone())),
            habit_repo: Arc::new(PgHabitRepository::new(pool.clone())),
            log_repo: Arc::new(PgHabitLogRepository::new(pool.clone())),
            pool: Some(pool),
            jwt_service,
            snowflake_generator,
            clock: Arc::new(SystemClock),
        }
    }

    pub fn pool(&self) -> Option<&PgPool> {
        self.pool.as_ref()
    }

    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    pub fn habit_repo(&self) -> &dyn HabitRepository {
        self.habit_repo.as_ref()
    }

    pub fn log_repo(&self) -> &dyn HabitLogRepository {
        self.log_repo.as_ref()
    }

    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    pub fn generate_id(&self) -> Snowflake {
        self.snowflake_generator.generate()
    }

    /// Current UTC calendar date
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }
}

#[cfg(test)]
impl ServiceContext {
    /// Same repositories, clock pinned to another day
    pub(crate) fn with_today(&self, today: NaiveDate) -> Self {
        Self {
            clock: Arc::new(habit_core::FixedClock::on(today)),
            ..self.clone()
        }
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &self.pool.as_ref().map(|_| "PgPool"))
            .field("worker_id", &self.snowflake_generator.worker_id())
            .field("today", &self.today())
            .finish_non_exhaustive()
    }
}

/// Builder for ServiceContext
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    user_repo: Option<Arc<dyn UserRepository>>,
    habit_repo: Option<Arc<dyn HabitRepository>>,
    log_repo: Option<Arc<dyn HabitLogRepository>>,
    jwt_service: Option<Arc<JwtService>>,
    snowflake_generator: Option<Arc<SnowflakeGenerator>>,
    clock: Option<Arc<dyn Clock>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            pool: None,
            user_repo: None,
            habit_repo: None,
            log_repo: None,
            jwt_service: None,
            snowflake_generator: None,
            clock: None,
        }
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn habit_repo(mut self, repo: Arc<dyn HabitRepository>) -> Self {
        self.habit_repo = Some(repo);
        self
    }

    pub fn log_repo(mut self, repo: Arc<dyn HabitLogRepository>) -> Self {
        self.log_repo = Some(repo);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    pub fn snowflake_generator(mut self, generator: Arc<SnowflakeGenerator>) -> Self {
        self.snowflake_generator = Some(generator);
        self
    }

    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Fails with `ServiceError::Validation` naming the first missing dependency.
    /// The ID generator defaults to worker 0 and the clock to the system clock.
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        use super::error::ServiceError;

        Ok(ServiceContext {
            pool: self.pool,
            user_repo: self
                .user_repo
                .ok_or_else(|| ServiceError::validation("user_repo is required"))?,
            habit_repo: self
                .habit_repo
                .ok_or_else(|| ServiceError::validation("habit_repo is required"))?,
            log_repo: self
                .log_repo
                .ok_or_else(|| ServiceError::validation("log_repo is required"))?,
            jwt_service: self
                .jwt_service
                .ok_or_else(|| ServiceError::validation("jwt_service is required"))?,
            snowflake_generator: self.snowflake_generator.unwrap_or_default(),
            clock: self.clock.unwrap_or_else(|| Arc::new(SystemClock)),
        })
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
