//! In-memory repositories and context helpers for service tests

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use habit_common::auth::JwtService;
use habit_core::entities::{Category, Frequency, Habit, HabitLog, User};
use habit_core::traits::{HabitLogRepository, HabitRepository, RepoResult, UserRepository};
use habit_core::{DomainError, FixedClock, Snowflake, SnowflakeGenerator};
use parking_lot::Mutex;

use super::context::{ServiceContext, ServiceContextBuilder};

#[derive(Default)]
struct State {
    users: HashMap<Snowflake, (User, String)>,
    habits: HashMap<Snowflake, Habit>,
    logs: Vec<HabitLog>,
}

/// One store behind all three repository traits, so deleting a habit can
/// drop its logs the way the foreign key does.
#[derive(Default)]
pub(crate) struct InMemoryStore {
    state: Mutex<State>,
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<User>> {
        Ok(self.state.lock().users.get(&id).map(|(u, _)| u.clone()))
    }

    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        Ok(self
            .state
            .lock()
            .users
            .values()
            .find(|(u, _)| u.email == email)
            .map(|(u, _)| u.clone()))
    }

    async fn email_exists(&self, email: &str) -> RepoResult<bool> {
        Ok(self.state.lock().users.values().any(|(u, _)| u.email == email))
    }

    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()> {
        let mut state = self.state.lock();
        if state.users.values().any(|(u, _)| u.email == user.email) {
            return Err(DomainError::EmailAlreadyExists);
        }
        state
            .users
            .insert(user.id, (user.clone(), password_hash.to_string()));
        Ok(())
    }

    async fn get_password_hash(&self, id: Snowflake) -> RepoResult<Option<String>> {
        Ok(self.state.lock().users.get(&id).map(|(_, h)| h.clone()))
    }

    async fn update_gamification(&self, previous: &User, user: &User) -> RepoResult<bool> {
        let mut state = self.state.lock();
        let Some((stored, _)) = state.users.get_mut(&user.id) else {
            return Err(DomainError::UserNotFound(user.id));
        };

        let unchanged = stored.xp == previous.xp
            && stored.badges == previous.badges
            && stored.daily_spin_available == previous.daily_spin_available
            && stored.last_spin_date == previous.last_spin_date;
        if unchanged {
            *stored = user.clone();
        }
        Ok(unchanged)
    }
}

type Interference = Box<dyn FnOnce(&mut User) + Send>;

/// Users backed by an [`InMemoryStore`], where a write from "another request"
/// lands on the stored row just before the first gamification write-back.
pub(crate) struct InterleavedUsers {
    store: Arc<InMemoryStore>,
    pending: Mutex<Option<Interference>>,
}

impl InterleavedUsers {
    pub(crate) fn new(
        store: Arc<InMemoryStore>,
        interfere: impl FnOnce(&mut User) + Send + 'static,
    ) -> Self {
        Self {
            store,
            pending: Mutex::new(Some(Box::new(interfere))),
        }
    }
}

#[async_trait]
impl UserRepository for InterleavedUsers {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<User>> {
        UserRepository::find_by_id(self.store.as_ref(), id).await
    }

    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        self.store.find_by_email(email).await
    }

    async fn email_exists(&self, email: &str) -> RepoResult<bool> {
        self.store.email_exists(email).await
    }

    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()> {
        UserRepository::create(self.store.as_ref(), user, password_hash).await
    }

    async fn get_password_hash(&self, id: Snowflake) -> RepoResult<Option<String>> {
        self.store.get_password_hash(id).await
    }

    async fn update_gamification(&self, previous: &User, user: &User) -> RepoResult<bool> {
        let interfere = self.pending.lock().take();
        if let Some(interfere) = interfere {
            if let Some((stored, _)) = self.store.state.lock().users.get_mut(&user.id) {
                interfere(stored);
            }
        }
        self.store.update_gamification(previous, user).await
    }
}

#[async_trait]
impl HabitRepository for InMemoryStore {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Habit>> {
        Ok(self.state.lock().habits.get(&id).cloned())
    }

    async fn find_by_user(&self, user_id: Snowflake) -> RepoResult<Vec<Habit>> {
        let mut habits: Vec<Habit> = self
            .state
            .lock()
            .habits
            .values()
            .filter(|h| h.user_id == user_id)
            .cloned()
            .collect();
        habits.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
        Ok(habits)
    }

    async fn count_by_user(&self, user_id: Snowflake) -> RepoResult<i64> {
        let count = self
            .state
            .lock()
            .habits
            .values()
            .filter(|h| h.user_id == user_id)
            .count();
        Ok(count as i64)
    }

    async fn create(&self, habit: &Habit) -> RepoResult<()> {
        self.state.lock().habits.insert(habit.id, habit.clone());
        Ok(())
    }

    async fn update(&self, habit: &Habit) -> RepoResult<()> {
        match self.state.lock().habits.get_mut(&habit.id) {
            Some(stored) => {
                *stored = habit.clone();
                Ok(())
            }
            None => Err(DomainError::HabitNotFound(habit.id)),
        }
    }

    async fn update_streaks(&self, id: Snowflake, current: i32, longest: i32) -> RepoResult<()> {
        match self.state.lock().habits.get_mut(&id) {
            Some(stored) => {
                stored.current_streak = current;
                stored.longest_streak = longest;
                Ok(())
            }
            None => Err(DomainError::HabitNotFound(id)),
        }
    }

    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        let mut state = self.state.lock();
        if state.habits.remove(&id).is_none() {
            return Err(DomainError::HabitNotFound(id));
        }
        state.logs.retain(|log| log.habit_id != id);
        Ok(())
    }
}

#[async_trait]
impl HabitLogRepository for InMemoryStore {
    async fn find_by_habit_and_date(
        &self,
        habit_id: Snowflake,
        date: NaiveDate,
    ) -> RepoResult<Option<HabitLog>> {
        Ok(self
            .state
            .lock()
            .logs
            .iter()
            .find(|log| log.habit_id == habit_id && log.date == date)
            .cloned())
    }

    async fn create(&self, log: &HabitLog) -> RepoResult<()> {
        let mut state = self.state.lock();
        if state
            .logs
            .iter()
            .any(|l| l.habit_id == log.habit_id && l.date == log.date)
        {
            return Err(DomainError::LogAlreadyExists);
        }
        state.logs.push(log.clone());
        Ok(())
    }

    async fn find_by_habit(&self, habit_id: Snowflake) -> RepoResult<Vec<HabitLog>> {
        let mut logs: Vec<HabitLog> = self
            .state
            .lock()
            .logs
            .iter()
            .filter(|log| log.habit_id == habit_id)
            .cloned()
            .collect();
        logs.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(logs)
    }

    async fn completed_dates(&self, habit_id: Snowflake) -> RepoResult<Vec<NaiveDate>> {
        let mut dates: Vec<NaiveDate> = self
            .state
            .lock()
            .logs
            .iter()
            .filter(|log| log.habit_id == habit_id && log.completed)
            .map(|log| log.date)
            .collect();
        dates.sort();
        Ok(dates)
    }

    async fn find_completed_in_range(
        &self,
        user_id: Snowflake,
        start: NaiveDate,
        end: NaiveDate,
    ) -> RepoResult<Vec<HabitLog>> {
        let mut logs: Vec<HabitLog> = self
            .state
            .lock()
            .logs
            .iter()
            .filter(|log| {
                log.user_id == user_id && log.completed && start <= log.date && log.date <= end
            })
            .cloned()
            .collect();
        logs.sort_by_key(|log| log.date);
        Ok(logs)
    }
}

pub(crate) fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Context over a fresh in-memory store, pinned to `today`
pub(crate) fn context_on(today: NaiveDate) -> ServiceContext {
    let store = Arc::new(InMemoryStore::default());
    context_over(store.clone(), store, today)
}

/// Context whose users come from `users` and everything else from `store`
pub(crate) fn context_over(
    store: Arc<InMemoryStore>,
    users: Arc<dyn UserRepository>,
    today: NaiveDate,
) -> ServiceContext {
    ServiceContextBuilder::new()
        .user_repo(users)
        .habit_repo(store.clone())
        .log_repo(store)
        .jwt_service(Arc::new(JwtService::new(
            "test-secret-key-that-is-long-enough",
            900,
            3600,
        )))
        .snowflake_generator(Arc::new(SnowflakeGenerator::new(1)))
        .clock(Arc::new(FixedClock::on(today)))
        .build()
        .unwrap()
}

pub(crate) fn context() -> ServiceContext {
    context_on(day(2024, 5, 10))
}

/// Insert a user directly and return its ID
pub(crate) async fn seed_user(ctx: &ServiceContext) -> Snowflake {
    let id = ctx.generate_id();
    let user = User::new(id, "Tester", &format!("user{id}@example.com"));
    ctx.user_repo().create(&user, "not-a-real-hash").await.unwrap();
    id
}

pub(crate) async fn seed_habit(ctx: &ServiceContext, user_id: Snowflake) -> Snowflake {
    let habit = Habit::new(
        ctx.generate_id(),
        user_id,
        "Meditate",
        Category::Health,
        Frequency::Daily,
        day(2024, 1, 1),
    );
    ctx.habit_repo().create(&habit).await.unwrap();
    habit.id
}
