//! Gamification service - XP, badges, and the daily spin

use habit_core::entities::User;
use habit_core::{DomainError, Snowflake, SpinReward};
use tracing::{info, instrument, warn};
use validator::Validate;

use crate::dto::{
    AwardBadgeRequest, AwardBadgeResponse, AwardXpRequest, AwardXpResponse, EnableSpinResponse,
    SpinResponse, StatsResponse,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

const DEFAULT_XP_REASON: &str = "activity";

/// Attempts at a compare-and-swap write before giving up with a conflict
const MAX_WRITE_ATTEMPTS: usize = 5;

pub struct GamificationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> GamificationService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    #[instrument(skip(self))]
    pub async fn stats(&self, user_id: Snowflake) -> ServiceResult<StatsResponse> {
        let user = self.load_user(user_id).await?;
        Ok(StatsResponse::from(&user))
    }

    #[instrument(skip(self, request), fields(amount = request.amount))]
    pub async fn award_xp(
        &self,
        user_id: Snowflake,
        request: AwardXpRequest,
    ) -> ServiceResult<AwardXpResponse> {
        request.validate()?;

        let amount = request.amount;
        let (user, previous_level) = self
            .modify_user(user_id, |user| {
                let previous_level = user.level;
                user.award_xp(amount)?;
                Ok(previous_level)
            })
            .await?;

        let reason = request
            .reason
            .as_deref()
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .unwrap_or(DEFAULT_XP_REASON);
        if user.level > previous_level {
            info!(user_id = %user.id, level = user.level, "User leveled up");
        }

        Ok(AwardXpResponse {
            message: format!("Earned {} XP for {reason}!", request.amount),
            xp: user.xp,
            level: user.level,
            xp_to_next_level: user.xp_to_next_level(),
        })
    }

    /// Add a badge once; awarding one already held is a no-op
    #[instrument(skip(self, request), fields(badge = %request.badge_id))]
    pub async fn award_badge(
        &self,
        user_id: Snowflake,
        request: AwardBadgeRequest,
    ) -> ServiceResult<AwardBadgeResponse> {
        request.validate()?;

        let badge = request.badge_id.trim();
        let (user, newly_awarded) = self
            .modify_user(user_id, |user| Ok(user.award_badge(badge)))
            .await?;
        if !newly_awarded {
            return Ok(AwardBadgeResponse {
                message: "Badge already earned",
                badge: None,
                badges: user.badges,
                newly_awarded: false,
            });
        }

        info!(user_id = %user.id, badge, "Badge earned");

        Ok(AwardBadgeResponse {
            message: "New badge earned!",
            badge: Some(badge.to_string()),
            badges: user.badges,
            newly_awarded: true,
        })
    }

    /// Spin the wheel. Allowed once per UTC day, and only after the spin
    /// has been unlocked.
    #[instrument(skip(self))]
    pub async fn spin(&self, user_id: Snowflake) -> ServiceResult<SpinResponse> {
        let today = self.ctx.today();
        let (user, reward) = self
            .modify_user(user_id, |user| {
                user.ensure_can_spin(today)?;
                let reward = SpinReward::draw(&mut rand::thread_rng());
                user.spin(today, reward)?;
                Ok(reward)
            })
            .await?;

        info!(user_id = %user.id, reward = reward.label(), "Daily spin");
        Ok(SpinResponse {
            message: "Spin successful!",
            reward,
            xp: user.xp,
            level: user.level,
            badges: user.badges,
        })
    }

    #[instrument(skip(self))]
    pub async fn enable_spin(&self, user_id: Snowflake) -> ServiceResult<EnableSpinResponse> {
        let (user, ()) = self
            .modify_user(user_id, |user| {
                user.enable_daily_spin();
                Ok(())
            })
            .await?;

        Ok(EnableSpinResponse {
            message: "Daily spin unlocked!",
            daily_spin_available: user.daily_spin_available,
        })
    }

    /// Load the user, apply `change`, and write it back only if nobody else
    /// changed the gamification state in between. A lost race reloads and
    /// applies `change` again, so its checks see the winner's write.
    async fn modify_user<T, F>(
        &self,
        user_id: Snowflake,
        mut change: F,
    ) -> ServiceResult<(User, T)>
    where
        F: FnMut(&mut User) -> ServiceResult<T>,
    {
        for attempt in 1..=MAX_WRITE_ATTEMPTS {
            let previous = self.load_user(user_id).await?;
            let mut user = previous.clone();
            let outcome = change(&mut user)?;

            if user == previous
                || self
                    .ctx
                    .user_repo()
                    .update_gamification(&previous, &user)
                    .await?
            {
                return Ok((user, outcome));
            }
            warn!(%user_id, attempt, "Gamification state changed concurrently, retrying");
        }

        Err(ServiceError::conflict("Too many concurrent updates, please try again"))
    }

    async fn load_user(&self, user_id: Snowflake) -> ServiceResult<User> {
        Ok(self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::UserNotFound(user_id))?)
    }
}
