//! Gamification rules: XP levels and the daily spin reward table

use rand::Rng;
use serde::Serialize;

pub const XP_PER_LEVEL: i64 = 100;

/// Upper bound on a single XP award
pub const MAX_XP_AWARD: i64 = 10_000;

/// Badge granted by the spin wheel
pub const LUCKY_BADGE: &str = "lucky";

/// `floor(xp / 100) + 1`
pub fn level_for_xp(xp: i64) -> i64 {
    xp.max(0) / XP_PER_LEVEL + 1
}

pub fn xp_to_next_level(xp: i64) -> i64 {
    level_for_xp(xp) * XP_PER_LEVEL - xp.max(0)
}

/// One slot on the daily spin wheel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SpinReward {
    Xp { amount: i64, label: &'static str },
    Badge { id: &'static str, label: &'static str },
    StreakProtection { label: &'static str },
}

impl SpinReward {
    /// The wheel; every slot is equally likely
    pub const ALL: [SpinReward; 5] = [
        SpinReward::Xp { amount: 50, label: "50 XP" },
        SpinReward::Xp { amount: 100, label: "100 XP" },
        SpinReward::Xp { amount: 150, label: "150 XP" },
        SpinReward::Badge { id: LUCKY_BADGE, label: "Lucky Badge" },
        SpinReward::StreakProtection { label: "Streak Protection" },
    ];

    pub fn draw<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    pub fn label(&self) -> &'static str {
        match *self {
            Self::Xp { label, .. } | Self::Badge { label, .. } | Self::StreakProtection { label } => {
                label
            }
        }
    }
}
