//! Snowflake ID - time-ordered 64-bit identifier used for every record
//!
//! Layout:
//! - Bits 63-22: milliseconds since [`Snowflake::EPOCH`]
//! - Bits 21-12: worker ID (0-1023)
//! - Bits 11-0:  per-millisecond sequence (0-4095)

use std::fmt;
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

use parking_lot::Mutex;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

const WORKER_BITS: i64 = 10;
const SEQUENCE_BITS: i64 = 12;
const MAX_WORKER_ID: u16 = (1 << WORKER_BITS) - 1;
const SEQUENCE_MASK: i64 = (1 << SEQUENCE_BITS) - 1;

/// Unique identifier for users, habits, and logs
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Snowflake(i64);

impl Snowflake {
    /// 2025-01-01 00:00:00 UTC in milliseconds
    pub const EPOCH: i64 = 1_735_689_600_000;

    #[inline]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    #[inline]
    pub const fn into_inner(self) -> i64 {
        self.0
    }

    /// Milliseconds since the Unix epoch at which the ID was minted
    #[inline]
    pub fn timestamp_millis(&self) -> i64 {
        (self.0 >> (WORKER_BITS + SEQUENCE_BITS)) + Self::EPOCH
    }

    #[inline]
    pub fn worker_id(&self) -> u16 {
        ((self.0 >> SEQUENCE_BITS) & i64::from(MAX_WORKER_ID)) as u16
    }
}

/// Error returned when a path or body contains a malformed ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid id format")]
pub struct SnowflakeParseError;

impl FromStr for Snowflake {
    type Err = SnowflakeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().parse::<i64>() {
            Ok(id) if id > 0 => Ok(Self(id)),
            _ => Err(SnowflakeParseError),
        }
    }
}

impl fmt::Display for Snowflake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<i64> for Snowflake {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<Snowflake> for i64 {
    fn from(id: Snowflake) -> Self {
        id.0
    }
}

// IDs exceed JavaScript's safe integer range, so they travel as strings.
impl Serialize for Snowflake {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Snowflake {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Text(String),
            Number(i64),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Text(s) => s.parse().map_err(de::Error::custom),
            Repr::Number(n) => Ok(Self(n)),
        }
    }
}

#[derive(Debug)]
struct GeneratorState {
    last_millis: i64,
    sequence: i64,
}

/// Mints monotonically increasing IDs for a single worker
#[derive(Debug)]
pub struct SnowflakeGenerator {
    worker_id: u16,
    state: Mutex<GeneratorState>,
}

impl SnowflakeGenerator {
    /// Create a generator; worker IDs above 1023 are masked into range
    pub fn new(worker_id: u16) -> Self {
        Self {
            worker_id: worker_id & MAX_WORKER_ID,
            state: Mutex::new(GeneratorState {
                last_millis: 0,
                sequence: 0,
            }),
        }
    }

    pub fn worker_id(&self) -> u16 {
        self.worker_id
    }

    pub fn generate(&self) -> Snowflake {
        let mut state = self.state.lock();
        let mut now = now_millis().max(state.last_millis);

        if now == state.last_millis {
            state.sequence = (state.sequence + 1) & SEQUENCE_MASK;
            if state.sequence == 0 {
                // Sequence exhausted for this millisecond.
                while now <= state.last_millis {
                    std::hint::spin_loop();
                    now = now_millis();
                }
            }
        } else {
            state.sequence = 0;
        }
        state.last_millis = now;

        Snowflake(
            ((now - Snowflake::EPOCH) << (WORKER_BITS + SEQUENCE_BITS))
                | (i64::from(self.worker_id) << SEQUENCE_BITS)
                | state.sequence,
        )
    }
}

impl Default for SnowflakeGenerator {
    fn default() -> Self {
        Self::new(0)
    }
}

fn now_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(Snowflake::EPOCH)
}
