//! Value objects - immutable types that represent domain concepts

mod clock;
mod snowflake;

pub use clock::{Clock, FixedClock, SystemClock};
pub use snowflake::{Snowflake, SnowflakeGenerator, SnowflakeParseError};
