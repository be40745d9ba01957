use habit_core::entities::HabitLog;
use habit_core::value_objects::Snowflake;

use crate::models::HabitLogModel;

impl From<HabitLogModel> for HabitLog {
    fn from(model: HabitLogModel) -> Self {
        HabitLog {
            id: Snowflake::new(model.id),
            habit_id: Snowflake::new(model.habit_id),
            user_id: Snowflake::new(model.user_id),
            date: model.date,
            completed: model.completed,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
