/// Duration assigned to a workout when the author leaves it blank.
pub const DEFAULT_WORKOUT_DURATION_MINUTES: i32 = 30;

/// Rough energy expenditure used for the workout calorie estimate.
pub const KCAL_PER_WORKOUT_MINUTE: i32 = 8;

/// Length of a day in milliseconds, used by the goal window math.
pub const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;
