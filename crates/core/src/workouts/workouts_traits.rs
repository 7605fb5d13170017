use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::workouts_model::{NewWorkout, Workout, WorkoutFilter, WorkoutSession};
use crate::access::Caller;
use crate::errors::Result;

/// Trait for workout repository operations
#[async_trait]
pub trait WorkoutRepositoryTrait: Send + Sync {
    fn get_by_id(&self, workout_id: &str) -> Result<Workout>;

    /// Public workouts matching the filter, newest first.
    fn list_public(&self, filter: &WorkoutFilter) -> Result<Vec<Workout>>;

    /// Inserts a validated workout. `duration_minutes` is always set here.
    async fn create(&self, coach_id: &str, new_workout: NewWorkout) -> Result<Workout>;

    async fn create_session(
        &self,
        user_id: &str,
        workout_id: &str,
        started_at: DateTime<Utc>,
    ) -> Result<WorkoutSession>;
}

/// Trait for workout service operations
#[async_trait]
pub trait WorkoutServiceTrait: Send + Sync {
    async fn create_workout(&self, caller: &Caller, new_workout: NewWorkout) -> Result<Workout>;
    fn list_public_workouts(&self, filter: &WorkoutFilter) -> Result<Vec<Workout>>;
    async fn start_workout(&self, caller: &Caller, workout_id: &str) -> Result<WorkoutSession>;
}
