use async_trait::async_trait;
use chrono::Utc;
use log::{debug, info};
use std::sync::Arc;

use super::workouts_model::{NewWorkout, Workout, WorkoutFilter, WorkoutSession};
use super::workouts_traits::{WorkoutRepositoryTrait, WorkoutServiceTrait};
use crate::access::{self, Caller};
use crate::constants::DEFAULT_WORKOUT_DURATION_MINUTES;
use crate::errors::Result;

pub struct WorkoutService {
    repository: Arc<dyn WorkoutRepositoryTrait>,
}

impl WorkoutService {
    pub fn new(repository: Arc<dyn WorkoutRepositoryTrait>) -> Self {
        WorkoutService { repository }
    }
}

#[async_trait]
impl WorkoutServiceTrait for WorkoutService {
    async fn create_workout(&self, caller: &Caller, mut new_workout: NewWorkout) -> Result<Workout> {
        access::ensure(access::can_create_workout(caller), caller, "create workouts")?;
        new_workout.validate()?;

        new_workout.name = new_workout.name.trim().to_string();
        new_workout.description = new_workout
            .description
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());
        new_workout
            .duration_minutes
            .get_or_insert(DEFAULT_WORKOUT_DURATION_MINUTES);

        let workout = self.repository.create(&caller.id, new_workout).await?;
        info!("Coach {} created workout {}", caller.id, workout.id);
        Ok(workout)
    }

    fn list_public_workouts(&self, filter: &WorkoutFilter) -> Result<Vec<Workout>> {
        let filter = WorkoutFilter {
            category: filter.category,
            search: filter
                .search
                .as_ref()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
        };
        self.repository.list_public(&filter)
    }

    async fn start_workout(&self, caller: &Caller, workout_id: &str) -> Result<WorkoutSession> {
        let workout = self.repository.get_by_id(workout_id)?;
        access::ensure(
            workout.is_public || workout.coach_id == caller.id,
            caller,
            "start this workout",
        )?;
        debug!("{} starting workout {}", caller.id, workout.id);
        self.repository
            .create_session(&caller.id, &workout.id, Utc::now())
            .await
    }
}
