use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use std::sync::Arc;
use uuid::Uuid;

use coachfit_core::constants::DEFAULT_WORKOUT_DURATION_MINUTES;
use coachfit_core::workouts::{
    NewWorkout, Workout, WorkoutFilter, WorkoutRepositoryTrait, WorkoutSession,
};
use coachfit_core::Result;

use super::model::{WorkoutDB, WorkoutSessionDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::{IntoCore, StorageError};
use crate::schema::{workout_sessions, workouts};

pub struct WorkoutRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl WorkoutRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        WorkoutRepository { pool, writer }
    }
}

/// Escapes `LIKE` wildcards so user search text matches literally.
fn like_pattern(search: &str) -> String {
    let escaped = search
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{}%", escaped)
}

#[async_trait]
impl WorkoutRepositoryTrait for WorkoutRepository {
    fn get_by_id(&self, workout_id: &str) -> Result<Workout> {
        let mut conn = get_connection(&self.pool)?;
        workouts::table
            .find(workout_id)
            .select(WorkoutDB::as_select())
            .first::<WorkoutDB>(&mut conn)
            .into_core()?
            .try_into()
    }

    fn list_public(&self, filter: &WorkoutFilter) -> Result<Vec<Workout>> {
        let mut conn = get_connection(&self.pool)?;

        let mut query = workouts::table
            .filter(workouts::is_public.eq(true))
            .into_boxed();
        if let Some(category) = filter.category {
            query = query.filter(workouts::category.eq(category.as_str()));
        }
        // SQLite LIKE is case-insensitive for ASCII
        if let Some(search) = filter.search.as_deref() {
            query = query.filter(workouts::name.like(like_pattern(search)).escape('\\'));
        }

        let rows = query
            .select(WorkoutDB::as_select())
            .order(workouts::created_at.desc())
            .load::<WorkoutDB>(&mut conn)
            .into_core()?;

        rows.into_iter().map(Workout::try_from).collect()
    }

    async fn create(&self, coach_id: &str, new_workout: NewWorkout) -> Result<Workout> {
        let workout_db = WorkoutDB {
            id: Uuid::new_v4().to_string(),
            name: new_workout.name,
            description: new_workout.description,
            duration_minutes: new_workout
                .duration_minutes
                .unwrap_or(DEFAULT_WORKOUT_DURATION_MINUTES),
            difficulty: new_workout.difficulty.as_str().to_string(),
            category: new_workout.category.as_str().to_string(),
            coach_id: coach_id.to_string(),
            is_public: new_workout.is_public,
            created_at: Utc::now().naive_utc(),
        };

        self.writer
            .exec(move |conn| {
                diesel::insert_into(workouts::table)
                    .values(&workout_db)
                    .returning(WorkoutDB::as_returning())
                    .get_result::<WorkoutDB>(conn)
                    .map_err(StorageError::from)?
                    .try_into()
            })
            .await
    }

    async fn create_session(
        &self,
        user_id: &str,
        workout_id: &str,
        started_at: DateTime<Utc>,
    ) -> Result<WorkoutSession> {
        let session_db = WorkoutSessionDB {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            workout_id: workout_id.to_string(),
            started_at: started_at.naive_utc(),
            completed: false,
        };

        self.writer
            .exec(move |conn| {
                diesel::insert_into(workout_sessions::table)
                    .values(&session_db)
                    .execute(conn)
                    .map_err(StorageError::from)?;
                Ok(session_db.into())
            })
            .await
    }
}
