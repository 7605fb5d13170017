//! Database models for workouts.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use coachfit_core::workouts::{Difficulty, Workout, WorkoutCategory, WorkoutSession};
use coachfit_core::Result;

use crate::errors::StorageError;

/// Database model for workouts. Difficulty and category are stored as their
/// lowercase names.
#[derive(Queryable, Identifiable, Insertable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::workouts)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct WorkoutDB {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub duration_minutes: i32,
    pub difficulty: String,
    pub category: String,
    pub coach_id: String,
    pub is_public: bool,
    pub created_at: NaiveDateTime,
}

impl TryFrom<WorkoutDB> for Workout {
    type Error = coachfit_core::Error;

    fn try_from(db: WorkoutDB) -> Result<Self> {
        let difficulty = db.difficulty.parse::<Difficulty>().map_err(|_| {
            StorageError::CorruptRow(format!("workout {} has difficulty '{}'", db.id, db.difficulty))
        })?;
        let category = db.category.parse::<WorkoutCategory>().map_err(|_| {
            StorageError::CorruptRow(format!("workout {} has category '{}'", db.id, db.category))
        })?;
        Ok(Self {
            id: db.id,
            name: db.name,
            description: db.description,
            duration_minutes: db.duration_minutes,
            difficulty,
            category,
            coach_id: db.coach_id,
            is_public: db.is_public,
            created_at: db.created_at,
        })
    }
}

#[derive(Queryable, Identifiable, Insertable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::workout_sessions)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct WorkoutSessionDB {
    pub id: String,
    pub user_id: String,
    pub workout_id: String,
    pub started_at: NaiveDateTime,
    pub completed: bool,
}

impl From<WorkoutSessionDB> for WorkoutSession {
    fn from(db: WorkoutSessionDB) -> Self {
        Self {
            id: db.id,
            user_id: db.user_id,
            workout_id: db.workout_id,
            started_at: db.started_at.and_utc(),
            completed: db.completed,
        }
    }
}
