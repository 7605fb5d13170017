//! Workout domain models.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::KCAL_PER_WORKOUT_MINUTE;
use crate::errors::ValidationError;
use crate::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "beginner" => Ok(Difficulty::Beginner),
            "intermediate" => Ok(Difficulty::Intermediate),
            "advanced" => Ok(Difficulty::Advanced),
            other => Err(Error::Validation(ValidationError::UnknownVariant {
                kind: "difficulty",
                value: other.to_string(),
            })),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutCategory {
    #[default]
    Cardio,
    Strength,
    Yoga,
    Boxing,
    Stretching,
}

impl WorkoutCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkoutCategory::Cardio => "cardio",
            WorkoutCategory::Strength => "strength",
            WorkoutCategory::Yoga => "yoga",
            WorkoutCategory::Boxing => "boxing",
            WorkoutCategory::Stretching => "stretching",
        }
    }
}

impl fmt::Display for WorkoutCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorkoutCategory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "cardio" => Ok(WorkoutCategory::Cardio),
            "strength" => Ok(WorkoutCategory::Strength),
            "yoga" => Ok(WorkoutCategory::Yoga),
            "boxing" => Ok(WorkoutCategory::Boxing),
            "stretching" => Ok(WorkoutCategory::Stretching),
            other => Err(Error::Validation(ValidationError::UnknownVariant {
                kind: "workout category",
                value: other.to_string(),
            })),
        }
    }
}

/// Domain model representing a coach-authored workout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Workout {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub duration_minutes: i32,
    pub difficulty: Difficulty,
    pub category: WorkoutCategory,
    pub coach_id: String,
    pub is_public: bool,
    pub created_at: NaiveDateTime,
}

impl Workout {
    pub fn estimated_calories(&self) -> i32 {
        self.duration_minutes.saturating_mul(KCAL_PER_WORKOUT_MINUTE)
    }
}

fn default_public() -> bool {
    true
}

/// Input model for authoring a workout.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewWorkout {
    pub name: String,
    pub description: Option<String>,
    /// Falls back to the default duration when absent
    pub duration_minutes: Option<i32>,
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default)]
    pub category: WorkoutCategory,
    #[serde(default = "default_public")]
    pub is_public: bool,
}

impl NewWorkout {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            duration_minutes: None,
            difficulty: Difficulty::default(),
            category: WorkoutCategory::default(),
            is_public: true,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::invalid_input("Workout name cannot be empty"));
        }
        if let Some(minutes) = self.duration_minutes {
            if minutes <= 0 {
                return Err(Error::invalid_input(
                    "Workout duration must be a positive number of minutes",
                ));
            }
        }
        Ok(())
    }
}

/// Listing filter for the public catalogue.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutFilter {
    pub category: Option<WorkoutCategory>,
    /// Case-insensitive substring match on the workout name
    pub search: Option<String>,
}

/// A user starting a workout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutSession {
    pub id: String,
    pub user_id: String,
    pub workout_id: String,
    pub started_at: DateTime<Utc>,
    pub completed: bool,
}
