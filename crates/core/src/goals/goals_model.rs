//! Goals domain models.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use super::goals_progress::GoalProgress;
use crate::{Error, Result};

/// Domain model representing a goal.
///
/// `target_date` is not required to follow `start_date`; goals may be created
/// already overdue.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    pub owner_id: String,
    pub name: String,
    pub notes: Option<String>,
    pub start_date: DateTime<Utc>,
    pub target_date: DateTime<Utc>,
    pub completed: bool,
    pub created_at: NaiveDateTime,
}

/// Input model for creating a new goal. The owner and start date come from
/// the caller and the clock.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewGoal {
    pub name: String,
    pub notes: Option<String>,
    pub target_date: DateTime<Utc>,
}

impl NewGoal {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::invalid_input("Goal name cannot be empty"));
        }
        Ok(())
    }
}

/// A goal paired with its derived metrics, as shown in list views.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalWithProgress {
    pub goal: Goal,
    pub progress: GoalProgress,
}
