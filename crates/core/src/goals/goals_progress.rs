//! Derived goal metrics.
//!
//! Everything here is a pure function of `(goal, now)`; nothing is persisted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::goals_model::Goal;
use crate::utils::time_utils::ceil_days_between;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GoalStatus {
    OnTrack,
    Overdue,
    Completed,
}

/// Snapshot of a goal's derived metrics at a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalProgress {
    pub percent_elapsed: f64,
    pub days_remaining: i64,
    pub status: GoalStatus,
}

/// Whole days until the target date, rounded up. Negative once overdue.
pub fn days_remaining(goal: &Goal, now: DateTime<Utc>) -> i64 {
    ceil_days_between(now, goal.target_date)
}

/// Share of the goal window already elapsed, in `[0, 100]`.
///
/// A window of zero (or negative) length counts as fully elapsed from the
/// start date onwards.
pub fn percent_elapsed(goal: &Goal, now: DateTime<Utc>) -> f64 {
    let total_days = ceil_days_between(goal.start_date, goal.target_date);
    if total_days <= 0 {
        return if now >= goal.start_date { 100.0 } else { 0.0 };
    }

    let elapsed_days = ceil_days_between(goal.start_date, now);
    (elapsed_days as f64 / total_days as f64 * 100.0).clamp(0.0, 100.0)
}

/// `Completed` wins over any date math.
pub fn status(goal: &Goal, now: DateTime<Utc>) -> GoalStatus {
    if goal.completed {
        GoalStatus::Completed
    } else if days_remaining(goal, now) < 0 {
        GoalStatus::Overdue
    } else {
        GoalStatus::OnTrack
    }
}

pub fn toggle_completion(goal: &Goal) -> Goal {
    Goal {
        completed: !goal.completed,
        ..goal.clone()
    }
}

pub fn progress(goal: &Goal, now: DateTime<Utc>) -> GoalProgress {
    GoalProgress {
        percent_elapsed: percent_elapsed(goal, now),
        days_remaining: days_remaining(goal, now),
        status: status(goal, now),
    }
}
