use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::access::Caller;
use crate::errors::Result;
use crate::goals::goals_model::{Goal, GoalWithProgress, NewGoal};

/// Trait for goal repository operations
#[async_trait]
pub trait GoalRepositoryTrait: Send + Sync {
    fn get_by_id(&self, goal_id: &str) -> Result<Goal>;
    /// Goals of one owner, newest first.
    fn list_by_owner(&self, owner_id: &str) -> Result<Vec<Goal>>;
    async fn create(
        &self,
        owner_id: &str,
        start_date: DateTime<Utc>,
        new_goal: NewGoal,
    ) -> Result<Goal>;
    async fn update(&self, goal: Goal) -> Result<Goal>;
    async fn delete(&self, goal_id: &str) -> Result<usize>;
}

/// Trait for goal service operations
#[async_trait]
pub trait GoalServiceTrait: Send + Sync {
    async fn create_goal(&self, caller: &Caller, new_goal: NewGoal) -> Result<Goal>;
    fn get_goal(&self, caller: &Caller, goal_id: &str) -> Result<GoalWithProgress>;
    fn list_goals(&self, caller: &Caller) -> Result<Vec<GoalWithProgress>>;
    async fn update_goal(&self, caller: &Caller, goal: Goal) -> Result<Goal>;
    async fn toggle_goal_completion(&self, caller: &Caller, goal_id: &str) -> Result<Goal>;
    async fn delete_goal(&self, caller: &Caller, goal_id: &str) -> Result<()>;
}
