use async_trait::async_trait;
use chrono::Utc;
use log::debug;
use std::sync::Arc;

use crate::access::{self, Caller};
use crate::errors::Result;
use crate::goals::goals_model::{Goal, GoalWithProgress, NewGoal};
use crate::goals::goals_progress;
use crate::goals::goals_traits::{GoalRepositoryTrait, GoalServiceTrait};
use crate::Error;

pub struct GoalService {
    goal_repo: Arc<dyn GoalRepositoryTrait>,
}

impl GoalService {
    pub fn new(goal_repo: Arc<dyn GoalRepositoryTrait>) -> Self {
        GoalService { goal_repo }
    }

    /// Loads a goal the caller is allowed to edit.
    fn load_editable(&self, caller: &Caller, goal_id: &str) -> Result<Goal> {
        let goal = self.goal_repo.get_by_id(goal_id)?;
        access::ensure(access::can_edit_goal(caller, &goal), caller, "edit this goal")?;
        Ok(goal)
    }
}

#[async_trait]
impl GoalServiceTrait for GoalService {
    async fn create_goal(&self, caller: &Caller, mut new_goal: NewGoal) -> Result<Goal> {
        new_goal.validate()?;
        new_goal.name = new_goal.name.trim().to_string();
        debug!("Creating goal '{}' for {}", new_goal.name, caller.id);
        self.goal_repo
            .create(&caller.id, Utc::now(), new_goal)
            .await
    }

    fn get_goal(&self, caller: &Caller, goal_id: &str) -> Result<GoalWithProgress> {
        let goal = self.goal_repo.get_by_id(goal_id)?;
        access::ensure(access::can_view_goal(caller, &goal), caller, "view this goal")?;
        let progress = goals_progress::progress(&goal, Utc::now());
        Ok(GoalWithProgress { goal, progress })
    }

    fn list_goals(&self, caller: &Caller) -> Result<Vec<GoalWithProgress>> {
        let now = Utc::now();
        Ok(self
            .goal_repo
            .list_by_owner(&caller.id)?
            .into_iter()
            .map(|goal| {
                let progress = goals_progress::progress(&goal, now);
                GoalWithProgress { goal, progress }
            })
            .collect())
    }

    async fn update_goal(&self, caller: &Caller, goal: Goal) -> Result<Goal> {
        let existing = self.load_editable(caller, &goal.id)?;
        if goal.name.trim().is_empty() {
            return Err(Error::invalid_input("Goal name cannot be empty"));
        }
        if goal.owner_id != existing.owner_id {
            return Err(Error::invalid_input("Goal owner cannot be changed"));
        }
        self.goal_repo
            .update(Goal {
                name: goal.name.trim().to_string(),
                created_at: existing.created_at,
                ..goal
            })
            .await
    }

    async fn toggle_goal_completion(&self, caller: &Caller, goal_id: &str) -> Result<Goal> {
        let goal = self.load_editable(caller, goal_id)?;
        self.goal_repo
            .update(goals_progress::toggle_completion(&goal))
            .await
    }

    async fn delete_goal(&self, caller: &Caller, goal_id: &str) -> Result<()> {
        self.load_editable(caller, goal_id)?;
        self.goal_repo.delete(goal_id).await?;
        Ok(())
    }
}
