use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use std::sync::Arc;
use uuid::Uuid;

use coachfit_core::errors::{DatabaseError, Error};
use coachfit_core::goals::{Goal, GoalRepositoryTrait, NewGoal};
use coachfit_core::Result;

use super::model::GoalDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::{IntoCore, StorageError};
use crate::schema::goals;

pub struct GoalRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl GoalRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        GoalRepository { pool, writer }
    }
}

#[async_trait]
impl GoalRepositoryTrait for GoalRepository {
    fn get_by_id(&self, goal_id: &str) -> Result<Goal> {
        let mut conn = get_connection(&self.pool)?;
        let goal_db = goals::table
            .find(goal_id)
            .select(GoalDB::as_select())
            .first::<GoalDB>(&mut conn)
            .into_core()?;
        Ok(goal_db.into())
    }

    fn list_by_owner(&self, owner_id: &str) -> Result<Vec<Goal>> {
        let mut conn = get_connection(&self.pool)?;
        let goals_db = goals::table
            .filter(goals::owner_id.eq(owner_id))
            .order(goals::created_at.desc())
            .select(GoalDB::as_select())
            .load::<GoalDB>(&mut conn)
            .into_core()?;
        Ok(goals_db.into_iter().map(Goal::from).collect())
    }

    async fn create(
        &self,
        owner_id: &str,
        start_date: DateTime<Utc>,
        new_goal: NewGoal,
    ) -> Result<Goal> {
        let goal_db = GoalDB {
            id: Uuid::new_v4().to_string(),
            owner_id: owner_id.to_string(),
            name: new_goal.name,
            notes: new_goal.notes,
            start_date: start_date.naive_utc(),
            target_date: new_goal.target_date.naive_utc(),
            completed: false,
            created_at: Utc::now().naive_utc(),
        };

        self.writer
            .exec(move |conn| {
                let result_db = diesel::insert_into(goals::table)
                    .values(&goal_db)
                    .returning(GoalDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(Goal::from(result_db))
            })
            .await
    }

    async fn update(&self, goal: Goal) -> Result<Goal> {
        let goal_db: GoalDB = goal.into();
        self.writer
            .exec(move |conn| {
                let updated = diesel::update(goals::table.find(&goal_db.id))
                    .set(&goal_db)
                    .returning(GoalDB::as_returning())
                    .get_result(conn)
                    .optional()
                    .map_err(StorageError::from)?;
                updated.map(Goal::from).ok_or_else(|| {
                    Error::Database(DatabaseError::NotFound(format!("goal {}", goal_db.id)))
                })
            })
            .await
    }

    async fn delete(&self, goal_id: &str) -> Result<usize> {
        let goal_id = goal_id.to_string();
        self.writer
            .exec(move |conn| diesel::delete(goals::table.find(goal_id)).execute(conn).into_core())
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accounts::AccountRepository;
    use crate::testing::{profile, setup};
    use chrono::{Duration, TimeZone};
    use coachfit_core::accounts::{AccountRepositoryTrait, Role};
    use coachfit_core::goals::goals_progress;

    async fn repo_with_owner() -> (GoalRepository, AccountRepository, tempfile::TempDir) {
        let (pool, writer, dir) = setup();
        let accounts = AccountRepository::new(pool.clone(), writer.clone());
        accounts.create(profile("client-1", Role::Client)).await.unwrap();
        (GoalRepository::new(pool, writer), accounts, dir)
    }

    fn new_goal(name: &str, target: DateTime<Utc>) -> NewGoal {
        NewGoal {
            name: name.to_string(),
            notes: Some("twice a week".to_string()),
            target_date: target,
        }
    }

    #[tokio::test]
    async fn test_create_and_load_goal_keeps_instants() {
        let (repo, _accounts, _dir) = repo_with_owner().await;
        let start = Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap();
        let target = start + Duration::days(10);

        let created = repo
            .create("client-1", start, new_goal("10k run", target))
            .await
            .unwrap();
        let loaded = repo.get_by_id(&created.id).unwrap();

        assert_eq!(loaded, created);
        assert_eq!(loaded.start_date, start);
        assert_eq!(loaded.target_date, target);
        assert!(!loaded.completed);
        let progress = goals_progress::progress(&loaded, start + Duration::days(5));
        assert_eq!(progress.percent_elapsed, 50.0);
    }

    #[tokio::test]
    async fn test_goal_requires_existing_owner() {
        let (repo, _accounts, _dir) = repo_with_owner().await;
        let result = repo
            .create("nobody", Utc::now(), new_goal("Orphan", Utc::now()))
            .await;
        assert!(matches!(
            result,
            Err(Error::Database(DatabaseError::ForeignKeyViolation(_)))
        ));
    }

    #[tokio::test]
    async fn test_update_list_and_delete() {
        let (repo, _accounts, _dir) = repo_with_owner().await;
        let now = Utc::now();
        let goal = repo
            .create("client-1", now, new_goal("Squat 120kg", now + Duration::days(30)))
            .await
            .unwrap();

        let mut edited = goals_progress::toggle_completion(&goal);
        edited.notes = None;
        let saved = repo.update(edited).await.unwrap();
        assert!(saved.completed);
        assert_eq!(saved.notes, None);

        assert_eq!(repo.list_by_owner("client-1").unwrap().len(), 1);
        assert!(repo.list_by_owner("client-2").unwrap().is_empty());

        assert_eq!(repo.delete(&goal.id).await.unwrap(), 1);
        assert!(repo.get_by_id(&goal.id).unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_goals_cascade_with_owner() {
        let (repo, accounts, _dir) = repo_with_owner().await;
        let now = Utc::now();
        repo.create("client-1", now, new_goal("Plank 3min", now))
            .await
            .unwrap();

        accounts.delete("client-1").await.unwrap();
        assert!(repo.list_by_owner("client-1").unwrap().is_empty());
    }
}
