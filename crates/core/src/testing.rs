//! In-memory fakes for the repository and identity traits, shared by the
//! service tests.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::accounts::{
    AccountRepositoryTrait, CoachClientLink, CoachClientRepositoryTrait, Role, UserAccount,
};
use crate::auth::{IdentityServiceTrait, Session};
use crate::errors::{DatabaseError, Result};
use crate::goals::{Goal, GoalRepositoryTrait, NewGoal};
use crate::progress::{NewProgressEntry, ProgressEntry, ProgressRepositoryTrait};
use crate::workouts::{NewWorkout, Workout, WorkoutFilter, WorkoutRepositoryTrait, WorkoutSession};
use crate::Error;

fn not_found(what: &str, id: &str) -> Error {
    Error::Database(DatabaseError::NotFound(format!("{} {}", what, id)))
}

pub fn account(id: &str, role: Role) -> UserAccount {
    UserAccount {
        id: id.to_string(),
        email: format!("{}@example.com", id),
        first_name: "Test".to_string(),
        last_name: id.to_string(),
        role,
        active: true,
        disabled_at: None,
        disabled_duration_days: None,
        birth_date: None,
        height_cm: None,
        weight_kg: None,
        fitness_goals: None,
        created_by: None,
        created_at: NaiveDateTime::default(),
    }
}

// --- Accounts ---

#[derive(Default)]
pub struct InMemoryAccountRepository {
    accounts: Mutex<Vec<UserAccount>>,
    writes: AtomicUsize,
    fail_creates: AtomicBool,
}

impl InMemoryAccountRepository {
    pub fn with_accounts(accounts: Vec<UserAccount>) -> Self {
        Self {
            accounts: Mutex::new(accounts),
            writes: AtomicUsize::new(0),
            fail_creates: AtomicBool::new(false),
        }
    }

    /// Makes every subsequent `create` fail as if the store were unavailable.
    pub fn fail_creates(&self, fail: bool) {
        self.fail_creates.store(fail, Ordering::SeqCst);
    }

    /// Number of create/update/delete calls received.
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub fn snapshot(&self, id: &str) -> Option<UserAccount> {
        self.accounts
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.id == id)
            .cloned()
    }
}

#[async_trait]
impl AccountRepositoryTrait for InMemoryAccountRepository {
    async fn create(&self, account: UserAccount) -> Result<UserAccount> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        if self.fail_creates.load(Ordering::SeqCst) {
            return Err(Error::Unexpected("disk full".to_string()));
        }
        self.accounts.lock().unwrap().push(account.clone());
        Ok(account)
    }

    async fn update(&self, account: UserAccount) -> Result<UserAccount> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        let mut accounts = self.accounts.lock().unwrap();
        let slot = accounts
            .iter_mut()
            .find(|a| a.id == account.id)
            .ok_or_else(|| not_found("account", &account.id))?;
        *slot = account.clone();
        Ok(account)
    }

    async fn delete(&self, account_id: &str) -> Result<usize> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        let mut accounts = self.accounts.lock().unwrap();
        let before = accounts.len();
        accounts.retain(|a| a.id != account_id);
        Ok(before - accounts.len())
    }

    fn get_by_id(&self, account_id: &str) -> Result<UserAccount> {
        self.snapshot(account_id)
            .ok_or_else(|| not_found("account", account_id))
    }

    fn list(&self, active_filter: Option<bool>) -> Result<Vec<UserAccount>> {
        Ok(self
            .accounts
            .lock()
            .unwrap()
            .iter()
            .filter(|a| active_filter.map_or(true, |active| a.active == active))
            .cloned()
            .collect())
    }
}

#[derive(Default)]
pub struct InMemoryCoachClientRepository {
    links: Mutex<Vec<CoachClientLink>>,
    fail_links: AtomicBool,
}

impl InMemoryCoachClientRepository {
    pub fn fail_links(&self, fail: bool) {
        self.fail_links.store(fail, Ordering::SeqCst);
    }

    pub fn links(&self) -> Vec<CoachClientLink> {
        self.links.lock().unwrap().clone()
    }
}

#[async_trait]
impl CoachClientRepositoryTrait for InMemoryCoachClientRepository {
    async fn link(&self, link: CoachClientLink) -> Result<CoachClientLink> {
        if self.fail_links.load(Ordering::SeqCst) {
            return Err(Error::Unexpected("link table locked".to_string()));
        }
        self.links.lock().unwrap().push(link.clone());
        Ok(link)
    }

    async fn unlink_client(&self, client_id: &str) -> Result<usize> {
        let mut links = self.links.lock().unwrap();
        let before = links.len();
        links.retain(|l| l.client_id != client_id);
        Ok(before - links.len())
    }

    fn list_clients(&self, coach_id: &str) -> Result<Vec<String>> {
        Ok(self
            .links
            .lock()
            .unwrap()
            .iter()
            .filter(|l| l.coach_id == coach_id)
            .map(|l| l.client_id.clone())
            .collect())
    }
}

// --- Identity ---

#[derive(Default)]
pub struct FakeIdentityService {
    /// email -> (user id, password)
    users: Mutex<HashMap<String, (String, String)>>,
    next_id: AtomicUsize,
    pub signed_out: Mutex<Vec<Session>>,
    pub deleted: Mutex<Vec<String>>,
    fail_deletes: AtomicBool,
}

impl FakeIdentityService {
    pub fn with_user(email: &str, user_id: &str, password: &str) -> Self {
        let identity = Self::default();
        identity.users.lock().unwrap().insert(
            email.to_string(),
            (user_id.to_string(), password.to_string()),
        );
        identity
    }

    pub fn fail_deletes(&self, fail: bool) {
        self.fail_deletes.store(fail, Ordering::SeqCst);
    }

    pub fn has_user(&self, email: &str) -> bool {
        self.users.lock().unwrap().contains_key(email)
    }

    pub fn signed_out_count(&self) -> usize {
        self.signed_out.lock().unwrap().len()
    }
}

#[async_trait]
impl IdentityServiceTrait for FakeIdentityService {
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session> {
        match self.users.lock().unwrap().get(email) {
            Some((user_id, stored)) if stored == password => Ok(Session {
                user_id: user_id.clone(),
                access_token: format!("token-{}", user_id),
            }),
            _ => Err(Error::Identity("Invalid login credentials".to_string())),
        }
    }

    async fn create_user(&self, email: &str, password: &str) -> Result<String> {
        let mut users = self.users.lock().unwrap();
        if users.contains_key(email) {
            return Err(Error::Identity("User already registered".to_string()));
        }
        let id = format!("user-{}", self.next_id.fetch_add(1, Ordering::SeqCst) + 1);
        users.insert(email.to_string(), (id.clone(), password.to_string()));
        Ok(id)
    }

    async fn sign_out(&self, session: &Session) -> Result<()> {
        self.signed_out.lock().unwrap().push(session.clone());
        Ok(())
    }

    async fn delete_user(&self, user_id: &str) -> Result<()> {
        if self.fail_deletes.load(Ordering::SeqCst) {
            return Err(Error::Identity("identity service unavailable".to_string()));
        }
        self.users.lock().unwrap().retain(|_, (id, _)| id != user_id);
        self.deleted.lock().unwrap().push(user_id.to_string());
        Ok(())
    }
}

// --- Goals ---

#[derive(Default)]
pub struct InMemoryGoalRepository {
    goals: Mutex<Vec<Goal>>,
    writes: AtomicUsize,
}

impl InMemoryGoalRepository {
    pub fn with_goals(goals: Vec<Goal>) -> Self {
        Self {
            goals: Mutex::new(goals),
            writes: AtomicUsize::new(0),
        }
    }

    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl GoalRepositoryTrait for InMemoryGoalRepository {
    fn get_by_id(&self, goal_id: &str) -> Result<Goal> {
        self.goals
            .lock()
            .unwrap()
            .iter()
            .find(|g| g.id == goal_id)
            .cloned()
            .ok_or_else(|| not_found("goal", goal_id))
    }

    fn list_by_owner(&self, owner_id: &str) -> Result<Vec<Goal>> {
        let mut goals: Vec<Goal> = self
            .goals
            .lock()
            .unwrap()
            .iter()
            .filter(|g| g.owner_id == owner_id)
            .cloned()
            .collect();
        goals.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(goals)
    }

    async fn create(
        &self,
        owner_id: &str,
        start_date: DateTime<Utc>,
        new_goal: NewGoal,
    ) -> Result<Goal> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        let mut goals = self.goals.lock().unwrap();
        let goal = Goal {
            id: format!("goal-{}", goals.len() + 1),
            owner_id: owner_id.to_string(),
            name: new_goal.name,
            notes: new_goal.notes,
            start_date,
            target_date: new_goal.target_date,
            completed: false,
            created_at: start_date.naive_utc(),
        };
        goals.push(goal.clone());
        Ok(goal)
    }

    async fn update(&self, goal: Goal) -> Result<Goal> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        let mut goals = self.goals.lock().unwrap();
        let slot = goals
            .iter_mut()
            .find(|g| g.id == goal.id)
            .ok_or_else(|| not_found("goal", &goal.id))?;
        *slot = goal.clone();
        Ok(goal)
    }

    async fn delete(&self, goal_id: &str) -> Result<usize> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        let mut goals = self.goals.lock().unwrap();
        let before = goals.len();
        goals.retain(|g| g.id != goal_id);
        Ok(before - goals.len())
    }
}

// --- Workouts ---

#[derive(Default)]
pub struct InMemoryWorkoutRepository {
    workouts: Mutex<Vec<Workout>>,
    pub sessions: Mutex<Vec<WorkoutSession>>,
}

impl InMemoryWorkoutRepository {
    pub fn with_workouts(workouts: Vec<Workout>) -> Self {
        Self {
            workouts: Mutex::new(workouts),
            sessions: Mutex::new(Vec::new()),
        }
    }

    pub fn count(&self) -> usize {
        self.workouts.lock().unwrap().len()
    }
}

#[async_trait]
impl WorkoutRepositoryTrait for InMemoryWorkoutRepository {
    fn get_by_id(&self, workout_id: &str) -> Result<Workout> {
        self.workouts
            .lock()
            .unwrap()
            .iter()
            .find(|w| w.id == workout_id)
            .cloned()
            .ok_or_else(|| not_found("workout", workout_id))
    }

    fn list_public(&self, filter: &WorkoutFilter) -> Result<Vec<Workout>> {
        let search = filter.search.as_ref().map(|s| s.to_lowercase());
        Ok(self
            .workouts
            .lock()
            .unwrap()
            .iter()
            .filter(|w| w.is_public)
            .filter(|w| filter.category.map_or(true, |c| w.category == c))
            .filter(|w| {
                search
                    .as_ref()
                    .map_or(true, |s| w.name.to_lowercase().contains(s))
            })
            .cloned()
            .collect())
    }

    async fn create(&self, coach_id: &str, new_workout: NewWorkout) -> Result<Workout> {
        let mut workouts = self.workouts.lock().unwrap();
        let workout = Workout {
            id: format!("workout-{}", workouts.len() + 1),
            name: new_workout.name,
            description: new_workout.description,
            duration_minutes: new_workout.duration_minutes.unwrap_or_default(),
            difficulty: new_workout.difficulty,
            category: new_workout.category,
            coach_id: coach_id.to_string(),
            is_public: new_workout.is_public,
            created_at: Utc::now().naive_utc(),
        };
        workouts.push(workout.clone());
        Ok(workout)
    }

    async fn create_session(
        &self,
        user_id: &str,
        workout_id: &str,
        started_at: DateTime<Utc>,
    ) -> Result<WorkoutSession> {
        let mut sessions = self.sessions.lock().unwrap();
        let session = WorkoutSession {
            id: format!("session-{}", sessions.len() + 1),
            user_id: user_id.to_string(),
            workout_id: workout_id.to_string(),
            started_at,
            completed: false,
        };
        sessions.push(session.clone());
        Ok(session)
    }
}

// --- Progress ---

#[derive(Default)]
pub struct InMemoryProgressRepository {
    entries: Mutex<Vec<ProgressEntry>>,
}

#[async_trait]
impl ProgressRepositoryTrait for InMemoryProgressRepository {
    fn list_by_user(&self, user_id: &str) -> Result<Vec<ProgressEntry>> {
        let mut entries: Vec<ProgressEntry> = self
            .entries
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.user_id == user_id)
            .cloned()
            .collect();
        entries.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(entries)
    }

    async fn create(
        &self,
        user_id: &str,
        date: NaiveDate,
        entry: NewProgressEntry,
    ) -> Result<ProgressEntry> {
        let mut entries = self.entries.lock().unwrap();
        let created = ProgressEntry {
            id: format!("progress-{}", entries.len() + 1),
            user_id: user_id.to_string(),
            date,
            weight_kg: entry.weight_kg,
            muscle_mass_kg: entry.muscle_mass_kg,
            body_fat_percent: entry.body_fat_percent,
            waist_cm: entry.waist_cm,
            chest_cm: entry.chest_cm,
            arms_cm: entry.arms_cm,
            notes: entry.notes,
        };
        entries.push(created.clone());
        Ok(created)
    }
}
