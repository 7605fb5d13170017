//! Shared setup for repository tests: a migrated temp database and fixtures.

use chrono::NaiveDateTime;
use std::sync::Arc;
use tempfile::{tempdir, TempDir};

use coachfit_core::accounts::{Role, UserAccount};

use crate::db::{create_pool, run_migrations, spawn_writer, DbPool, WriteHandle};

/// Creates a migrated database in a temp directory and starts its writer.
/// Keep the returned `TempDir` alive for the duration of the test.
pub fn setup() -> (Arc<DbPool>, WriteHandle, TempDir) {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let db_path = temp_dir.path().join("test.db");

    let pool = create_pool(&db_path.to_string_lossy()).expect("Failed to create pool");
    run_migrations(&pool).expect("Failed to run migrations");
    let writer = spawn_writer((*pool).clone());

    (pool, writer, temp_dir)
}

pub fn profile(id: &str, role: Role) -> UserAccount {
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
