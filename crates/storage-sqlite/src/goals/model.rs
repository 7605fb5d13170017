//! Database models for goals.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use coachfit_core::goals::Goal;

/// Database model for goals. Instants are stored as naive UTC.
#[derive(Queryable, Identifiable, Insertable, AsChangeset, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::goals)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[diesel(treat_none_as_null = true)]
pub struct GoalDB {
    pub id: String,
    pub owner_id: String,
    pub name: String,
    pub notes: Option<String>,
    pub start_date: NaiveDateTime,
    pub target_date: NaiveDateTime,
    pub completed: bool,
    pub created_at: NaiveDateTime,
}

impl From<GoalDB> for Goal {
    fn from(db: GoalDB) -> Self {
        Self {
            id: db.id,
            owner_id: db.owner_id,
            name: db.name,
            notes: db.notes,
            start_date: db.start_date.and_utc(),
            target_date: db.target_date.and_utc(),
            completed: db.completed,
            created_at: db.created_at,
        }
    }
}

impl From<Goal> for GoalDB {
    fn from(domain: Goal) -> Self {
        Self {
            id: domain.id,
            owner_id: domain.owner_id,
            name: domain.name,
            notes: domain.notes,
            start_date: domain.start_date.naive_utc(),
            target_date: domain.target_date.naive_utc(),
            completed: domain.completed,
            created_at: domain.created_at,
        }
    }
}
