//! Database models for profiles and coach/client links.

use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;

use coachfit_core::accounts::{CoachClientLink, Role, UserAccount};
use coachfit_core::Result;

use crate::errors::StorageError;

/// Database model for the `profiles` table.
#[derive(Queryable, Identifiable, Insertable, AsChangeset, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::profiles)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[diesel(treat_none_as_null = true)]
pub struct ProfileDB {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: String,
    pub active: bool,
    pub disabled_at: Option<NaiveDate>,
    pub disabled_duration_days: Option<i32>,
    pub birth_date: Option<NaiveDate>,
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
    pub fitness_goals: Option<String>,
    pub created_by: Option<String>,
    pub created_at: NaiveDateTime,
}

impl TryFrom<ProfileDB> for UserAccount {
    type Error = coachfit_core::Error;

    fn try_from(db: ProfileDB) -> Result<Self> {
        let role = db.role.parse::<Role>().map_err(|_| {
            StorageError::CorruptRow(format!("profile {} has role '{}'", db.id, db.role))
        })?;
        Ok(Self {
            id: db.id,
            email: db.email,
            first_name: db.first_name,
            last_name: db.last_name,
            role,
            active: db.active,
            disabled_at: db.disabled_at,
            disabled_duration_days: db.disabled_duration_days,
            birth_date: db.birth_date,
            height_cm: db.height_cm,
            weight_kg: db.weight_kg,
            fitness_goals: db.fitness_goals,
            created_by: db.created_by,
            created_at: db.created_at,
        })
    }
}

impl From<UserAccount> for ProfileDB {
    fn from(domain: UserAccount) -> Self {
        Self {
            id: domain.id,
            email: domain.email,
            first_name: domain.first_name,
            last_name: domain.last_name,
            role: domain.role.as_str().to_string(),
            active: domain.active,
            disabled_at: domain.disabled_at,
            disabled_duration_days: domain.disabled_duration_days,
            birth_date: domain.birth_date,
            height_cm: domain.height_cm,
            weight_kg: domain.weight_kg,
            fitness_goals: domain.fitness_goals,
            created_by: domain.created_by,
            created_at: domain.created_at,
        }
    }
}

/// Database model for the `coach_clients` table.
#[derive(Queryable, Insertable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::coach_clients)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct CoachClientDB {
    pub coach_id: String,
    pub client_id: String,
    pub created_at: NaiveDateTime,
}

impl From<CoachClientLink> for CoachClientDB {
    fn from(link: CoachClientLink) -> Self {
        Self {
            coach_id: link.coach_id,
            client_id: link.client_id,
            created_at: chrono::Utc::now().naive_utc(),
        }
    }
}

impl From<CoachClientDB> for CoachClientLink {
    fn from(db: CoachClientDB) -> Self {
        Self {
            coach_id: db.coach_id,
            client_id: db.client_id,
        }
    }
}
