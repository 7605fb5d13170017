//! User account domain models.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;
use crate::{Error, Result};

/// Role of an account. Fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// End trainee; owns goals and progress records
    #[default]
    Client,
    /// Manages workouts and other users
    Coach,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Client => "client",
            Role::Coach => "coach",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "client" => Ok(Role::Client),
            "coach" => Ok(Role::Coach),
            other => Err(Error::Validation(ValidationError::UnknownVariant {
                kind: "role",
                value: other.to_string(),
            })),
        }
    }
}

/// Domain model representing a user account (profile).
///
/// `disabled_at` and `disabled_duration_days` are either both set (temporary
/// disablement) or both unset. They are always unset while `active` is true.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserAccount {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
    pub active: bool,
    pub disabled_at: Option<NaiveDate>,
    pub disabled_duration_days: Option<i32>,
    pub birth_date: Option<NaiveDate>,
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
    pub fitness_goals: Option<String>,
    /// Coach that provisioned the account, if any
    pub created_by: Option<String>,
    pub created_at: NaiveDateTime,
}

impl UserAccount {
    pub fn is_coach(&self) -> bool {
        self.role == Role::Coach
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Input model for creating a new account.
///
/// The password is handed to the identity service and never stored on the
/// profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUserAccount {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub role: Role,
}

impl NewUserAccount {
    /// Validates the new account data.
    pub fn validate(&self) -> Result<()> {
        if self.email.trim().is_empty() {
            return Err(Error::invalid_input("Email cannot be empty"));
        }
        if self.password.is_empty() {
            return Err(Error::invalid_input("Password cannot be empty"));
        }
        if self.first_name.trim().is_empty() || self.last_name.trim().is_empty() {
            return Err(Error::invalid_input("First and last name are required"));
        }
        Ok(())
    }

    /// Builds the profile record for a freshly created identity.
    pub fn into_profile(
        self,
        id: String,
        created_by: Option<String>,
        created_at: NaiveDateTime,
    ) -> UserAccount {
        UserAccount {
            id,
            email: self.email.trim().to_string(),
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            role: self.role,
            active: true,
            disabled_at: None,
            disabled_duration_days: None,
            birth_date: None,
            height_cm: None,
            weight_kg: None,
            fitness_goals: None,
            created_by,
            created_at,
        }
    }
}

/// Self-service profile edit. Role, email and lifecycle fields are not editable.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: Option<NaiveDate>,
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
    pub fitness_goals: Option<String>,
}

impl ProfileUpdate {
    /// Validates the profile update data.
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(Error::invalid_input("Profile ID is required for updates"));
        }
        if self.first_name.trim().is_empty() || self.last_name.trim().is_empty() {
            return Err(Error::invalid_input("First and last name cannot be empty"));
        }
        Ok(())
    }

    /// Applies the editable fields onto an existing profile.
    pub fn apply_to(self, mut account: UserAccount) -> UserAccount {
        account.first_name = self.first_name.trim().to_string();
        account.last_name = self.last_name.trim().to_string();
        account.birth_date = self.birth_date;
        account.height_cm = self.height_cm;
        account.weight_kg = self.weight_kg;
        account.fitness_goals = self.fitness_goals;
        account
    }
}

/// Association between a coach and a client it provisioned.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CoachClientLink {
    pub coach_id: String,
    pub client_id: String,
}
