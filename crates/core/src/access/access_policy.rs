//! Role and ownership predicates.
//!
//! Predicates are plain functions of the caller and the target record. Services
//! call [`ensure`] with the predicate result before any repository mutation, so
//! a rejected operation never leaves partial effects.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::accounts::{Role, UserAccount};
use crate::goals::Goal;
use crate::{Error, Result};

/// Identity of the signed-in account invoking an operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Caller {
    pub id: String,
    pub role: Role,
}

impl Caller {
    pub fn new(id: impl Into<String>, role: Role) -> Self {
        Self {
            id: id.into(),
            role,
        }
    }

    pub fn is_coach(&self) -> bool {
        self.role == Role::Coach
    }
}

impl From<&UserAccount> for Caller {
    fn from(account: &UserAccount) -> Self {
        Caller::new(account.id.clone(), account.role)
    }
}

pub fn can_manage_users(caller: &Caller) -> bool {
    caller.is_coach()
}

/// Any coach may disable or reactivate any account, linked client or not.
pub fn can_disable(caller: &Caller, _target: &UserAccount) -> bool {
    caller.is_coach()
}

/// Coaches may delete other accounts, never their own.
pub fn can_delete_user(caller: &Caller, target: &UserAccount) -> bool {
    caller.is_coach() && caller.id != target.id
}

/// Own profile, or any profile for a coach.
pub fn can_view_profile(caller: &Caller, target: &UserAccount) -> bool {
    caller.is_coach() || caller.id == target.id
}

pub fn can_edit_profile(caller: &Caller, target: &UserAccount) -> bool {
    caller.id == target.id
}

pub fn can_view_goal(caller: &Caller, goal: &Goal) -> bool {
    caller.id == goal.owner_id
}

pub fn can_edit_goal(caller: &Caller, goal: &Goal) -> bool {
    caller.id == goal.owner_id
}

pub fn can_create_workout(caller: &Caller) -> bool {
    caller.is_coach()
}

pub fn can_view_progress(caller: &Caller, owner_id: &str) -> bool {
    caller.id == owner_id
}

/// Turns a failed predicate into `Unauthorized`.
pub fn ensure(allowed: bool, caller: &Caller, action: &str) -> Result<()> {
    if allowed {
        Ok(())
    } else {
        warn!(
            "Rejected '{}' for caller {} ({})",
            action, caller.id, caller.role
        );
        Err(Error::unauthorized(action))
    }
}
