//! Account lifecycle state machine.
//!
//! ```text
//!            disable(Some(days))
//!   Active ─────────────────────► TemporarilyDisabled
//!     │  ▲                                │
//!     │  └──────── reactivate ────────────┤
//!     │  ┌──────── reactivate ────────────┘
//!     │  │
//!     └──┴─────────────────────► PermanentlyDisabled
//!            disable(None)
//! ```
//!
//! All functions are pure. The caller supplies `today` so results never depend
//! on the wall clock.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::accounts_model::UserAccount;
use crate::utils::time_utils::add_calendar_days;
use crate::{Error, Result};

/// Lifecycle state derived from an account's persisted fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum AccountState {
    Active,
    TemporarilyDisabled {
        disabled_at: NaiveDate,
        duration_days: i32,
    },
    PermanentlyDisabled,
}

impl AccountState {
    pub fn name(&self) -> &'static str {
        match self {
            AccountState::Active => "active",
            AccountState::TemporarilyDisabled { .. } => "temporarily_disabled",
            AccountState::PermanentlyDisabled => "permanently_disabled",
        }
    }
}

/// Derives the lifecycle state of an account.
///
/// An inactive record missing either half of the disablement pair is read as
/// permanently disabled.
pub fn state(account: &UserAccount) -> AccountState {
    if account.active {
        return AccountState::Active;
    }
    match (account.disabled_at, account.disabled_duration_days) {
        (Some(disabled_at), Some(duration_days)) if duration_days > 0 => {
            AccountState::TemporarilyDisabled {
                disabled_at,
                duration_days,
            }
        }
        _ => AccountState::PermanentlyDisabled,
    }
}

/// Disables an active account, temporarily when `duration_days` is given.
///
/// Disabling an account that is already disabled returns it unchanged; the
/// original `disabled_at` is never refreshed.
pub fn disable(
    account: &UserAccount,
    duration_days: Option<i32>,
    today: NaiveDate,
) -> Result<UserAccount> {
    if let Some(days) = duration_days {
        if days <= 0 {
            return Err(Error::invalid_input(format!(
                "Disablement duration must be a positive number of days, got {}",
                days
            )));
        }
    }

    if !account.active {
        return Ok(account.clone());
    }

    let mut disabled = account.clone();
    disabled.active = false;
    disabled.disabled_at = duration_days.map(|_| today);
    disabled.disabled_duration_days = duration_days;
    Ok(disabled)
}

/// Returns the account as active with the disablement fields cleared.
pub fn reactivate(account: &UserAccount) -> UserAccount {
    let mut reactivated = account.clone();
    reactivated.active = true;
    reactivated.disabled_at = None;
    reactivated.disabled_duration_days = None;
    reactivated
}

/// Calendar date on which a temporarily disabled account becomes usable again.
///
/// `None` for active and permanently disabled accounts.
pub fn reactivation_date(account: &UserAccount) -> Option<NaiveDate> {
    match state(account) {
        AccountState::TemporarilyDisabled {
            disabled_at,
            duration_days,
        } => u32::try_from(duration_days)
            .ok()
            .and_then(|days| add_calendar_days(disabled_at, days)),
        _ => None,
    }
}

/// True when the account is temporarily disabled and its period has run out.
pub fn is_eligible_for_auto_reactivation(account: &UserAccount, today: NaiveDate) -> bool {
    reactivation_date(account).is_some_and(|date| today >= date)
}

pub fn can_login(account: &UserAccount) -> bool {
    account.active
}

/// Login gate. Fails with `AccountDisabled`, carrying the reactivation date
/// for temporary disablements.
pub fn check_login(account: &UserAccount) -> Result<()> {
    if can_login(account) {
        return Ok(());
    }
    Err(Error::AccountDisabled {
        reactivation_date: reactivation_date(account),
    })
}
