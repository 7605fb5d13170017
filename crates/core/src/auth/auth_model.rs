//! Authentication domain models.

use serde::{Deserialize, Serialize};

use crate::accounts::UserAccount;

/// Session handed out by the identity service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub user_id: String,
    pub access_token: String,
}

/// Successful login: the live session and the profile it belongs to.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginOutcome {
    pub session: Session,
    pub account: UserAccount,
}
