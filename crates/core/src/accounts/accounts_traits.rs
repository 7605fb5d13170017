//! Account repository and service traits.
//!
//! These traits define the contract for account operations without any
//! database-specific types, allowing for different storage implementations.

use async_trait::async_trait;
use chrono::NaiveDate;

use super::accounts_model::{CoachClientLink, NewUserAccount, ProfileUpdate, UserAccount};
use crate::access::Caller;
use crate::errors::Result;

/// Trait defining the contract for profile persistence.
#[async_trait]
pub trait AccountRepositoryTrait: Send + Sync {
    /// Inserts a profile. The id comes from the identity service.
    async fn create(&self, account: UserAccount) -> Result<UserAccount>;

    /// Writes the full record, lifecycle fields included.
    async fn update(&self, account: UserAccount) -> Result<UserAccount>;

    /// Deletes a profile by its ID.
    ///
    /// Returns the number of deleted records.
    async fn delete(&self, account_id: &str) -> Result<usize>;

    /// Retrieves a profile by its ID.
    fn get_by_id(&self, account_id: &str) -> Result<UserAccount>;

    /// Lists profiles, newest first.
    ///
    /// # Arguments
    /// * `active_filter` - If Some, filter by active status
    fn list(&self, active_filter: Option<bool>) -> Result<Vec<UserAccount>>;
}

/// Trait for coach/client association persistence.
#[async_trait]
pub trait CoachClientRepositoryTrait: Send + Sync {
    async fn link(&self, link: CoachClientLink) -> Result<CoachClientLink>;

    /// Removes every link that references the client. Returns the number removed.
    async fn unlink_client(&self, client_id: &str) -> Result<usize>;

    /// Client ids linked to the coach.
    fn list_clients(&self, coach_id: &str) -> Result<Vec<String>>;
}

/// Trait defining the contract for account service operations.
///
/// Every mutating operation checks the access policy before touching storage.
#[async_trait]
pub trait AccountServiceTrait: Send + Sync {
    /// Coach creates an account; clients get linked to the coach.
    async fn provision_user(&self, caller: &Caller, new_user: NewUserAccount)
        -> Result<UserAccount>;

    /// Coach self-registration.
    async fn register_coach(&self, new_coach: NewUserAccount) -> Result<UserAccount>;

    fn get_profile(&self, caller: &Caller, account_id: &str) -> Result<UserAccount>;

    async fn update_profile(&self, caller: &Caller, update: ProfileUpdate) -> Result<UserAccount>;

    fn list_users(&self, caller: &Caller) -> Result<Vec<UserAccount>>;

    fn list_clients(&self, caller: &Caller) -> Result<Vec<UserAccount>>;

    async fn disable_user(
        &self,
        caller: &Caller,
        account_id: &str,
        duration_days: Option<i32>,
    ) -> Result<UserAccount>;

    async fn reactivate_user(&self, caller: &Caller, account_id: &str) -> Result<UserAccount>;

    /// Removes links, the profile and then the identity user. A failure in the
    /// last step is logged, not returned: without a profile the account can
    /// no longer log in.
    async fn delete_user(&self, caller: &Caller, account_id: &str) -> Result<()>;

    /// Scheduler entry point: reactivates every account whose temporary
    /// disablement has expired as of `today`.
    async fn reactivate_eligible_accounts(&self, today: NaiveDate) -> Result<Vec<UserAccount>>;
}
