use chrono::{NaiveDate, Utc};
use log::{debug, info, warn};
use std::sync::Arc;

use super::accounts_lifecycle as lifecycle;
use super::accounts_model::{CoachClientLink, NewUserAccount, ProfileUpdate, Role, UserAccount};
use super::accounts_traits::{
    AccountRepositoryTrait, AccountServiceTrait, CoachClientRepositoryTrait,
};
use crate::access::{self, Caller};
use crate::auth::IdentityServiceTrait;
use crate::errors::Result;
use crate::utils::time_utils::today_utc;

/// Service for managing user accounts and their lifecycle
pub struct AccountService {
    repository: Arc<dyn AccountRepositoryTrait>,
    links: Arc<dyn CoachClientRepositoryTrait>,
    identity: Arc<dyn IdentityServiceTrait>,
}

impl AccountService {
    /// Creates a new AccountService instance
    pub fn new(
        repository: Arc<dyn AccountRepositoryTrait>,
        links: Arc<dyn CoachClientRepositoryTrait>,
        identity: Arc<dyn IdentityServiceTrait>,
    ) -> Self {
        Self {
            repository,
            links,
            identity,
        }
    }

    async fn create_account(
        &self,
        new_user: NewUserAccount,
        created_by: Option<String>,
    ) -> Result<UserAccount> {
        let user_id = self
            .identity
            .create_user(new_user.email.trim(), &new_user.password)
            .await?;
        let profile = new_user.into_profile(user_id.clone(), created_by, Utc::now().naive_utc());
        match self.repository.create(profile).await {
            Ok(account) => Ok(account),
            Err(e) => {
                warn!("Could not store profile for {}: {}", user_id, e);
                self.discard_identity(&user_id).await;
                Err(e)
            }
        }
    }

    /// Removes an identity user whose profile could not be completed, so the
    /// email can be provisioned again. A failing delete is logged and
    /// otherwise ignored so the original error reaches the caller.
    async fn discard_identity(&self, user_id: &str) {
        if let Err(e) = self.identity.delete_user(user_id).await {
            warn!("Failed to remove identity user {}: {}", user_id, e);
        }
    }
}

#[async_trait::async_trait]
impl AccountServiceTrait for AccountService {
    async fn provision_user(
        &self,
        caller: &Caller,
        new_user: NewUserAccount,
    ) -> Result<UserAccount> {
        access::ensure(access::can_manage_users(caller), caller, "create users")?;
        new_user.validate()?;
        debug!("Provisioning {} account for coach {}", new_user.role, caller.id);

        let role = new_user.role;
        let account = self
            .create_account(new_user, Some(caller.id.clone()))
            .await?;

        if role == Role::Client {
            let linked = self
                .links
                .link(CoachClientLink {
                    coach_id: caller.id.clone(),
                    client_id: account.id.clone(),
                })
                .await;
            if let Err(e) = linked {
                warn!("Could not link {} to coach {}: {}", account.id, caller.id, e);
                if let Err(cleanup) = self.repository.delete(&account.id).await {
                    warn!("Failed to remove unlinked profile {}: {}", account.id, cleanup);
                }
                self.discard_identity(&account.id).await;
                return Err(e);
            }
        }

        info!("Created {} account {}", account.role, account.id);
        Ok(account)
    }

    async fn register_coach(&self, mut new_coach: NewUserAccount) -> Result<UserAccount> {
        new_coach.role = Role::Coach;
        new_coach.validate()?;
        let account = self.create_account(new_coach, None).await?;
        info!("Registered coach account {}", account.id);
        Ok(account)
    }

    fn get_profile(&self, caller: &Caller, account_id: &str) -> Result<UserAccount> {
        let account = self.repository.get_by_id(account_id)?;
        access::ensure(
            access::can_view_profile(caller, &account),
            caller,
            "view this profile",
        )?;
        Ok(account)
    }

    async fn update_profile(&self, caller: &Caller, update: ProfileUpdate) -> Result<UserAccount> {
        update.validate()?;
        let existing = self.repository.get_by_id(&update.id)?;
        access::ensure(
            access::can_edit_profile(caller, &existing),
            caller,
            "edit this profile",
        )?;
        self.repository.update(update.apply_to(existing)).await
    }

    fn list_users(&self, caller: &Caller) -> Result<Vec<UserAccount>> {
        access::ensure(access::can_manage_users(caller), caller, "list users")?;
        self.repository.list(None)
    }

    fn list_clients(&self, caller: &Caller) -> Result<Vec<UserAccount>> {
        access::ensure(access::can_manage_users(caller), caller, "list clients")?;
        self.links
            .list_clients(&caller.id)?
            .iter()
            .map(|client_id| self.repository.get_by_id(client_id))
            .collect()
    }

    async fn disable_user(
        &self,
        caller: &Caller,
        account_id: &str,
        duration_days: Option<i32>,
    ) -> Result<UserAccount> {
        let account = self.repository.get_by_id(account_id)?;
        access::ensure(access::can_disable(caller, &account), caller, "disable users")?;

        let disabled = lifecycle::disable(&account, duration_days, today_utc())?;
        if disabled == account {
            debug!("Account {} already disabled, nothing to write", account_id);
            return Ok(account);
        }

        let saved = self.repository.update(disabled).await?;
        match lifecycle::reactivation_date(&saved) {
            Some(date) => info!("Disabled account {} until {}", saved.id, date),
            None => info!("Disabled account {} permanently", saved.id),
        }
        Ok(saved)
    }

    async fn reactivate_user(&self, caller: &Caller, account_id: &str) -> Result<UserAccount> {
        let account = self.repository.get_by_id(account_id)?;
        access::ensure(
            access::can_disable(caller, &account),
            caller,
            "reactivate users",
        )?;

        let reactivated = lifecycle::reactivate(&account);
        if reactivated == account {
            return Ok(account);
        }
        let saved = self.repository.update(reactivated).await?;
        info!("Reactivated account {}", saved.id);
        Ok(saved)
    }

    async fn delete_user(&self, caller: &Caller, account_id: &str) -> Result<()> {
        let account = self.repository.get_by_id(account_id)?;
        access::ensure(
            access::can_delete_user(caller, &account),
            caller,
            "delete this user",
        )?;

        self.links.unlink_client(account_id).await?;
        self.repository.delete(account_id).await?;
        // The profile is gone at this point; a leftover identity user cannot log in.
        self.discard_identity(account_id).await;
        info!("Deleted account {}", account_id);
        Ok(())
    }

    async fn reactivate_eligible_accounts(&self, today: NaiveDate) -> Result<Vec<UserAccount>> {
        let eligible: Vec<UserAccount> = self
            .repository
            .list(Some(false))?
            .into_iter()
            .filter(|account| lifecycle::is_eligible_for_auto_reactivation(account, today))
            .collect();

        let mut reactivated = Vec::with_capacity(eligible.len());
        for account in eligible {
            reactivated.push(self.repository.update(lifecycle::reactivate(&account)).await?);
        }

        if !reactivated.is_empty() {
            info!(
                "Auto-reactivated {} account(s) as of {}",
                reactivated.len(),
                today
            );
        }
        Ok(reactivated)
    }
}
