use async_trait::async_trait;
use log::{debug, warn};
use std::sync::Arc;

use super::auth_model::{LoginOutcome, Session};
use super::auth_traits::{AuthServiceTrait, IdentityServiceTrait};
use crate::accounts::accounts_lifecycle;
use crate::accounts::AccountRepositoryTrait;
use crate::errors::Result;

/// Login gate in front of the identity service.
pub struct AuthService {
    identity: Arc<dyn IdentityServiceTrait>,
    accounts: Arc<dyn AccountRepositoryTrait>,
}

impl AuthService {
    pub fn new(
        identity: Arc<dyn IdentityServiceTrait>,
        accounts: Arc<dyn AccountRepositoryTrait>,
    ) -> Self {
        Self { identity, accounts }
    }

    /// Closes a session that must not be handed out. A failing sign-out is
    /// logged and otherwise ignored so the original error reaches the caller.
    async fn discard_session(&self, session: &Session) {
        if let Err(e) = self.identity.sign_out(session).await {
            warn!("Failed to sign out rejected session for {}: {}", session.user_id, e);
        }
    }
}

#[async_trait]
impl AuthServiceTrait for AuthService {
    async fn login(&self, email: &str, password: &str) -> Result<LoginOutcome> {
        let session = self.identity.sign_in(email.trim(), password).await?;

        let account = match self.accounts.get_by_id(&session.user_id) {
            Ok(account) => account,
            Err(e) => {
                warn!("Could not load profile for {}: {}", session.user_id, e);
                self.discard_session(&session).await;
                return Err(e);
            }
        };

        if let Err(e) = accounts_lifecycle::check_login(&account) {
            warn!("Login refused for disabled account {}", account.id);
            self.discard_session(&session).await;
            return Err(e);
        }

        debug!("Login accepted for {}", account.id);
        Ok(LoginOutcome { session, account })
    }

    async fn logout(&self, session: &Session) -> Result<()> {
        self.identity.sign_out(session).await
    }
}
