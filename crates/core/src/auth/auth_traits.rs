use async_trait::async_trait;

use super::auth_model::{LoginOutcome, Session};
use crate::errors::Result;

/// External identity service. Owns credentials; never sees profile data.
#[async_trait]
pub trait IdentityServiceTrait: Send + Sync {
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session>;

    /// Creates credentials and returns the new user id.
    async fn create_user(&self, email: &str, password: &str) -> Result<String>;

    async fn sign_out(&self, session: &Session) -> Result<()>;

    async fn delete_user(&self, user_id: &str) -> Result<()>;
}

#[async_trait]
pub trait AuthServiceTrait: Send + Sync {
    /// Signs in and admits the session only if the profile is active.
    async fn login(&self, email: &str, password: &str) -> Result<LoginOutcome>;

    async fn logout(&self, session: &Session) -> Result<()>;
}
