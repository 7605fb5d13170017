use async_trait::async_trait;
use chrono::NaiveDate;

use super::progress_model::{NewProgressEntry, ProgressEntry};
use crate::access::Caller;
use crate::errors::Result;

#[async_trait]
pub trait ProgressRepositoryTrait: Send + Sync {
    /// Entries of one user, newest date first.
    fn list_by_user(&self, user_id: &str) -> Result<Vec<ProgressEntry>>;
    async fn create(
        &self,
        user_id: &str,
        date: NaiveDate,
        entry: NewProgressEntry,
    ) -> Result<ProgressEntry>;
}

#[async_trait]
pub trait ProgressServiceTrait: Send + Sync {
    async fn add_entry(&self, caller: &Caller, entry: NewProgressEntry) -> Result<ProgressEntry>;
    fn list_entries(&self, caller: &Caller, user_id: &str) -> Result<Vec<ProgressEntry>>;
}
