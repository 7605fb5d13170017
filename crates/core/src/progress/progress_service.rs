use async_trait::async_trait;
use log::debug;
use std::sync::Arc;

use super::progress_model::{NewProgressEntry, ProgressEntry};
use super::progress_traits::{ProgressRepositoryTrait, ProgressServiceTrait};
use crate::access::{self, Caller};
use crate::errors::Result;
use crate::utils::time_utils::today_utc;

pub struct ProgressService {
    repository: Arc<dyn ProgressRepositoryTrait>,
}

impl ProgressService {
    pub fn new(repository: Arc<dyn ProgressRepositoryTrait>) -> Self {
        ProgressService { repository }
    }
}

#[async_trait]
impl ProgressServiceTrait for ProgressService {
    async fn add_entry(&self, caller: &Caller, entry: NewProgressEntry) -> Result<ProgressEntry> {
        entry.validate()?;
        let today = today_utc();
        debug!("Recording progress for {} on {}", caller.id, today);
        self.repository
            .create(&caller.id, today, entry.normalized())
            .await
    }

    fn list_entries(&self, caller: &Caller, user_id: &str) -> Result<Vec<ProgressEntry>> {
        access::ensure(
            access::can_view_progress(caller, user_id),
            caller,
            "view these progress records",
        )?;
        self.repository.list_by_user(user_id)
    }
}
