use async_trait::async_trait;
use chrono::NaiveDate;
use diesel::prelude::*;
use std::sync::Arc;
use uuid::Uuid;

use coachfit_core::progress::{NewProgressEntry, ProgressEntry, ProgressRepositoryTrait};
use coachfit_core::Result;

use super::model::ProgressEntryDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::progress_entries;

pub struct ProgressRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl ProgressRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        ProgressRepository { pool, writer }
    }
}

#[async_trait]
impl ProgressRepositoryTrait for ProgressRepository {
    /// Newest entries first.
    fn list_by_user(&self, user_id: &str) -> Result<Vec<ProgressEntry>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = progress_entries::table
            .filter(progress_entries::user_id.eq(user_id))
            .order(progress_entries::date.desc())
            .select(ProgressEntryDB::as_select())
            .load::<ProgressEntryDB>(&mut conn)
            .into_core()?;
        Ok(rows.into_iter().map(ProgressEntry::from).collect())
    }

    async fn create(
        &self,
        user_id: &str,
        date: NaiveDate,
        entry: NewProgressEntry,
    ) -> Result<ProgressEntry> {
        let entry_db = ProgressEntryDB {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            date,
            weight_kg: entry.weight_kg,
            muscle_mass_kg: entry.muscle_mass_kg,
            body_fat_percent: entry.body_fat_percent,
            waist_cm: entry.waist_cm,
            chest_cm: entry.chest_cm,
            arms_cm: entry.arms_cm,
            notes: entry.notes,
        };

        self.writer
            .exec(move |conn| {
                diesel::insert_into(progress_entries::table)
                    .values(&entry_db)
                    .execute(conn)
                    .into_core()?;
                Ok(entry_db.into())
            })
            .await
    }
}
