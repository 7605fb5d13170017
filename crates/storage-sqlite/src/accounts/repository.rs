use async_trait::async_trait;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use log::debug;
use std::sync::Arc;

use coachfit_core::accounts::{
    AccountRepositoryTrait, CoachClientLink, CoachClientRepositoryTrait, UserAccount,
};
use coachfit_core::errors::{DatabaseError, Error};
use coachfit_core::Result;

use super::model::{CoachClientDB, ProfileDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::{IntoCore, StorageError};
use crate::schema::{coach_clients, profiles};

/// Repository for user profiles.
pub struct AccountRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl AccountRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

fn load_profile(conn: &mut SqliteConnection, account_id: &str) -> Result<UserAccount> {
    profiles::table
        .find(account_id)
        .select(ProfileDB::as_select())
        .first::<ProfileDB>(conn)
        .into_core()?
        .try_into()
}

#[async_trait]
impl AccountRepositoryTrait for AccountRepository {
    async fn create(&self, account: UserAccount) -> Result<UserAccount> {
        let profile_db: ProfileDB = account.into();
        self.writer
            .exec(move |conn| {
                diesel::insert_into(profiles::table)
                    .values(&profile_db)
                    .execute(conn)
                    .map_err(StorageError::from)?;
                load_profile(conn, &profile_db.id)
            })
            .await
    }

    async fn update(&self, account: UserAccount) -> Result<UserAccount> {
        let profile_db: ProfileDB = account.into();
        self.writer
            .exec(move |conn| {
                let affected = diesel::update(profiles::table.find(&profile_db.id))
                    .set(&profile_db)
                    .execute(conn)
                    .map_err(StorageError::from)?;
                if affected == 0 {
                    return Err(Error::Database(DatabaseError::NotFound(format!(
                        "profile {}",
                        profile_db.id
                    ))));
                }
                load_profile(conn, &profile_db.id)
            })
            .await
    }

    async fn delete(&self, account_id: &str) -> Result<usize> {
        let account_id = account_id.to_string();
        self.writer
            .exec(move |conn| {
                diesel::delete(profiles::table.find(account_id))
                    .execute(conn)
                    .into_core()
            })
            .await
    }

    fn get_by_id(&self, account_id: &str) -> Result<UserAccount> {
        let mut conn = get_connection(&self.pool)?;
        load_profile(&mut conn, account_id)
    }

    fn list(&self, active_filter: Option<bool>) -> Result<Vec<UserAccount>> {
        let mut conn = get_connection(&self.pool)?;

        let mut query = profiles::table.into_boxed();
        if let Some(active) = active_filter {
            query = query.filter(profiles::active.eq(active));
        }

        let rows = query
            .select(ProfileDB::as_select())
            .order((profiles::last_name.asc(), profiles::first_name.asc()))
            .load::<ProfileDB>(&mut conn)
            .into_core()?;

        rows.into_iter().map(UserAccount::try_from).collect()
    }
}

/// Repository for coach/client links.
pub struct CoachClientRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl CoachClientRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl CoachClientRepositoryTrait for CoachClientRepository {
    async fn link(&self, link: CoachClientLink) -> Result<CoachClientLink> {
        let link_db: CoachClientDB = link.into();
        self.writer
            .exec(move |conn| {
                // Linking twice is harmless; the pair is the primary key.
                diesel::insert_or_ignore_into(coach_clients::table)
                    .values(&link_db)
                    .execute(conn)
                    .map_err(StorageError::from)?;
                debug!("Linked client {} to coach {}", link_db.client_id, link_db.coach_id);
                Ok(link_db.into())
            })
            .await
    }

    async fn unlink_client(&self, client_id: &str) -> Result<usize> {
        let client_id = client_id.to_string();
        self.writer
            .exec(move |conn| {
                diesel::delete(coach_clients::table.filter(coach_clients::client_id.eq(client_id)))
                    .execute(conn)
                    .into_core()
            })
            .await
    }

    fn list_clients(&self, coach_id: &str) -> Result<Vec<String>> {
        let mut conn = get_connection(&self.pool)?;
        coach_clients::table
            .filter(coach_clients::coach_id.eq(coach_id))
            .order(coach_clients::created_at.asc())
            .select(coach_clients::client_id)
            .load::<String>(&mut conn)
            .into_core()
    }
}
