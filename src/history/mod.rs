//! Match history: the append-only archive of completed matches, scoped to
//! the signed-in user.
//!
//! Operations cross a backend boundary and are async request/response.
//! Failures come back as `HistoryError` values; nothing is retried
//! automatically and a failed archive never rolls back session state the
//! caller already applied.

use chrono::Utc;
use log::info;

use crate::auth::User;
use crate::database::{self, DbConn, DbPool, MatchRecord};
use crate::domain::NewMatchRecord;
use crate::errors::{HistoryError, ValidationError};

pub struct HistoryStore {
    pool: DbPool,
    matches: Vec<MatchRecord>,
}

impl HistoryStore {
    pub fn new(pool: DbPool) -> Self {
        Self {
            pool,
            matches: Vec::new(),
        }
    }

    /// The match list as of the last successful fetch or save.
    pub fn matches(&self) -> &[MatchRecord] {
        &self.matches
    }

    /// Load all matches owned by `user`, most recently ended first.
    pub async fn fetch_matches(
        &mut self,
        user: Option<&User>,
    ) -> Result<&[MatchRecord], HistoryError> {
        let user = user.ok_or(HistoryError::Auth)?;
        let mut conn = self.connection()?;

        self.matches =
            database::matches::list_for_user(&mut conn, &user.id).map_err(backend_error)?;
        Ok(&self.matches)
    }

    /// Archive a finished match and refresh the list. The payload must
    /// describe at least one completed game; the caller checks this before
    /// offering the action and it is re-asserted here.
    pub async fn save_match(
        &mut self,
        user: Option<&User>,
        record: NewMatchRecord,
    ) -> Result<MatchRecord, HistoryError> {
        let user = user.ok_or(HistoryError::Auth)?;
        if record.total_games == 0 {
            return Err(ValidationError::NoGamesPlayed.into());
        }

        let mut conn = self.connection()?;
        let saved = database::matches::insert_match(&mut conn, &user.id, &record, Utc::now())
            .map_err(backend_error)?;

        info!(
            "Archived match #{}: {} vs {} ({} games)",
            saved.id, saved.player1_name, saved.player2_name, saved.total_games
        );

        self.matches =
            database::matches::list_for_user(&mut conn, &user.id).map_err(backend_error)?;
        Ok(saved)
    }

    /// Delete one of the caller's matches. Deleting by id alone is never
    /// allowed; an id owned by someone else comes back as
    /// `NotFoundOrForbidden` and removes nothing.
    pub async fn delete_match(
        &mut self,
        user: Option<&User>,
        id: i64,
    ) -> Result<(), HistoryError> {
        let user = user.ok_or(HistoryError::Auth)?;
        let mut conn = self.connection()?;

        let deleted =
            database::matches::delete_for_user(&mut conn, id, &user.id).map_err(backend_error)?;
        if !deleted {
            return Err(HistoryError::NotFoundOrForbidden);
        }

        self.matches.retain(|m| m.id != id);
        info!("Deleted match #{}", id);
        Ok(())
    }

    fn connection(&self) -> Result<DbConn, HistoryError> {
        database::get_connection(&self.pool).map_err(backend_error)
    }
}

fn backend_error(e: anyhow::Error) -> HistoryError {
    HistoryError::Backend(format!("{:#}", e))
}
