//! Local persistence: named JSON slots in a data directory.
//!
//! The session-facing accessors are fail-soft: a persistence failure is
//! logged and swallowed, and the in-memory state stays authoritative for
//! the rest of the process.

use anyhow::{Context, Result};
use log::error;
use serde::{Serialize, de::DeserializeOwned};
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{GameResult, GameSession};
use crate::errors::storage_context;

pub const GAME_SESSION_KEY: &str = "game-session";
pub const GAME_RESULTS_KEY: &str = "game-results";
pub const AUTH_USER_KEY: &str = "auth-user";
// Reserved slot for the UI layer; opaque to this crate.
pub const THEME_PREFERENCE_KEY: &str = "theme-preference";

pub struct LocalStore {
    data_dir: PathBuf,
}

impl LocalStore {
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Result<Self> {
        let data_dir = data_dir.as_ref().to_path_buf();
        fs::create_dir_all(&data_dir).context("Failed to create data directory")?;
        Ok(Self { data_dir })
    }

    /// Serialize a value into its slot.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let path = self.slot_path(key);
        let json = serde_json::to_string_pretty(value)
            .with_context(|| storage_context("serialize", key))?;
        fs::write(&path, json).with_context(|| storage_context("write", key))?;
        Ok(())
    }

    /// Read a slot; an absent slot is `None`, not an error.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let path = self.slot_path(key);
        if !path.exists() {
            return Ok(None);
        }
        let json = fs::read_to_string(&path).with_context(|| storage_context("read", key))?;
        let value =
            serde_json::from_str(&json).with_context(|| storage_context("deserialize", key))?;
        Ok(Some(value))
    }

    pub fn remove(&self, key: &str) -> Result<()> {
        let path = self.slot_path(key);
        if path.exists() {
            fs::remove_file(&path).with_context(|| storage_context("clear", key))?;
        }
        Ok(())
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{}.json", key))
    }

    // --- Fail-soft game slots ---

    pub fn save_game_session(&self, session: &GameSession) {
        if let Err(e) = self.set(GAME_SESSION_KEY, session) {
            error!("Failed to save game session: {:#}", e);
        }
    }

    pub fn load_game_session(&self) -> Option<GameSession> {
        match self.get(GAME_SESSION_KEY) {
            Ok(session) => session,
            Err(e) => {
                error!("Failed to load game session: {:#}", e);
                None
            }
        }
    }

    pub fn clear_game_session(&self) {
        if let Err(e) = self.remove(GAME_SESSION_KEY) {
            error!("Failed to clear game session: {:#}", e);
        }
    }

    pub fn save_game_results(&self, results: &[GameResult]) {
        if let Err(e) = self.set(GAME_RESULTS_KEY, &results) {
            error!("Failed to save game results: {:#}", e);
        }
    }

    pub fn load_game_results(&self) -> Vec<GameResult> {
        match self.get(GAME_RESULTS_KEY) {
            Ok(results) => results.unwrap_or_default(),
            Err(e) => {
                error!("Failed to load game results: {:#}", e);
                Vec::new()
            }
        }
    }

    pub fn clear_game_results(&self) {
        if let Err(e) = self.remove(GAME_RESULTS_KEY) {
            error!("Failed to clear game results: {:#}", e);
        }
    }

    /// Clear every game slot at once (full reset, identity change).
    pub fn clear_game_data(&self) {
        self.clear_game_session();
        self.clear_game_results();
    }
}
