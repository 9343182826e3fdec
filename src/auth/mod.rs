//! Identity boundary. The session and scoring components never call this
//! module; they only consume the resulting user-or-none to decide whether
//! history operations are allowed.

use anyhow::Result;
use log::error;
use serde::{Deserialize, Serialize};

use crate::storage::{AUTH_USER_KEY, LocalStore};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub display_name: String,
}

pub type AuthListener = Box<dyn Fn(Option<&User>) + Send>;

/// Operations an identity provider must offer. Credentials and account
/// management live behind this boundary, outside the crate.
pub trait AuthProvider {
    fn current_user(&self) -> Option<User>;
    fn sign_up(&mut self, display_name: &str) -> Result<User>;
    fn sign_in(&mut self, display_name: &str) -> Result<User>;
    fn sign_out(&mut self);
    fn on_auth_change(&mut self, listener: AuthListener);
}

/// Minimal provider backed by the local `auth-user` slot. Signing in or
/// out clears the local game slots, the same fresh-start the original
/// product performs on every identity change.
pub struct StoredAuth {
    store: LocalStore,
    user: Option<User>,
    listeners: Vec<AuthListener>,
}

impl StoredAuth {
    pub fn load(store: LocalStore) -> Self {
        let user = match store.get(AUTH_USER_KEY) {
            Ok(user) => user,
            Err(e) => {
                error!("Failed to load signed-in user: {:#}", e);
                None
            }
        };
        Self {
            store,
            user,
            listeners: Vec::new(),
        }
    }

    fn set_user(&mut self, user: Option<User>) {
        match &user {
            Some(user) => {
                if let Err(e) = self.store.set(AUTH_USER_KEY, user) {
                    error!("Failed to persist signed-in user: {:#}", e);
                }
            }
            None => {
                if let Err(e) = self.store.remove(AUTH_USER_KEY) {
                    error!("Failed to clear signed-in user: {:#}", e);
                }
            }
        }

        // Identity changed: stale game data belongs to the previous user.
        self.store.clear_game_data();

        self.user = user;
        for listener in &self.listeners {
            listener(self.user.as_ref());
        }
    }
}

impl AuthProvider for StoredAuth {
    fn current_user(&self) -> Option<User> {
        self.user.clone()
    }

    fn sign_up(&mut self, display_name: &str) -> Result<User> {
        // No credential store behind this provider; signing up and signing
        // in converge on the same identity record.
        self.sign_in(display_name)
    }

    fn sign_in(&mut self, display_name: &str) -> Result<User> {
        let display_name = display_name.trim();
        anyhow::ensure!(!display_name.is_empty(), "user name must not be empty");

        let user = User {
            id: display_name.to_lowercase().replace(char::is_whitespace, "-"),
            display_name: display_name.to_string(),
        };
        self.set_user(Some(user.clone()));
        Ok(user)
    }

    fn sign_out(&mut self) {
        self.set_user(None);
    }

    fn on_auth_change(&mut self, listener: AuthListener) {
        self.listeners.push(listener);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn test_auth(name: &str) -> StoredAuth {
        let dir = std::env::temp_dir().join(format!("mahjong_auth_{}_{}", name, std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        StoredAuth::load(LocalStore::new(&dir).unwrap())
    }

    #[test]
    fn test_sign_in_and_out_round_trip() {
        let mut auth = test_auth("round_trip");
        assert_eq!(auth.current_user(), None);

        let user = auth.sign_in("Ka Shing").unwrap();
        assert_eq!(user.id, "ka-shing");
        assert_eq!(auth.current_user(), Some(user));

        auth.sign_out();
        assert_eq!(auth.current_user(), None);
    }

    #[test]
    fn test_signed_in_user_survives_reload() {
        let dir = std::env::temp_dir().join(format!("mahjong_auth_reload_{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);

        let mut auth = StoredAuth::load(LocalStore::new(&dir).unwrap());
        auth.sign_in("Mei").unwrap();

        let reloaded = StoredAuth::load(LocalStore::new(&dir).unwrap());
        assert_eq!(reloaded.current_user().unwrap().display_name, "Mei");
    }

    #[test]
    fn test_blank_name_is_rejected() {
        let mut auth = test_auth("blank_name");
        assert!(auth.sign_in("   ").is_err());
        assert_eq!(auth.current_user(), None);
    }

    #[test]
    fn test_listeners_fire_on_every_change() {
        let mut auth = test_auth("listeners");
        let calls = Arc::new(AtomicUsize::new(0));

        let seen = Arc::clone(&calls);
        auth.on_auth_change(Box::new(move |_| {
            seen.fetch_add(1, Ordering::SeqCst);
        }));

        auth.sign_in("Mei").unwrap();
        auth.sign_out();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }
}
