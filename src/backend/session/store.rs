//! Session store: who is logged in, and the persisted copy of it.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use super::storage::KeyValueStorage;
use crate::backend::utils::config::StorageConfig;
use crate::utils::error::{Error, Result};
use serde_json::{Map, Value};

/// Open user record. Its fields belong to the views, not to this layer.
pub type UserInfo = Map<String, Value>;

/// In-memory authentication state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub user: Option<UserInfo>,
    pub token: Option<String>,
}

impl Session {
    /// An empty token counts as no token.
    pub fn is_authenticated(&self) -> bool {
        self.token.as_deref().is_some_and(|token| !token.is_empty())
    }
}

/// Owns the [`Session`] and mirrors it into a [`KeyValueStorage`].
pub struct SessionStore {
    session: Session,
    storage: Box<dyn KeyValueStorage>,
    token_key: String,
    user_key: String,
}

impl SessionStore {
    /// Creates an empty store. Call [`SessionStore::init_auth`] to pick up
    /// a persisted session.
    pub fn new(storage: Box<dyn KeyValueStorage>, keys: &StorageConfig) -> Self {
        Self {
            session: Session::default(),
            storage,
            token_key: keys.token_key.clone(),
            user_key: keys.user_key.clone(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn user(&self) -> Option<&UserInfo> {
        self.session.user.as_ref()
    }

    pub fn token(&self) -> Option<&str> {
        self.session.token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// Starts a session and persists it.
    ///
    /// The in-memory session is updated even if persisting fails.
    pub fn login(&mut self, user: UserInfo, token: impl Into<String>) -> Result<()> {
        let token = token.into();
        let user_json = serde_json::to_string(&user)?;

        self.session.user = Some(user);
        self.session.token = Some(token.clone());

        self.storage.set_item(&self.token_key, &token)?;
        self.storage.set_item(&self.user_key, &user_json)?;
        log::info!("Session started");
        Ok(())
    }

    /// Ends the session and removes the persisted copy. Safe to repeat.
    pub fn logout(&mut self) -> Result<()> {
        self.session = Session::default();

        let token_removed = self.storage.remove_item(&self.token_key);
        let user_removed = self.storage.remove_item(&self.user_key);
        token_removed?;
        user_removed?;
        log::info!("Session ended");
        Ok(())
    }

    /// Rehydrates from storage when both keys hold a value.
    ///
    /// With either key missing or empty the in-memory session is left as is.
    pub fn init_auth(&mut self) -> Result<()> {
        let token = self.storage.get_item(&self.token_key)?;
        let user_json = self.storage.get_item(&self.user_key)?;

        let (Some(token), Some(user_json)) = (
            token.filter(|t| !t.is_empty()),
            user_json.filter(|u| !u.is_empty()),
        ) else {
            return Ok(());
        };

        let user: UserInfo =
            serde_json::from_str(&user_json).map_err(|source| Error::MalformedRecord {
                key: self.user_key.clone(),
                source,
            })?;

        self.session.token = Some(token);
        self.session.user = Some(user);
        Ok(())
    }
}
