//! Authentication context and state management.

use crate::backend::session::{KeyValueStorage, MemoryStorage, SessionStore, UserInfo};
use crate::backend::utils::config::AppConfig;
use crate::utils::error::Result;
use dioxus::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

/// Shared session store plus reactive mirrors for the views.
///
/// The store is the source of truth; the signals are refreshed after every
/// mutation and every guard run.
#[derive(Clone)]
pub struct AuthState {
    store: Rc<RefCell<SessionStore>>,
    pub is_authenticated: Signal<bool>,
    pub current_user: Signal<Option<UserInfo>>,
}

impl AuthState {
    /// Wraps `store`. Must run inside a component, as it creates signals.
    pub fn new(store: SessionStore) -> Self {
        let is_authenticated = Signal::new(store.is_authenticated());
        let current_user = Signal::new(store.user().cloned());
        Self {
            store: Rc::new(RefCell::new(store)),
            is_authenticated,
            current_user,
        }
    }

    /// Runs `f` against the store and refreshes the signals afterwards.
    pub fn with_store<T>(&self, f: impl FnOnce(&mut SessionStore) -> T) -> T {
        let result = f(&mut self.store.borrow_mut());
        self.refresh();
        result
    }

    /// Logs in and persists the session.
    pub fn login(&mut self, user: UserInfo, token: String) -> Result<()> {
        self.with_store(|store| store.login(user, token))
    }

    /// Logs out the current user.
    pub fn logout(&mut self) {
        if let Err(e) = self.with_store(SessionStore::logout) {
            log::error!("Failed to clear persisted session: {e}");
        }
    }

    /// Gets the display name of the current user or "Admin" as default.
    pub fn get_username(&self) -> String {
        self.current_user
            .read()
            .as_ref()
            .and_then(|user| ["username", "name"].iter().find_map(|key| user.get(*key)))
            .and_then(|value| value.as_str())
            .map_or_else(|| "Admin".to_string(), str::to_string)
    }

    fn refresh(&self) {
        let store = self.store.borrow();
        let session = store.session();

        let authenticated = session.is_authenticated();
        if *self.is_authenticated.peek() != authenticated {
            let mut signal = self.is_authenticated;
            signal.set(authenticated);
        }

        let user = session.user.as_ref();
        if (*self.current_user.peek()).as_ref() != user {
            let mut signal = self.current_user;
            signal.set(user.cloned());
        }
    }
}

/// Opens the storage backend for this build target.
///
/// Falls back to process memory, so the app still works, just without
/// persistence.
#[cfg_attr(feature = "web", allow(unused_variables))]
pub fn open_storage(config: &AppConfig) -> Box<dyn KeyValueStorage> {
    #[cfg(feature = "web")]
    {
        match crate::backend::session::BrowserStorage::local() {
            Ok(storage) => Box::new(storage),
            Err(e) => {
                log::warn!("{e}, session will not persist");
                Box::new(MemoryStorage::new())
            }
        }
    }
    #[cfg(not(feature = "web"))]
    {
        match crate::backend::utils::paths::get_app_dir() {
            Ok(dir) => Box::new(crate::backend::session::FileStorage::new(
                dir.join(&config.storage.file_name),
            )),
            Err(e) => {
                log::warn!("{e}, session will not persist");
                Box::new(MemoryStorage::new())
            }
        }
    }
}
