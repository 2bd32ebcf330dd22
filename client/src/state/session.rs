//! Session token store for the current browser profile.
//!
//! SYSTEM CONTEXT
//! ==============
//! The app root provides one [`Session`] via Leptos context; the login flow
//! writes it, the dashboard flow reads and clears it. The backing store is
//! `localStorage` in the hydrated browser and an in-memory slot on the server
//! and in tests.
//!
//! DESIGN
//! ======
//! One slot, one string. No expiry or refresh: the token lives until cleared
//! explicitly or the user wipes browser data.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::{Arc, Mutex, PoisonError};

/// `localStorage` key holding the bearer token.
pub const TOKEN_KEY: &str = "jwt_token";

/// Storage backend for the single token slot.
pub trait TokenStore: Send + Sync {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str);
    fn remove(&self);
}

/// Process-local slot. Used for SSR renders and tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slot: Mutex<Option<String>>,
}

impl TokenStore for MemoryStore {
    fn load(&self) -> Option<String> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn save(&self, token: &str) {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(token.to_owned());
    }

    fn remove(&self) {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

/// Browser `localStorage` slot under a fixed key.
///
/// Storage access failures (private mode, disabled storage) degrade to "no
/// token" rather than surfacing errors.
#[cfg(feature = "hydrate")]
#[derive(Debug, Clone, Copy)]
pub struct LocalStorageStore {
    key: &'static str,
}

#[cfg(feature = "hydrate")]
impl LocalStorageStore {
    #[must_use]
    pub fn new(key: &'static str) -> Self {
        Self { key }
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

#[cfg(feature = "hydrate")]
impl TokenStore for LocalStorageStore {
    fn load(&self) -> Option<String> {
        Self::storage()?.get_item(self.key).ok().flatten()
    }

    fn save(&self, token: &str) {
        let Some(storage) = Self::storage() else {
            log::warn!("localStorage unavailable; session token not persisted");
            return;
        };
        if storage.set_item(self.key, token).is_err() {
            log::warn!("failed to write session token to localStorage");
        }
    }

    fn remove(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(self.key);
        }
    }
}

/// Handle to the session token slot, shared through context.
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn TokenStore>,
}

impl Session {
    pub fn new(store: impl TokenStore + 'static) -> Self {
        Self { store: Arc::new(store) }
    }

    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(MemoryStore::default())
    }

    /// `localStorage`-backed session under [`TOKEN_KEY`].
    #[cfg(feature = "hydrate")]
    #[must_use]
    pub fn browser() -> Self {
        Self::new(LocalStorageStore::new(TOKEN_KEY))
    }

    /// Browser storage when hydrated, in-memory otherwise.
    #[must_use]
    pub fn for_environment() -> Self {
        #[cfg(feature = "hydrate")]
        {
            Self::browser()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::in_memory()
        }
    }

    /// Current token. An empty stored value counts as absent.
    #[must_use]
    pub fn get(&self) -> Option<String> {
        self.store.load().filter(|token| !token.is_empty())
    }

    /// Store `token`, replacing any previous one.
    pub fn set(&self, token: &str) {
        self.store.save(token);
    }

    pub fn clear(&self) {
        self.store.remove();
    }

    #[must_use]
    pub fn is_present(&self) -> bool {
        self.get().is_some()
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session").field("present", &self.is_present()).finish()
    }
}
