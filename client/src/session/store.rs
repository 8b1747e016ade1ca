//! Token storage and the injected session handle.
//!
//! DESIGN
//! ======
//! Pages never read `localStorage` directly. The root component provides a
//! [`Session`] through Leptos context and every page reads the token through
//! it, so tests and SSR can swap the backing store.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::sync::{Arc, Mutex};

use super::{Claims, SessionError, Verdict, decode_claims, resolve};

/// Storage key the authentication flow writes the bearer token under.
pub const TOKEN_KEY: &str = "accessToken";

/// Key-value backing for the session token.
pub trait TokenStore: Send + Sync {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str);
    fn clear(&self);
}

/// `localStorage`-backed store. Inert outside the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTokenStore;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl TokenStore for BrowserTokenStore {
    fn load(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(TOKEN_KEY).ok().flatten().filter(|t| !t.is_empty())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn save(&self, token: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                if storage.set_item(TOKEN_KEY, token).is_err() {
                    log::warn!("failed to persist session token");
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
        }
    }

    fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                if storage.remove_item(TOKEN_KEY).is_err() {
                    log::warn!("failed to clear session token; it stays in storage");
                }
            }
        }
    }
}

/// In-process store used by tests and server rendering.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    #[must_use]
    pub fn with_token(token: impl Into<String>) -> Self {
        Self { token: Mutex::new(Some(token.into())) }
    }

    fn slot(&self) -> std::sync::MutexGuard<'_, Option<String>> {
        self.token.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.slot().clone().filter(|t| !t.is_empty())
    }

    fn save(&self, token: &str) {
        *self.slot() = Some(token.to_owned());
    }

    fn clear(&self) {
        *self.slot() = None;
    }
}

/// Cloneable handle over the active [`TokenStore`].
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn TokenStore>,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session").field("signed_in", &self.token().is_some()).finish()
    }
}

impl Session {
    pub fn new(store: impl TokenStore + 'static) -> Self {
        Self { store: Arc::new(store) }
    }

    /// Session backed by the browser's `localStorage`.
    #[must_use]
    pub fn browser() -> Self {
        Self::new(BrowserTokenStore)
    }

    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.store.load()
    }

    /// `Authorization` header value for the stored token.
    #[must_use]
    pub fn bearer(&self) -> Option<String> {
        self.token().map(|t| bearer_header(&t))
    }

    /// Decode the stored token's claims.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Missing`] when no token is stored, or the
    /// decode failure otherwise.
    pub fn claims(&self) -> Result<Claims, SessionError> {
        let token = self.token().ok_or(SessionError::Missing)?;
        decode_claims(&token)
    }

    #[must_use]
    pub fn verdict(&self) -> Verdict {
        resolve(self.token().as_deref())
    }

    pub fn sign_in(&self, token: &str) {
        self.store.save(token.trim());
    }

    pub fn sign_out(&self) {
        self.store.clear();
    }
}

#[must_use]
pub fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}
