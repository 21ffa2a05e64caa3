//! Tab-scoped session identifiers.
use rand::Rng;
use rand::distr::Alphanumeric;

use std::collections::HashMap;

/// The storage key holding the session token.
pub const STORAGE_KEY: &str = "foldkit_session_id";

/// The length of a session token, in characters.
pub const TOKEN_LENGTH: usize = 32;

/// A random token correlating the page views of a single browsing
/// session.
///
/// Tokens are [`TOKEN_LENGTH`] characters drawn from `[A-Za-z0-9]`. A
/// token lives in tab-scoped ephemeral storage and is never shared across
/// tabs or restarts.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionId(String);

impl SessionId {
    /// Generates a fresh random [`SessionId`].
    pub fn generate() -> Self {
        let token = rand::rng()
            .sample_iter(&Alphanumeric)
            .take(TOKEN_LENGTH)
            .map(char::from)
            .collect();

        Self(token)
    }

    /// Returns the token stored in `store`, or generates, stores, and
    /// returns a fresh one when the slot is absent or malformed.
    ///
    /// Idempotent within one store lifetime: every later call returns the
    /// token the first call produced.
    pub fn load_or_create(store: &mut impl SessionStore) -> Self {
        match store.get(STORAGE_KEY) {
            Some(token) if is_well_formed(&token) => Self(token),
            _ => {
                let id = Self::generate();
                store.put(STORAGE_KEY, id.0.clone());

                id
            }
        }
    }

    /// The token as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

fn is_well_formed(token: &str) -> bool {
    token.len() == TOKEN_LENGTH && token.bytes().all(|byte| byte.is_ascii_alphanumeric())
}

/// Tab-scoped ephemeral storage for the session token.
///
/// Implementations are expected to live as long as the hosting tab and no
/// longer; nothing here survives a restart.
pub trait SessionStore {
    /// Returns the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, replacing any previous value.
    fn put(&mut self, key: &str, value: String);
}

/// An in-memory [`SessionStore`] living exactly as long as its owner.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Creates an empty [`MemoryStore`].
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn put(&mut self, key: &str, value: String) {
        let _ = self.entries.insert(key.to_owned(), value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_tokens_are_well_formed() {
        let id = SessionId::generate();

        assert_eq!(id.as_str().len(), TOKEN_LENGTH);
        assert!(id.as_str().bytes().all(|byte| byte.is_ascii_alphanumeric()));
    }

    #[test]
    fn retrieval_is_idempotent_within_a_store_lifetime() {
        let mut store = MemoryStore::new();

        let first = SessionId::load_or_create(&mut store);
        let second = SessionId::load_or_create(&mut store);
        let third = SessionId::load_or_create(&mut store);

        assert_eq!(first, second);
        assert_eq!(second, third);
    }

    #[test]
    fn fresh_stores_get_distinct_tokens() {
        let a = SessionId::load_or_create(&mut MemoryStore::new());
        let b = SessionId::load_or_create(&mut MemoryStore::new());

        assert_ne!(a, b);
    }

    #[test]
    fn malformed_storage_yields_a_fresh_token() {
        let mut store = MemoryStore::new();
        store.put(STORAGE_KEY, "too-short".to_owned());

        let id = SessionId::load_or_create(&mut store);

        assert_ne!(id.as_str(), "too-short");
        assert_eq!(store.get(STORAGE_KEY), Some(id.as_str().to_owned()));

        // The repaired slot is stable from now on.
        assert_eq!(SessionId::load_or_create(&mut store), id);
    }

    #[test]
    fn non_alphanumeric_storage_is_rejected() {
        let mut store = MemoryStore::new();
        store.put(STORAGE_KEY, "!".repeat(TOKEN_LENGTH));

        let id = SessionId::load_or_create(&mut store);

        assert!(id.as_str().bytes().all(|byte| byte.is_ascii_alphanumeric()));
    }
}
