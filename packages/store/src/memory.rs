use std::sync::{Arc, Mutex};

use crate::token::{non_empty, TokenStore};

/// In-memory TokenStore for tests and for sessions that should not outlive
/// the process.
#[derive(Clone, Debug, Default)]
pub struct MemoryTokenStore {
    token: Arc<Mutex<Option<String>>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds `token`, as if a previous run had
    /// signed in.
    pub fn with_token(token: impl Into<String>) -> Self {
        let store = Self::new();
        store.save(&token.into());
        store
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        let guard = self.token.lock().ok()?;
        guard.clone().and_then(non_empty)
    }

    fn save(&self, token: &str) {
        if let Ok(mut guard) = self.token.lock() {
            *guard = Some(token.to_string());
        }
    }

    fn clear(&self) {
        if let Ok(mut guard) = self.token.lock() {
            *guard = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_store_has_no_token() {
        let store = MemoryTokenStore::new();
        assert!(store.load().is_none());
    }

    #[test]
    fn test_save_load_clear() {
        let store = MemoryTokenStore::new();

        store.save("abc");
        assert_eq!(store.load().as_deref(), Some("abc"));

        store.save("def");
        assert_eq!(store.load().as_deref(), Some("def"));

        store.clear();
        assert!(store.load().is_none());
    }

    #[test]
    fn test_clones_share_state() {
        let store = MemoryTokenStore::with_token("shared");
        let other = store.clone();

        other.clear();
        assert!(store.load().is_none());
    }

    #[test]
    fn test_blank_token_reads_as_none() {
        let store = MemoryTokenStore::with_token("   ");
        assert!(store.load().is_none());
    }
}
