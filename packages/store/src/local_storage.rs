//! # Browser localStorage token store
//!
//! [`LocalStorageTokenStore`] is the [`TokenStore`] used on the **web
//! platform**. It keeps the bearer token in `window.localStorage` under
//! [`TOKEN_KEY`], so a page reload keeps the user signed in.
//!
//! The struct is zero-sized and looks up `localStorage` on every call. The
//! `Storage` handle is not `Send`, and the lookup is a cheap property read.
//! Private-mode browsers may refuse access entirely; that degrades to "no
//! stored token".

use web_sys::Storage;

use crate::token::{non_empty, TokenStore, TOKEN_KEY};

/// localStorage-backed TokenStore for the web platform.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageTokenStore;

impl LocalStorageTokenStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl TokenStore for LocalStorageTokenStore {
    fn load(&self) -> Option<String> {
        let raw = Self::storage()?.get_item(TOKEN_KEY).ok()??;
        non_empty(raw)
    }

    fn save(&self, token: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(TOKEN_KEY, token);
        }
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(TOKEN_KEY);
        }
    }
}
