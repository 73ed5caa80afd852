//! The one piece of state the client persists: the session bearer token.

/// Fixed storage key under which the bearer token is persisted.
pub const TOKEN_KEY: &str = "@Auth:token";

/// Persistent home for the session token.
///
/// Backends swallow their own I/O failures: an unreadable store reads as
/// "no token" and a failed write is dropped. The remote API stays the source
/// of truth, so the worst case is that the user has to sign in again.
pub trait TokenStore {
    /// Read the stored token. Empty values read as `None`.
    fn load(&self) -> Option<String>;

    /// Persist `token`, replacing any previous value.
    fn save(&self, token: &str);

    /// Remove the stored token, if any.
    fn clear(&self);
}

/// Normalise a raw stored value: whitespace-only or empty means no token.
pub(crate) fn non_empty(raw: String) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
