//! # Filesystem-backed token store
//!
//! [`FileTokenStore`] persists the session token as a single file. It is used
//! on desktop to keep the user signed in across app restarts.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! └── auth-token         # the bearer token, nothing else
//! ```
//!
//! ## Platform data directories
//!
//! Use [`dirs::data_dir()`] to obtain a platform-appropriate base:
//!
//! | Platform | Path |
//! |----------|------|
//! | macOS | `~/Library/Application Support/dailydiet/` |
//! | Linux | `~/.local/share/dailydiet/` |
//! | Windows | `C:\Users\<user>\AppData\Roaming\dailydiet\` |

use std::path::PathBuf;

use crate::token::{non_empty, TokenStore};

const TOKEN_FILE: &str = "auth-token";

/// Filesystem-backed TokenStore for desktop persistence.
#[derive(Clone, Debug)]
pub struct FileTokenStore {
    base: PathBuf,
}

impl FileTokenStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    fn token_path(&self) -> PathBuf {
        self.base.join(TOKEN_FILE)
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Option<String> {
        let content = std::fs::read_to_string(self.token_path()).ok()?;
        non_empty(content)
    }

    fn save(&self, token: &str) {
        let _ = std::fs::create_dir_all(&self.base);
        let _ = std::fs::write(self.token_path(), token);
    }

    fn clear(&self) {
        let _ = std::fs::remove_file(self.token_path());
    }
}
