//! Platform-specific plumbing shared by every view.
//!
//! Picks the [`store::TokenStore`] backend and the configuration source:
//! - **Web** (WASM + `web` feature): `localStorage` via [`store::LocalStorageTokenStore`],
//!   API URL baked in at compile time from `DAILYDIET_API_URL`
//! - **Desktop** (native): a file under `<data_dir>/dailydiet/` via
//!   [`store::FileTokenStore`], config from `<config_dir>/dailydiet/dailydiet.toml`
//!   with a `DAILYDIET_API_URL` environment override
//!
//! Any other combination falls back to [`store::MemoryTokenStore`].

use std::time::Duration;

use api::{ApiClient, Session};
use store::DailyDietConfig;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformTokenStore = store::LocalStorageTokenStore;
#[cfg(not(target_arch = "wasm32"))]
pub type PlatformTokenStore = store::FileTokenStore;
#[cfg(all(target_arch = "wasm32", not(feature = "web")))]
pub type PlatformTokenStore = store::MemoryTokenStore;

/// The session type every view sees through context.
pub type AppSession = Session<PlatformTokenStore>;

/// Create the platform-appropriate token store.
pub fn make_token_store() -> PlatformTokenStore {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::LocalStorageTokenStore::new()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let base = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("dailydiet");
        store::FileTokenStore::new(base)
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        store::MemoryTokenStore::new()
    }
}

/// Build a not-yet-restored session against the configured API.
pub fn make_session(config: &DailyDietConfig) -> AppSession {
    let client = ApiClient::new(config.api.base_url.clone());
    tracing::info!(base_url = client.base_url(), "api client ready");
    Session::new(client, make_token_store())
}

/// Load the app configuration for this platform.
pub fn load_config() -> DailyDietConfig {
    #[cfg(target_arch = "wasm32")]
    {
        match option_env!("DAILYDIET_API_URL") {
            Some(url) => DailyDietConfig::new(url.to_string()),
            None => DailyDietConfig::default(),
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        dotenvy::dotenv().ok();

        let path = dirs::config_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("dailydiet")
            .join(DailyDietConfig::filename());

        let mut config = match std::fs::read_to_string(&path) {
            Ok(text) => DailyDietConfig::from_toml(&text).unwrap_or_else(|e| {
                tracing::error!("Invalid config at {}: {}", path.display(), e);
                DailyDietConfig::default()
            }),
            Err(_) => DailyDietConfig::default(),
        };

        if let Ok(url) = std::env::var("DAILYDIET_API_URL") {
            config.api.base_url = url;
        }
        config
    }
}

/// Wait without blocking the UI thread.
pub async fn sleep_secs(secs: u32) {
    let duration = Duration::from_secs(u64::from(secs));
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}
