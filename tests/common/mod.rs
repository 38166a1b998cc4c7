//! Shared test utilities for integration tests.
//!
//! `TestEnv` is an isolated flashdeck environment in a `TempDir`: a config
//! directory and a data directory, removed when dropped.
//!
//! Tests that call code reading the default config location must use
//! `.with_env_override()`, which points `FLASHDECK_CONFIG_DIR` at the temp
//! directory while holding a global lock.

use std::fs;
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard};
use tempfile::TempDir;

use flashdeck::config::Config;
use flashdeck::services::DeckService;
use flashdeck::store::JsonFileStore;
use flashdeck::utils::path::CONFIG_DIR_ENV;

/// Only one test at a time may touch the process environment.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Restores `FLASHDECK_CONFIG_DIR` when dropped.
struct EnvGuard {
    old_config: Option<String>,
    #[allow(dead_code)]
    lock: MutexGuard<'static, ()>,
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match &self.old_config {
            Some(v) => std::env::set_var(CONFIG_DIR_ENV, v),
            None => std::env::remove_var(CONFIG_DIR_ENV),
        }
    }
}

#[allow(dead_code)]
pub struct TestEnv {
    temp_dir: TempDir,
    pub config_dir: PathBuf,
    pub data_dir: PathBuf,
    env_guard: Option<EnvGuard>,
}

#[allow(dead_code)]
impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config_dir = temp_dir.path().join("config");
        let data_dir = temp_dir.path().join("data");
        fs::create_dir_all(&config_dir).expect("Failed to create config dir");
        Self {
            temp_dir,
            config_dir,
            data_dir,
            env_guard: None,
        }
    }

    /// Redirect the default config location to this environment.
    pub fn with_env_override(mut self) -> Self {
        let lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
        let old_config = std::env::var(CONFIG_DIR_ENV).ok();
        std::env::set_var(CONFIG_DIR_ENV, &self.config_dir);
        self.env_guard = Some(EnvGuard { old_config, lock });
        self
    }

    pub fn config_path(&self) -> PathBuf {
        self.config_dir.join("config.toml")
    }

    /// A default config whose card file lives in this environment.
    pub fn config(&self) -> Config {
        Config {
            data_dir: self.data_dir.to_string_lossy().into_owned(),
            ..Config::default()
        }
    }

    /// Write `config()` to `config_path()`.
    pub fn write_config(&self) -> Config {
        let config = self.config();
        config.save(&self.config_path()).expect("Failed to save config");
        config
    }

    pub fn store(&self) -> JsonFileStore {
        self.config().store()
    }

    pub fn store_path(&self) -> PathBuf {
        self.config().storage_path()
    }

    /// Open the deck fresh from disk, as a new process would.
    pub fn open_deck(&self) -> DeckService {
        DeckService::open(self.store())
    }

    pub fn write_raw_store(&self, content: &str) {
        fs::create_dir_all(&self.data_dir).expect("Failed to create data dir");
        fs::write(self.store_path(), content).expect("Failed to write store");
    }

    pub fn read_raw_store(&self) -> Option<String> {
        fs::read_to_string(self.store_path()).ok()
    }
}
