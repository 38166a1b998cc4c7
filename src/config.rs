use crate::keymap::Keymap;
use crate::store::JsonFileStore;
use crate::styles::ThemeType;
use crate::utils::{default_data_dir, expand_path};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// User configuration, stored as TOML in the config directory
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the card file. `~` is expanded.
    #[serde(default = "default_data_dir_string")]
    pub data_dir: String,
    /// Name of the card file without extension (default: flashcards)
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    /// "dark", "light" or "nocolor"
    #[serde(default = "default_theme")]
    pub theme: String,
    /// Start practice sessions in shuffled order
    #[serde(default)]
    pub shuffle_on_start: bool,
    /// Ask before "Reset all flashcards" (default: true)
    #[serde(default = "default_true")]
    pub confirm_reset: bool,
    #[serde(default)]
    pub keymap: Keymap,
}

fn default_data_dir_string() -> String {
    default_data_dir().to_string_lossy().into_owned()
}

fn default_storage_key() -> String {
    "flashcards".to_string()
}

fn default_theme() -> String {
    "dark".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir_string(),
            storage_key: default_storage_key(),
            theme: default_theme(),
            shuffle_on_start: false,
            confirm_reset: true,
            keymap: Keymap::default(),
        }
    }
}

impl Config {
    /// Load configuration from file, writing the defaults if it doesn't exist
    pub fn load_or_create(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            let config = Self::default();
            config.save(config_path)?;
            tracing::info!("Created default config at {:?}", config_path);
            return Ok(config);
        }

        let content = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config file: {:?}", config_path))?;
        let mut config: Config =
            toml::from_str(&content).with_context(|| "Failed to parse config file")?;

        if config.storage_key.trim().is_empty() {
            config.storage_key = default_storage_key();
        }
        if config.data_dir.trim().is_empty() {
            config.data_dir = default_data_dir_string();
        }
        for (key, err) in config.keymap.invalid_overrides() {
            tracing::warn!("Ignoring keymap override {:?}: {}", key, err);
        }

        Ok(config)
    }

    /// Save configuration to file with owner-only permissions
    pub fn save(&self, config_path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).with_context(|| "Failed to serialize config")?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }

        std::fs::write(config_path, content)
            .with_context(|| format!("Failed to write config file: {:?}", config_path))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(config_path)
                .with_context(|| format!("Failed to get file metadata: {:?}", config_path))?
                .permissions();
            perms.set_mode(0o600);
            std::fs::set_permissions(config_path, perms)
                .with_context(|| format!("Failed to set file permissions: {:?}", config_path))?;
        }

        Ok(())
    }

    pub fn data_dir(&self) -> PathBuf {
        expand_path(&self.data_dir)
    }

    /// Path of the card file: `<data_dir>/<storage_key>.json`
    pub fn storage_path(&self) -> PathBuf {
        self.store().path().to_path_buf()
    }

    pub fn store(&self) -> JsonFileStore {
        JsonFileStore::new(&self.data_dir(), &self.storage_key)
    }

    /// Theme from the config file, forced to no-color when `no_colors` is set
    /// or the `NO_COLOR` environment variable is present
    pub fn theme_type(&self, no_colors: bool) -> ThemeType {
        let no_color_env = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
        if no_colors || no_color_env {
            ThemeType::NoColor
        } else {
            self.theme.parse().unwrap_or_default()
        }
    }
}
