use std::path::PathBuf;

/// Environment variable that relocates the config directory (used by tests).
pub const CONFIG_DIR_ENV: &str = "FLASHDECK_CONFIG_DIR";

/// Get the home directory, with fallback to "/"
pub fn get_home_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("/"))
}

/// Get the config directory path (~/.config/flashdeck unless overridden)
pub fn get_config_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
        return PathBuf::from(dir);
    }
    get_home_dir().join(".config").join("flashdeck")
}

/// Get the config file path
pub fn get_config_path() -> PathBuf {
    get_config_dir().join("config.toml")
}

/// Default directory for the card store
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| get_home_dir().join(".local").join("share"))
        .join("flashdeck")
}

/// Directory the log file is written to
pub fn get_log_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(get_home_dir)
        .join("flashdeck")
}

/// Full path of the log file
pub fn get_log_path() -> PathBuf {
    get_log_dir().join("flashdeck.log")
}

/// Expand a leading `~` in a user-supplied path
pub fn expand_path(path_str: &str) -> PathBuf {
    if path_str == "~" {
        get_home_dir()
    } else if let Some(rest) = path_str.strip_prefix("~/") {
        get_home_dir().join(rest)
    } else {
        PathBuf::from(path_str)
    }
}
