use dirs::home_dir;
use std::{
    env,
    path::{Path, PathBuf},
};

pub const HOME_ENV_VAR: &str = "MEAT_COUNTER_HOME";
const DEFAULT_DIR_NAME: &str = ".meat_counter";
const CONFIG_FILE: &str = "config.json";

/// Returns the application data directory, defaulting to `~/.meat_counter`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os(HOME_ENV_VAR) {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

pub fn config_file_in(base: &Path) -> PathBuf {
    base.join(CONFIG_FILE)
}

/// Resolves `path` against `base` unless it is already absolute.
pub fn resolve_in(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}
