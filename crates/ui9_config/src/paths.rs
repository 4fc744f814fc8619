//! Config file location

use crate::env::Environment;
use std::path::PathBuf;

/// Home fallback when neither `home` nor `HOME` is set.
pub const DEFAULT_HOME: &str = "/usr/glenda";

/// Path of the config file below the home directory.
pub const CONFIG_RELATIVE: &str = "lib/9de/config.rc";

/// `$home`, then `$HOME`, then [`DEFAULT_HOME`].
pub fn home_dir(env: &dyn Environment) -> PathBuf {
    ["home", "HOME"]
        .iter()
        .filter_map(|k| env.var(k))
        .find(|v| !v.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_HOME))
}

pub fn config_path(env: &dyn Environment) -> PathBuf {
    home_dir(env).join(CONFIG_RELATIVE)
}
