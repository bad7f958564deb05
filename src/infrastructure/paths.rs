//! Platform directories for configuration, traces and exports.
//!
//! Locations come from `dirs`. When the platform has no such directory the
//! current directory is used, so path lookups never fail.

use std::path::{Path, PathBuf};

const APP_DIR: &str = "cohesivegov";

/// `<config dir>/cohesivegov/config.toml`
#[must_use]
pub fn config_file() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
        .join("config.toml")
}

/// Directory for trace files.
#[must_use]
pub fn data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

/// Default destination for exports: the user's download directory.
#[must_use]
pub fn default_export_dir() -> PathBuf {
    dirs::download_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Expands a leading `~` to the home directory.
#[must_use]
pub fn expand_tilde(path: &str) -> PathBuf {
    let home = dirs::home_dir();
    match (path.strip_prefix("~"), home) {
        (Some(""), Some(home)) => home,
        (Some(rest), Some(home)) if rest.starts_with('/') => home.join(&rest[1..]),
        _ => PathBuf::from(path),
    }
}

/// Joins `file_name` onto `dir`, refusing names that would escape `dir`.
#[must_use]
pub fn export_path(dir: &Path, file_name: &str) -> Option<PathBuf> {
    let name = Path::new(file_name);
    let single_component = name.components().count() == 1
        && name.file_name().is_some_and(|n| n == name.as_os_str());
    single_component.then(|| dir.join(name))
}
