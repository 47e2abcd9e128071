//! Default on-disk locations
//!
//! The data directory holds one subdirectory per installed game; the cores
//! directory holds the core shared libraries alongside `cores.json`. Both
//! can be overridden explicitly; these are only the platform defaults.

use std::path::PathBuf;

/// Name of the core manifest file inside the cores directory.
pub const CORE_MANIFEST: &str = "cores.json";

fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("io.retrolab", "", "Retrolab")
}

/// Platform-specific root for installed game directories.
///
/// `None` if the home directory cannot be determined.
pub fn default_data_root() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.data_dir().join("games"))
}

/// Platform-specific directory for core libraries and the core manifest.
pub fn default_cores_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.data_dir().join("cores"))
}
