//! Installed asset discovery and rom resolution
//!
//! Games are stored as one subdirectory per game id under the data root:
//!
//! ```text
//! <data root>/
//!     Airstriker-Genesis/
//!         rom.md          rom file, one recognized extension
//!         rom.sha         checksum signature; presence marks the game installed
//!         Level1.state    saved checkpoint
//! ```
//!
//! The checksum file is the install signature: a directory without it is
//! ignored regardless of what else it contains. Rom paths and state lists are
//! recomputed on every query, never cached.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::catalog::CoreCatalog;
use crate::error::ResolveError;

/// File marking a game directory as installed.
pub const CHECKSUM_FILE: &str = "rom.sha";

/// Extension of saved-state files, without the leading dot.
pub const STATE_EXTENSION: &str = "state";

/// Base name of rom files inside a game directory.
const ROM_STEM: &str = "rom";

/// Resolves game directories, rom files, and saved states against the
/// loaded core catalog.
///
/// Cheap to clone; the catalog is shared behind an [`Arc`] so the registry
/// and factory can each hold their own handle.
#[derive(Clone)]
pub struct AssetLocator {
    catalog: Arc<CoreCatalog>,
    data_root: PathBuf,
}

impl AssetLocator {
    pub fn new(catalog: Arc<CoreCatalog>, data_root: impl Into<PathBuf>) -> Self {
        Self {
            catalog,
            data_root: data_root.into(),
        }
    }

    /// The shared core catalog.
    pub fn catalog(&self) -> &CoreCatalog {
        &self.catalog
    }

    /// Root directory holding one subdirectory per game.
    pub fn data_root(&self) -> &Path {
        &self.data_root
    }

    /// Directory for a game id. Pure path composition, no I/O.
    pub fn game_dir(&self, game: &str) -> PathBuf {
        self.data_root.join(game)
    }

    /// True if the game's checksum signature file exists.
    pub fn is_installed(&self, game: &str) -> bool {
        self.game_dir(game).join(CHECKSUM_FILE).exists()
    }

    /// Resolve the rom file for a game.
    ///
    /// Tries `rom.<ext>` for each catalog extension and returns the first
    /// path that exists. Extension enumeration order is not stable, so a
    /// directory holding roms for two recognized extensions resolves to an
    /// arbitrary one of them.
    pub fn rom_path(&self, game: &str) -> Result<PathBuf, ResolveError> {
        let dir = self.game_dir(game);
        self.catalog
            .extensions()
            .map(|ext| dir.join(format!("{ROM_STEM}.{ext}")))
            .find(|path| path.exists())
            .ok_or_else(|| ResolveError::RomNotFound(game.to_string()))
    }

    /// Platform id for a rom file, derived from its extension.
    pub fn platform_for_rom(&self, rom_path: &Path) -> Result<&str, ResolveError> {
        let ext = rom_path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| {
                ResolveError::UnsupportedExtension(rom_path.display().to_string())
            })?;
        self.catalog.platform_for_extension(ext)
    }

    /// All installed game ids: subdirectories of the data root holding the
    /// checksum signature file.
    ///
    /// A missing or unreadable data root yields an empty list. Ordering
    /// follows the directory listing and callers must not depend on it.
    pub fn list_games(&self) -> Vec<String> {
        let Ok(entries) = std::fs::read_dir(&self.data_root) else {
            tracing::debug!(root = %self.data_root.display(), "data root not readable");
            return vec![];
        };

        entries
            .filter_map(|entry| {
                let entry = entry.ok()?;
                if !entry.path().is_dir() {
                    return None;
                }
                let game = entry.file_name().into_string().ok()?;
                self.is_installed(&game).then_some(game)
            })
            .collect()
    }

    /// All saved-state names for a game: files with the `.state` extension,
    /// extension stripped. Empty if the game has none or does not exist.
    pub fn list_states(&self, game: &str) -> Vec<String> {
        let Ok(entries) = std::fs::read_dir(self.game_dir(game)) else {
            return vec![];
        };

        entries
            .filter_map(|entry| {
                let path = entry.ok()?.path();
                if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some(STATE_EXTENSION) {
                    return None;
                }
                Some(path.file_stem()?.to_str()?.to_string())
            })
            .collect()
    }
}
