//! Error types for catalog loading and asset resolution.

use std::path::PathBuf;

use thiserror::Error;

/// Fatal errors raised while loading the core manifest.
///
/// Any of these means the catalog cannot serve queries; initializing callers
/// should abort startup rather than continue with a partial table.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The manifest file could not be read.
    #[error("failed to read core manifest at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The manifest is not valid JSON or is structurally invalid.
    #[error("malformed core manifest: {0}")]
    Malformed(#[from] serde_json::Error),

    /// A core entry declares no rom extensions, so nothing could ever
    /// resolve to it.
    #[error("core '{platform}' declares no rom extensions")]
    NoExtensions { platform: String },

    /// Two cores claim the same rom extension. Rejected at load time rather
    /// than letting the last entry silently win.
    #[error("rom extension '{ext}' is claimed by both '{first}' and '{second}'")]
    DuplicateExtension {
        ext: String,
        first: String,
        second: String,
    },
}

/// Errors raised while resolving games, roms, and platforms.
///
/// These propagate normally from the catalog and locator APIs. Only
/// [`EnvironmentFactory::create`](crate::factory::EnvironmentFactory::create)
/// converts them into a sentinel instead of returning them.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// Platform id not present in the loaded catalog.
    #[error("unknown system '{0}': not present in the core catalog")]
    UnknownSystem(String),

    /// File extension not recognized by any loaded core.
    #[error("unsupported rom extension '{0}'")]
    UnsupportedExtension(String),

    /// The game directory has no rom file for any known extension.
    #[error("no rom file found for game '{0}'")]
    RomNotFound(String),

    /// The game has no checksum signature file, i.e. it was never installed.
    #[error("game '{0}' is not installed")]
    NotInstalled(String),

    /// The host OS has no known core library suffix.
    #[error("unsupported host platform '{0}'")]
    UnsupportedHost(&'static str),
}
