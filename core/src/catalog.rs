//! Emulation core catalog
//!
//! The catalog is the single source of truth for which cores exist, which rom
//! extensions each one accepts, and where its shared library lives. It is
//! loaded once from the JSON core manifest at startup and never mutated
//! afterwards; every query method takes `&self`.
//!
//! Manifest shape (one entry per core):
//!
//! ```json
//! {
//!     "Genesis": { "lib": "genesis_plus_gx", "ext": ["md", "gen", "smd"] },
//!     "Nes": { "lib": "fceumm", "ext": ["nes"] }
//! }
//! ```

use std::path::{Path, PathBuf};

use hashbrown::HashMap;
use serde::Deserialize;

use crate::error::{CatalogError, ResolveError};

/// Raw manifest entry as it appears in the JSON file.
#[derive(Debug, Clone, Deserialize)]
struct ManifestEntry {
    /// Core library base name, e.g. `genesis_plus_gx`.
    lib: String,
    /// Accepted rom extensions, without the leading dot.
    ext: Vec<String>,
}

/// One supported emulation core.
#[derive(Debug, Clone)]
pub struct CoreDescriptor {
    /// Platform identifier, e.g. `Genesis`.
    pub platform: String,
    /// Core library base name, without the `_libretro` suffix.
    pub lib: String,
    /// Rom extensions this core accepts, without the leading dot.
    pub extensions: Vec<String>,
}

/// Immutable lookup tables derived from the core manifest.
pub struct CoreCatalog {
    cores: HashMap<String, CoreDescriptor>,
    /// extension (no dot) -> platform id
    extensions: HashMap<String, String>,
    /// Directory holding the core shared libraries.
    cores_dir: PathBuf,
}

impl CoreCatalog {
    /// Parse a core manifest from JSON text.
    ///
    /// Fails if the manifest is malformed, an entry declares no extensions,
    /// or two cores claim the same extension.
    pub fn from_manifest_str(
        manifest: &str,
        cores_dir: impl Into<PathBuf>,
    ) -> Result<Self, CatalogError> {
        let entries: HashMap<String, ManifestEntry> = serde_json::from_str(manifest)?;

        let mut cores = HashMap::with_capacity(entries.len());
        let mut extensions: HashMap<String, String> = HashMap::new();

        for (platform, entry) in entries {
            if entry.ext.is_empty() {
                return Err(CatalogError::NoExtensions { platform });
            }
            for ext in &entry.ext {
                let ext = ext.trim_start_matches('.').to_string();
                if let Some(first) = extensions.get(&ext) {
                    return Err(CatalogError::DuplicateExtension {
                        ext,
                        first: first.clone(),
                        second: platform.clone(),
                    });
                }
                extensions.insert(ext, platform.clone());
            }
            cores.insert(
                platform.clone(),
                CoreDescriptor {
                    platform,
                    lib: entry.lib,
                    extensions: entry.ext,
                },
            );
        }

        tracing::debug!(
            cores = cores.len(),
            extensions = extensions.len(),
            "loaded core catalog"
        );

        Ok(Self {
            cores,
            extensions,
            cores_dir: cores_dir.into(),
        })
    }

    /// Load a core manifest from a file.
    pub fn load(path: &Path, cores_dir: impl Into<PathBuf>) -> Result<Self, CatalogError> {
        let manifest = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_manifest_str(&manifest, cores_dir)
    }

    /// Directory holding the core shared libraries.
    pub fn cores_dir(&self) -> &Path {
        &self.cores_dir
    }

    /// Look up the descriptor for a platform id.
    pub fn descriptor(&self, platform: &str) -> Result<&CoreDescriptor, ResolveError> {
        self.cores
            .get(platform)
            .ok_or_else(|| ResolveError::UnknownSystem(platform.to_string()))
    }

    /// Resolve a rom extension to its platform id. A leading dot is accepted.
    pub fn platform_for_extension(&self, ext: &str) -> Result<&str, ResolveError> {
        let ext = ext.trim_start_matches('.');
        self.extensions
            .get(ext)
            .map(String::as_str)
            .ok_or_else(|| ResolveError::UnsupportedExtension(ext.to_string()))
    }

    /// Full path to a platform's core shared library on the host OS.
    pub fn library_path(&self, platform: &str) -> Result<PathBuf, ResolveError> {
        let descriptor = self.descriptor(platform)?;
        let suffix = host_library_suffix()?;
        Ok(self
            .cores_dir
            .join(format!("{}_libretro.{}", descriptor.lib, suffix)))
    }

    /// All rom extensions known to the catalog, without leading dots.
    ///
    /// Enumeration order is the internal table order and is not stable across
    /// manifest edits; callers must not depend on it.
    pub fn extensions(&self) -> impl Iterator<Item = &str> {
        self.extensions.keys().map(String::as_str)
    }

    /// All platform ids known to the catalog.
    pub fn platforms(&self) -> impl Iterator<Item = &str> {
        self.cores.keys().map(String::as_str)
    }

    /// Number of loaded cores.
    pub fn len(&self) -> usize {
        self.cores.len()
    }

    /// True if no cores are loaded.
    pub fn is_empty(&self) -> bool {
        self.cores.is_empty()
    }
}

/// Shared library suffix for the host OS family.
pub fn host_library_suffix() -> Result<&'static str, ResolveError> {
    match std::env::consts::OS {
        "linux" => Ok("so"),
        "macos" => Ok("dylib"),
        "windows" => Ok("dll"),
        other => Err(ResolveError::UnsupportedHost(other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MANIFEST: &str = r#"{
        "Genesis": { "lib": "genesis_plus_gx", "ext": ["md", "gen", "smd"] },
        "Nes": { "lib": "fceumm", "ext": ["nes"] },
        "Snes": { "lib": "snes9x", "ext": ["sfc", "smc"] }
    }"#;

    fn catalog() -> CoreCatalog {
        CoreCatalog::from_manifest_str(MANIFEST, "/opt/retrolab/cores").unwrap()
    }

    // =============================================================
    // Manifest loading
    // =============================================================

    #[test]
    fn test_load_valid_manifest() {
        let catalog = catalog();
        assert_eq!(catalog.len(), 3);
        assert!(!catalog.is_empty());

        let genesis = catalog.descriptor("Genesis").unwrap();
        assert_eq!(genesis.platform, "Genesis");
        assert_eq!(genesis.lib, "genesis_plus_gx");
        assert_eq!(genesis.extensions, vec!["md", "gen", "smd"]);
    }

    #[test]
    fn test_load_malformed_json() {
        let result = CoreCatalog::from_manifest_str("not json {{{", "/cores");
        assert!(matches!(result, Err(CatalogError::Malformed(_))));
    }

    #[test]
    fn test_load_missing_lib_field() {
        let result = CoreCatalog::from_manifest_str(r#"{ "Nes": { "ext": ["nes"] } }"#, "/cores");
        assert!(matches!(result, Err(CatalogError::Malformed(_))));
    }

    #[test]
    fn test_load_missing_ext_field() {
        let result =
            CoreCatalog::from_manifest_str(r#"{ "Nes": { "lib": "fceumm" } }"#, "/cores");
        assert!(matches!(result, Err(CatalogError::Malformed(_))));
    }

    #[test]
    fn test_load_empty_extension_list() {
        let result =
            CoreCatalog::from_manifest_str(r#"{ "Nes": { "lib": "fceumm", "ext": [] } }"#, "/cores");
        assert!(matches!(
            result,
            Err(CatalogError::NoExtensions { platform }) if platform == "Nes"
        ));
    }

    #[test]
    fn test_load_rejects_duplicate_extension() {
        let manifest = r#"{
            "Genesis": { "lib": "genesis_plus_gx", "ext": ["md"] },
            "MegaDrive": { "lib": "picodrive", "ext": ["md"] }
        }"#;
        let result = CoreCatalog::from_manifest_str(manifest, "/cores");
        match result {
            Err(CatalogError::DuplicateExtension { ext, first, second }) => {
                assert_eq!(ext, "md");
                // Map iteration order is unspecified; either core may be seen first.
                let mut claimants = [first, second];
                claimants.sort();
                assert_eq!(claimants, ["Genesis".to_string(), "MegaDrive".to_string()]);
            }
            other => panic!("expected DuplicateExtension, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_load_empty_manifest() {
        let catalog = CoreCatalog::from_manifest_str("{}", "/cores").unwrap();
        assert!(catalog.is_empty());
        assert_eq!(catalog.extensions().count(), 0);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("cores.json");
        std::fs::write(&path, MANIFEST).unwrap();

        let catalog = CoreCatalog::load(&path, "/cores").unwrap();
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn test_load_from_missing_file() {
        let result = CoreCatalog::load(Path::new("/nonexistent/cores.json"), "/cores");
        assert!(matches!(result, Err(CatalogError::Io { .. })));
    }

    // =============================================================
    // Extension lookup
    // =============================================================

    #[test]
    fn test_platform_for_extension() {
        let catalog = catalog();
        assert_eq!(catalog.platform_for_extension("md").unwrap(), "Genesis");
        assert_eq!(catalog.platform_for_extension("nes").unwrap(), "Nes");
        assert_eq!(catalog.platform_for_extension("smc").unwrap(), "Snes");
    }

    #[test]
    fn test_platform_for_extension_accepts_leading_dot() {
        let catalog = catalog();
        assert_eq!(catalog.platform_for_extension(".gen").unwrap(), "Genesis");
    }

    #[test]
    fn test_platform_for_extension_total_over_declared() {
        // Every declared extension resolves to its declaring platform.
        let catalog = catalog();
        for descriptor in catalog.platforms().map(|p| catalog.descriptor(p).unwrap()) {
            for ext in &descriptor.extensions {
                assert_eq!(
                    catalog.platform_for_extension(ext).unwrap(),
                    descriptor.platform
                );
            }
        }
    }

    #[test]
    fn test_platform_for_unknown_extension() {
        let catalog = catalog();
        let result = catalog.platform_for_extension("iso");
        assert!(matches!(
            result,
            Err(ResolveError::UnsupportedExtension(ext)) if ext == "iso"
        ));
    }

    // =============================================================
    // Library paths
    // =============================================================

    #[test]
    fn test_library_path() {
        let catalog = catalog();
        let path = catalog.library_path("Genesis").unwrap();
        let expected = format!(
            "genesis_plus_gx_libretro.{}",
            host_library_suffix().unwrap()
        );
        assert_eq!(path, Path::new("/opt/retrolab/cores").join(expected));
    }

    #[test]
    fn test_library_path_unknown_platform() {
        let catalog = catalog();
        let result = catalog.library_path("Atari2600");
        assert!(matches!(
            result,
            Err(ResolveError::UnknownSystem(p)) if p == "Atari2600"
        ));
    }

    #[test]
    fn test_descriptor_unknown_platform() {
        let catalog = catalog();
        assert!(matches!(
            catalog.descriptor("Dreamcast"),
            Err(ResolveError::UnknownSystem(_))
        ));
    }

    #[test]
    fn test_host_library_suffix_known() {
        // Test suites only run on supported hosts.
        let suffix = host_library_suffix().unwrap();
        assert!(matches!(suffix, "so" | "dylib" | "dll"));
    }
}
