//! Environment factory
//!
//! The factory is the boundary where resolution failures stop propagating:
//! requesting an environment for a game that is absent or half-imported
//! reports a diagnostic and returns [`CreateError::Unavailable`] instead of
//! surfacing a locator error. Lower-level APIs keep their structured errors;
//! callers of [`EnvironmentFactory::create`] match on the result.

use thiserror::Error;

use crate::env::{EnvOptions, EnvSpec, EnvironmentBuilder};
use crate::locator::AssetLocator;

/// Why a requested environment could not be offered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Unavailable {
    /// No trace of the game under the data root.
    #[error("game '{0}' is not installed")]
    NotInstalled(String),

    /// Checksum signature present but no rom file; the rom import step was
    /// skipped or failed.
    #[error("game '{0}' has no rom file; was the rom imported?")]
    RomMissing(String),
}

/// Error returned by [`EnvironmentFactory::create`].
#[derive(Debug, Error)]
pub enum CreateError {
    /// Sentinel: the game or its rom could not be resolved. Already
    /// reported via `tracing`; never raised as a locator error.
    #[error(transparent)]
    Unavailable(#[from] Unavailable),

    /// The engine-side builder failed after successful resolution.
    #[error("environment construction failed: {0}")]
    Builder(#[source] anyhow::Error),
}

/// Validates (game, state) requests and delegates construction to an
/// [`EnvironmentBuilder`].
pub struct EnvironmentFactory<B> {
    locator: AssetLocator,
    builder: B,
}

impl<B: EnvironmentBuilder> EnvironmentFactory<B> {
    pub fn new(locator: AssetLocator, builder: B) -> Self {
        Self { locator, builder }
    }

    pub fn locator(&self) -> &AssetLocator {
        &self.locator
    }

    /// Resolve a (game, state) pair and build its environment.
    ///
    /// Resolution failures are logged and returned as
    /// [`CreateError::Unavailable`], distinguishing a game that is entirely
    /// absent from one whose checksum exists but whose rom was never
    /// imported. Options are forwarded to the builder unexamined.
    pub fn create(
        &self,
        game: &str,
        state: &str,
        options: EnvOptions,
    ) -> Result<B::Environment, CreateError> {
        let rom_path = match self.locator.rom_path(game) {
            Ok(path) => path,
            Err(_) => {
                let unavailable = if self.locator.is_installed(game) {
                    tracing::warn!(game, "rom checksum present but no rom file; import the rom");
                    Unavailable::RomMissing(game.to_string())
                } else {
                    tracing::warn!(game, "game not found");
                    Unavailable::NotInstalled(game.to_string())
                };
                return Err(unavailable.into());
            }
        };

        // The rom path came from catalog extensions, so this lookup can only
        // fail if the filesystem changed underneath us.
        let platform = self
            .locator
            .platform_for_rom(&rom_path)
            .map_err(|e| CreateError::Builder(e.into()))?
            .to_string();

        let spec = EnvSpec {
            game: game.to_string(),
            state: state.to_string(),
            rom_path,
            platform,
            options,
        };
        self.builder.build(spec).map_err(CreateError::Builder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CoreCatalog;
    use std::fs;
    use std::path::Path;
    use std::sync::Arc;
    use tempfile::TempDir;

    const MANIFEST: &str = r#"{
        "Genesis": { "lib": "genesis_plus_gx", "ext": ["md"] },
        "Nes": { "lib": "fceumm", "ext": ["nes"] }
    }"#;

    /// Builder that records the spec it was handed.
    struct SpecEcho;

    impl EnvironmentBuilder for SpecEcho {
        type Environment = EnvSpec;

        fn build(&self, spec: EnvSpec) -> anyhow::Result<EnvSpec> {
            Ok(spec)
        }
    }

    /// Builder that always fails.
    struct Broken;

    impl EnvironmentBuilder for Broken {
        type Environment = ();

        fn build(&self, _spec: EnvSpec) -> anyhow::Result<()> {
            anyhow::bail!("engine exploded")
        }
    }

    fn factory<B: EnvironmentBuilder>(root: &Path, builder: B) -> EnvironmentFactory<B> {
        let catalog = CoreCatalog::from_manifest_str(MANIFEST, "/cores").unwrap();
        EnvironmentFactory::new(AssetLocator::new(Arc::new(catalog), root), builder)
    }

    fn install_game(root: &Path, game: &str, rom_ext: &str, states: &[&str]) {
        let dir = root.join(game);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(crate::locator::CHECKSUM_FILE), b"sha").unwrap();
        fs::write(dir.join(format!("rom.{rom_ext}")), b"rom").unwrap();
        for state in states {
            fs::write(dir.join(format!("{state}.state")), b"state").unwrap();
        }
    }

    #[test]
    fn test_create_valid_game() {
        let root = TempDir::new().unwrap();
        install_game(root.path(), "sonic", "md", &["Start"]);
        let factory = factory(root.path(), SpecEcho);

        let mut options = EnvOptions::new();
        options.insert("players".into(), serde_json::json!(2));

        let spec = factory.create("sonic", "Start", options).unwrap();
        assert_eq!(spec.game, "sonic");
        assert_eq!(spec.state, "Start");
        assert_eq!(spec.rom_path, root.path().join("sonic").join("rom.md"));
        assert_eq!(spec.platform, "Genesis");
        assert_eq!(spec.options.get("players"), Some(&serde_json::json!(2)));
    }

    #[test]
    fn test_create_nonexistent_game_is_sentinel() {
        let root = TempDir::new().unwrap();
        let factory = factory(root.path(), SpecEcho);

        let result = factory.create("nonexistent", "x", EnvOptions::new());
        assert!(matches!(
            result,
            Err(CreateError::Unavailable(Unavailable::NotInstalled(game))) if game == "nonexistent"
        ));
    }

    #[test]
    fn test_create_checksum_without_rom_is_distinct_sentinel() {
        let root = TempDir::new().unwrap();
        let dir = root.path().join("half-imported");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(crate::locator::CHECKSUM_FILE), b"sha").unwrap();

        let factory = factory(root.path(), SpecEcho);
        let result = factory.create("half-imported", "x", EnvOptions::new());
        assert!(matches!(
            result,
            Err(CreateError::Unavailable(Unavailable::RomMissing(game))) if game == "half-imported"
        ));
    }

    #[test]
    fn test_sentinel_diagnostics_are_distinct() {
        let absent = Unavailable::NotInstalled("a".into()).to_string();
        let rom_missing = Unavailable::RomMissing("a".into()).to_string();
        assert_ne!(absent, rom_missing);
        assert!(rom_missing.contains("imported"));
    }

    #[test]
    fn test_builder_failure_passes_through() {
        let root = TempDir::new().unwrap();
        install_game(root.path(), "pong", "nes", &[]);
        let factory = factory(root.path(), Broken);

        let result = factory.create("pong", "Start", EnvOptions::new());
        match result {
            Err(CreateError::Builder(e)) => assert!(e.to_string().contains("engine exploded")),
            other => panic!("expected builder error, got {:?}", other.map(|_| ())),
        }
    }
}
