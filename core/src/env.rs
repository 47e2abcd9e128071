//! Environment construction seam
//!
//! The emulation engine is external to this crate. Engines plug in by
//! implementing [`EnvironmentBuilder`], which receives a fully resolved
//! [`EnvSpec`] and constructs whatever environment type the engine provides.
//! This keeps the catalog and registry engine-agnostic.

use std::path::PathBuf;

/// Open configuration set forwarded to the environment constructor.
///
/// Recognized keys are defined by the builder, not by this crate; the
/// factory passes the map through unexamined.
pub type EnvOptions = serde_json::Map<String, serde_json::Value>;

/// A fully resolved request for one environment.
#[derive(Debug, Clone)]
pub struct EnvSpec {
    /// Game id (directory base name under the data root).
    pub game: String,
    /// Saved-state name to start from.
    pub state: String,
    /// Resolved rom file path.
    pub rom_path: PathBuf,
    /// Platform id of the core that understands the rom.
    pub platform: String,
    /// Caller-supplied options, forwarded unexamined.
    pub options: EnvOptions,
}

/// Constructor for engine-specific environments.
///
/// Implementations receive a spec whose rom path and platform were already
/// validated against the catalog; `build` should only fail for
/// engine-internal reasons.
pub trait EnvironmentBuilder: Send + Sync {
    type Environment;

    fn build(&self, spec: EnvSpec) -> anyhow::Result<Self::Environment>;
}
