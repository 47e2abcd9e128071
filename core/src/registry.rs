//! Environment registry
//!
//! At initialization the registry enumerates every installed game and every
//! saved state for it, and records one [`EnvRegistration`] per pair under the
//! id `"<game>-<state>-v0"`. A registration holds its (game, state) pair by
//! value, so instantiating it later always targets the pair it was built for
//! rather than whatever a shared loop variable last pointed at.
//!
//! The registry is built exactly once and read-only afterwards; rebuild the
//! process to pick up catalog or data-directory changes.

use hashbrown::HashMap;

use crate::env::{EnvOptions, EnvironmentBuilder};
use crate::factory::{CreateError, EnvironmentFactory};
use crate::locator::AssetLocator;

/// Version tag appended to every registered environment id.
const ID_VERSION: &str = "v0";

/// A deferred environment constructor for one (game, state) pair.
///
/// The pair is bound by value at registration time; [`instantiate`] is the
/// zero-argument constructor the registration surface promises, taking only
/// the factory to delegate to and per-call options.
///
/// [`instantiate`]: EnvRegistration::instantiate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvRegistration {
    id: String,
    game: String,
    state: String,
}

impl EnvRegistration {
    fn new(game: String, state: String) -> Self {
        Self {
            id: format!("{game}-{state}-{ID_VERSION}"),
            game,
            state,
        }
    }

    /// Registered environment id, `"<game>-<state>-v0"`.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Game id the registration was bound to.
    pub fn game(&self) -> &str {
        &self.game
    }

    /// Saved-state name the registration was bound to.
    pub fn state(&self) -> &str {
        &self.state
    }

    /// Build the environment this registration was bound to.
    pub fn instantiate<B: EnvironmentBuilder>(
        &self,
        factory: &EnvironmentFactory<B>,
        options: EnvOptions,
    ) -> Result<B::Environment, CreateError> {
        factory.create(&self.game, &self.state, options)
    }
}

/// All registered environments, indexed by id.
pub struct EnvironmentRegistry {
    entries: Vec<EnvRegistration>,
    index: HashMap<String, usize>,
}

impl EnvironmentRegistry {
    /// Enumerate every (installed game, state) pair and register it.
    ///
    /// Runs once at initialization; filesystem work is proportional to the
    /// number of installed games. An empty or missing data root produces an
    /// empty registry, not an error.
    pub fn build_all(locator: &AssetLocator) -> Self {
        let mut entries = Vec::new();
        for game in locator.list_games() {
            for state in locator.list_states(&game) {
                entries.push(EnvRegistration::new(game.clone(), state));
            }
        }

        let index = entries
            .iter()
            .enumerate()
            .map(|(i, reg)| (reg.id.clone(), i))
            .collect();

        tracing::debug!(environments = entries.len(), "registered environments");
        Self { entries, index }
    }

    /// Look up a registration by its environment id.
    ///
    /// This is also the decomposition path for ids: the returned
    /// registration carries the exact (game, state) pair the id was built
    /// from, with no string parsing involved.
    pub fn get(&self, id: &str) -> Option<&EnvRegistration> {
        self.index.get(id).map(|&i| &self.entries[i])
    }

    /// All registered environment ids.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|reg| reg.id())
    }

    pub fn iter(&self) -> impl Iterator<Item = &EnvRegistration> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
