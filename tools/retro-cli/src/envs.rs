//! `retrolab envs` - List registered environment ids

use anyhow::Result;
use retrolab_core::{AssetLocator, EnvironmentRegistry};

pub fn execute(locator: &AssetLocator) -> Result<()> {
    let registry = EnvironmentRegistry::build_all(locator);

    if registry.is_empty() {
        println!("No environments registered.");
        return Ok(());
    }

    let mut ids: Vec<&str> = registry.ids().collect();
    ids.sort();
    for id in ids {
        println!("{id}");
    }
    Ok(())
}
