//! `retrolab states` - List saved states for a game

use anyhow::Result;
use clap::Args;
use retrolab_core::AssetLocator;

use crate::resolve::resolve_game;

#[derive(Args)]
pub struct StatesArgs {
    /// Game id or unique prefix
    pub game: String,
}

pub fn execute(locator: &AssetLocator, args: StatesArgs) -> Result<()> {
    let game = resolve_game(locator, &args.game)?;
    let mut states = locator.list_states(&game);
    states.sort();

    if states.is_empty() {
        println!("No saved states for '{game}'.");
        return Ok(());
    }

    for state in states {
        println!("{state}");
    }
    Ok(())
}
