//! `retrolab games` - List installed games

use anyhow::Result;
use retrolab_core::AssetLocator;

pub fn execute(locator: &AssetLocator) -> Result<()> {
    let mut games = locator.list_games();
    games.sort();

    if games.is_empty() {
        println!(
            "No games installed under {}.",
            locator.data_root().display()
        );
        return Ok(());
    }

    for game in games {
        let states = locator.list_states(&game).len();
        println!("{:<32} {} state(s)", game, states);
    }
    Ok(())
}
