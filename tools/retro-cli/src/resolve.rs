//! `retrolab resolve` - Resolve a game to its rom file and platform

use anyhow::Result;
use clap::Args;
use retrolab_core::AssetLocator;

#[derive(Args)]
pub struct ResolveArgs {
    /// Game id or unique prefix
    pub game: String,
}

/// Resolve a query to an installed game id, printing suggestions on failure.
pub fn resolve_game(locator: &AssetLocator, query: &str) -> Result<String> {
    let games = locator.list_games();
    match retrolab_core::resolve(query, &games, "game") {
        Ok(game) => Ok(game.to_string()),
        Err(err) => {
            eprintln!("{}", err.message);
            if !err.suggestions.is_empty() {
                eprintln!("\nDid you mean:");
                for suggestion in &err.suggestions {
                    eprintln!("  - {suggestion}");
                }
            }
            anyhow::bail!("could not resolve game '{query}'")
        }
    }
}

pub fn execute(locator: &AssetLocator, args: ResolveArgs) -> Result<()> {
    let game = resolve_game(locator, &args.game)?;
    let rom_path = locator.rom_path(&game)?;
    let platform = locator.platform_for_rom(&rom_path)?;
    let library = locator.catalog().library_path(platform)?;

    println!("game:     {game}");
    println!("rom:      {}", rom_path.display());
    println!("platform: {platform}");
    println!("core:     {}", library.display());
    Ok(())
}
