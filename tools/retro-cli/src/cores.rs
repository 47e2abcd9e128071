//! `retrolab cores` - List loaded emulation cores

use anyhow::Result;
use retrolab_core::AssetLocator;

pub fn execute(locator: &AssetLocator) -> Result<()> {
    let catalog = locator.catalog();

    let mut platforms: Vec<&str> = catalog.platforms().collect();
    platforms.sort();

    if platforms.is_empty() {
        println!("No cores loaded.");
        return Ok(());
    }

    for platform in platforms {
        let descriptor = catalog.descriptor(platform)?;
        let library = catalog.library_path(platform)?;
        println!(
            "{:<16} ext: {:<20} lib: {}",
            descriptor.platform,
            descriptor.extensions.join(", "),
            library.display()
        );
    }
    Ok(())
}
