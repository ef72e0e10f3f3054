use anyhow::Result;

use crate::config::AffinityConfig;

/// Display relationship data statistics in the terminal.
pub fn stats(config: &AffinityConfig, json: bool) -> Result<()> {
    let index = super::load_index(config)?;
    let stats = index.stats();

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!("Relationship Data");
    println!("{}", "=".repeat(40));
    println!("  Base file:           {}", config.resolved_data_path().display());
    if let Some(overlay) = config.resolved_overlay_path() {
        println!("  Overlay file:        {}", overlay.display());
    }
    println!();
    println!("  Relation groups:     {}", stats.groups);
    println!("  Characters:          {}", stats.characters);
    println!("  Named characters:    {}", stats.named_characters);
    println!("  Total group points:  {}", stats.total_points);
    Ok(())
}
