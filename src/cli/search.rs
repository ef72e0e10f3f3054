use anyhow::Result;

use crate::config::AffinityConfig;

/// Find characters by display name.
pub fn search(config: &AffinityConfig, term: &str) -> Result<()> {
    let index = super::load_index(config)?;
    let hits = index.find_by_name(term);

    if hits.is_empty() {
        println!("No characters found matching '{term}'.");
        return Ok(());
    }

    println!("Found {} character(s) matching '{term}':", hits.len());
    for (id, name) in hits {
        let marker = if index.contains(id) { "" } else { "  (no relation data)" };
        println!("  {id:>6}  {name}{marker}");
    }
    Ok(())
}
