//! CLI `inspect` command — show one character's relationship groups.

use anyhow::{bail, Result};

use crate::affinity::types::CharacterId;
use crate::config::AffinityConfig;

/// Print a character's name and every group it belongs to, with points.
pub fn inspect(config: &AffinityConfig, id: CharacterId) -> Result<()> {
    let index = super::load_index(config)?;
    let name = index.name_of(id);

    let Some(groups) = index.groups_of(id) else {
        match name {
            Some(name) => bail!("{name} ({id}) has no relation data"),
            None => bail!("character not found: {id}"),
        }
    };

    println!("Character: {} ({id})", super::display_name(name));
    println!("{}", "=".repeat(40));
    println!("  Groups:          {}", groups.len());
    let total: u64 = groups.iter().map(|g| u64::from(index.points_of(*g))).sum();
    println!("  Total points:    {total}");
    println!();
    for group in groups {
        println!("  group {:<8} {:>5} pts", group, index.points_of(*group));
    }
    Ok(())
}
