//! CLI `doctor` command — cross-check the relationship tables and print a report.

use anyhow::Result;

use crate::config::AffinityConfig;

/// Show how many ids to list before truncating.
const MAX_LISTED: usize = 20;

/// Run data diagnostics and print a health report.
pub fn doctor(config: &AffinityConfig) -> Result<()> {
    let data_path = config.resolved_data_path();

    if !data_path.exists() {
        println!("Relationship data: not found at {}", data_path.display());
        println!("Set [data] path in {} or AFFINITY_DATA.", crate::config::default_config_path().display());
        return Ok(());
    }

    let index = super::load_index(config)?;
    let report = index.check();

    println!("Affinity Data Health Report");
    println!("===========================");
    println!();
    println!("Data file:         {}", data_path.display());
    println!();
    section("Characters without a name", &report.unnamed_characters);
    section("Groups without points (score 0)", &report.unpriced_groups);
    section("Groups no character belongs to", &report.unused_groups);
    section("Characters with no groups", &report.characters_without_groups);
    println!();
    if report.is_clean() {
        println!("Consistency check: PASSED");
    } else {
        println!("Consistency check: WARNINGS (scoring still works; affected terms score 0)");
    }
    Ok(())
}

fn section(title: &str, ids: &[u32]) {
    println!("{title}: {}", ids.len());
    if ids.is_empty() {
        return;
    }
    let shown: Vec<String> = ids.iter().take(MAX_LISTED).map(u32::to_string).collect();
    let more = ids.len().saturating_sub(MAX_LISTED);
    if more > 0 {
        println!("  {} ... and {more} more", shown.join(", "));
    } else {
        println!("  {}", shown.join(", "));
    }
}
