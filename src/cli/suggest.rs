//! CLI `suggest` command — rank trainees for a parent pair.

use anyhow::Result;

use crate::affinity::{suggest_trainees, ParentSlot};
use crate::config::AffinityConfig;

/// Print the best trainees for `p1` and `p2`.
pub fn suggest(
    config: &AffinityConfig,
    p1: &ParentSlot,
    p2: &ParentSlot,
    limit: Option<usize>,
    json: bool,
) -> Result<()> {
    let index = super::load_index(config)?;
    let mut options = config.suggest.options();
    if let Some(limit) = limit {
        options.limit = limit;
    }

    let suggestions = suggest_trainees(p1, p2, &index, options);

    if json {
        println!("{}", serde_json::to_string_pretty(&suggestions)?);
        return Ok(());
    }

    if suggestions.is_empty() {
        println!("No trainee scores above zero with this lineage.");
        return Ok(());
    }

    println!("Top trainees");
    println!("{}", "=".repeat(40));
    for (rank, s) in suggestions.iter().enumerate() {
        let name = super::display_name(s.name.as_deref());
        println!("  #{:<3} {:<28} {} pts", rank + 1, format!("{name} ({})", s.trainee), s.total);
    }
    Ok(())
}
