use anyhow::{bail, Result};

use crate::affinity::types::CharacterId;
use crate::affinity::{score_group, Participants};
use crate::config::AffinityConfig;

/// Print the shared-group score for 2 or 3 characters.
pub fn group(config: &AffinityConfig, ids: &[CharacterId]) -> Result<()> {
    let Some(participants) = Participants::from_ids(ids) else {
        bail!("expected 2 or 3 character ids, got {}", ids.len());
    };
    let index = super::load_index(config)?;

    for id in ids {
        let name = super::display_name(index.name_of(*id));
        let status = if index.contains(*id) { "" } else { "  (no relation data)" };
        println!("  {name} ({id}){status}");
    }
    println!("Affinity: {}", score_group(&participants, &index));
    Ok(())
}
