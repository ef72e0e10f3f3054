//! CLI subcommand implementations. Reports go to stdout, logs to stderr.

pub mod doctor;
pub mod group;
pub mod inspect;
pub mod score;
pub mod search;
pub mod stats;
pub mod suggest;

use anyhow::{Context, Result};

use crate::config::AffinityConfig;
use crate::index::{self, RelationshipIndex};

/// Load the configured base data plus overlay, if any.
pub fn load_index(config: &AffinityConfig) -> Result<RelationshipIndex> {
    let base = config.resolved_data_path();
    let overlay = config.resolved_overlay_path();
    index::load_with_overlay(&base, overlay.as_deref())
        .with_context(|| format!("could not load relationship data from {}", base.display()))
}

/// Render an optional display name for terminal output.
pub(crate) fn display_name(name: Option<&str>) -> &str {
    name.unwrap_or(crate::affinity::types::UNKNOWN_NAME)
}
