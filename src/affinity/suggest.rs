//! Rank candidate trainees for a fixed two-parent lineage.

use rayon::prelude::*;
use serde::Serialize;

use super::score::score_tree;
use super::types::{lineage_ids, AncestryTree, CharacterId, ParentSlot, Score};
use crate::index::RelationshipIndex;

/// Limits applied to a suggestion search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuggestOptions {
    /// Maximum number of suggestions returned.
    pub limit: usize,
    /// Minimum grand total a candidate needs. Zero totals are always dropped.
    pub min_score: Score,
}

impl Default for SuggestOptions {
    fn default() -> Self {
        Self {
            limit: 10,
            min_score: 1,
        }
    }
}

/// One ranked trainee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub trainee: CharacterId,
    pub name: Option<String>,
    pub total: Score,
}

/// Score every known character as the trainee of `p1` and `p2`.
///
/// Characters already in the lineage are skipped. Results are ordered by total
/// (highest first), then by id.
pub fn suggest_trainees(
    p1: &ParentSlot,
    p2: &ParentSlot,
    index: &RelationshipIndex,
    options: SuggestOptions,
) -> Vec<Suggestion> {
    let lineage = lineage_ids(p1, p2);
    let min_score = options.min_score.max(1);

    let mut ranked: Vec<Suggestion> = index
        .characters()
        .into_par_iter()
        .filter(|id| !lineage.contains(id))
        .filter_map(|trainee| {
            let total = score_tree(&AncestryTree::new(trainee, *p1, *p2), index).total();
            (total >= min_score).then(|| Suggestion {
                trainee,
                name: index.name_of(trainee).map(str::to_string),
                total,
            })
        })
        .collect();

    ranked.sort_unstable_by(|a, b| b.total.cmp(&a.total).then(a.trainee.cmp(&b.trainee)));
    let candidates = ranked.len();
    ranked.truncate(options.limit);

    tracing::debug!(
        p1 = p1.parent,
        p2 = p2.parent,
        candidates,
        returned = ranked.len(),
        "ranked trainee suggestions"
    );
    ranked
}
