//! Group and tree affinity scoring.
//!
//! [`score_group`] scores one pair or triple by intersecting the members'
//! relationship groups and summing the points of the shared groups.
//! [`score_tree`] applies it to the seven terms of an [`AncestryTree`].

use std::collections::BTreeSet;

use super::types::{
    AncestryTree, CharacterId, Participants, RelationGroup, ScoreBreakdown, Score, SlotLabel,
    TreeLabels, TreeScores, NOT_APPLICABLE, UNKNOWN_NAME,
};
use crate::index::RelationshipIndex;

/// Score the groups shared by every participant.
///
/// Empty slots and characters unknown to the index are dropped first. The
/// score is 0 when fewer than two participants remain, or when any two of the
/// remaining participants are the same character.
pub fn score_group(participants: &Participants, index: &RelationshipIndex) -> Score {
    let resolved: Vec<(CharacterId, &BTreeSet<RelationGroup>)> = participants
        .slots()
        .iter()
        .flatten()
        .filter_map(|id| index.groups_of(*id).map(|groups| (*id, groups)))
        .collect();

    if resolved.len() < 2 || has_duplicate(&resolved) {
        return 0;
    }
    let Some(((_, first), rest)) = resolved.split_first() else {
        return 0;
    };

    first
        .iter()
        .filter(|group| rest.iter().all(|(_, groups)| groups.contains(*group)))
        .map(|group| Score::from(index.points_of(*group)))
        .sum()
}

fn has_duplicate(resolved: &[(CharacterId, &BTreeSet<RelationGroup>)]) -> bool {
    resolved
        .iter()
        .enumerate()
        .any(|(i, (a, _))| resolved[i + 1..].iter().any(|(b, _)| a == b))
}

/// Score every term of a tree and assemble the breakdown.
pub fn score_tree(tree: &AncestryTree, index: &RelationshipIndex) -> ScoreBreakdown {
    let t = tree.trainee;
    let (p1, p2) = (tree.p1.parent, tree.p2.parent);
    let [p1_gp1, p1_gp2] = tree.p1.grandparents;
    let [p2_gp1, p2_gp2] = tree.p2.grandparents;

    let score = |participants: Participants| score_group(&participants, index);

    let scores = TreeScores::from_terms(
        score(Participants::pair(t, p1)),
        score(Participants::pair(t, p2)),
        score(Participants::pair(p1, p2)),
        score(Participants::triple(t, p1, p1_gp1)),
        score(Participants::triple(t, p1, p1_gp2)),
        score(Participants::triple(t, p2, p2_gp1)),
        score(Participants::triple(t, p2, p2_gp2)),
    );

    tracing::debug!(
        trainee = t,
        p1,
        p2,
        p1_total = scores.p1_total,
        p2_total = scores.p2_total,
        cross_parent = scores.cross_parent,
        total = scores.total,
        "scored ancestry tree"
    );

    let label = |id: Option<CharacterId>| label_for(id, index);
    ScoreBreakdown {
        labels: TreeLabels {
            trainee: label(Some(t)),
            p1: label(Some(p1)),
            p1_gp1: label(p1_gp1),
            p1_gp2: label(p1_gp2),
            p2: label(Some(p2)),
            p2_gp1: label(p2_gp1),
            p2_gp2: label(p2_gp2),
        },
        scores,
    }
}

fn label_for(id: Option<CharacterId>, index: &RelationshipIndex) -> SlotLabel {
    let name = match id {
        Some(id) => index.name_of(id).unwrap_or(UNKNOWN_NAME),
        None => NOT_APPLICABLE,
    };
    SlotLabel {
        id,
        name: name.to_string(),
    }
}
