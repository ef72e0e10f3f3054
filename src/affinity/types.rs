//! Value types for affinity scoring.
//!
//! Defines [`Participants`] (the 2- or 3-character input of a group score),
//! [`ParentSlot`] and [`AncestryTree`] (one scoring query), and
//! [`ScoreBreakdown`] (the auditable result of scoring a tree).

use serde::Serialize;
use std::collections::BTreeSet;

/// Base character identifier (shared by every outfit of the same character).
pub type CharacterId = u32;

/// Identifier of a relationship group.
pub type RelationGroup = u32;

/// Point value of a single relationship group.
pub type Points = u32;

/// An affinity score. Always the sum of non-negative group points.
pub type Score = u64;

/// Placeholder name for a slot that holds an id missing from the directory.
pub const UNKNOWN_NAME: &str = "Unknown";

/// Placeholder label for an empty slot.
pub const NOT_APPLICABLE: &str = "N/A";

/// The characters taking part in one group-affinity term.
///
/// `None` marks an empty tree slot. Arity is fixed by the variant, so callers
/// can never pass fewer than two or more than three slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Participants {
    Pair([Option<CharacterId>; 2]),
    Triple([Option<CharacterId>; 3]),
}

impl Participants {
    /// Two present characters.
    pub fn pair(a: CharacterId, b: CharacterId) -> Self {
        Self::Pair([Some(a), Some(b)])
    }

    /// Trainee, parent and a possibly empty grandparent slot.
    pub fn triple(a: CharacterId, b: CharacterId, c: Option<CharacterId>) -> Self {
        Self::Triple([Some(a), Some(b), c])
    }

    /// All slots, including empty ones.
    pub fn slots(&self) -> &[Option<CharacterId>] {
        match self {
            Self::Pair(ids) => ids,
            Self::Triple(ids) => ids,
        }
    }

    /// Build from a loose id list. Returns `None` unless it holds 2 or 3 ids.
    pub fn from_ids(ids: &[CharacterId]) -> Option<Self> {
        match *ids {
            [a, b] => Some(Self::pair(a, b)),
            [a, b, c] => Some(Self::triple(a, b, Some(c))),
            _ => None,
        }
    }
}

/// One parent and its two (optional) grandparents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ParentSlot {
    pub parent: CharacterId,
    pub grandparents: [Option<CharacterId>; 2],
}

impl ParentSlot {
    pub fn new(parent: CharacterId, gp1: Option<CharacterId>, gp2: Option<CharacterId>) -> Self {
        Self {
            parent,
            grandparents: [gp1, gp2],
        }
    }

    /// A parent with both grandparent slots empty.
    pub fn bare(parent: CharacterId) -> Self {
        Self::new(parent, None, None)
    }
}

/// Input of one scoring run: a trainee and its two parent slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AncestryTree {
    pub trainee: CharacterId,
    pub p1: ParentSlot,
    pub p2: ParentSlot,
}

impl AncestryTree {
    pub fn new(trainee: CharacterId, p1: ParentSlot, p2: ParentSlot) -> Self {
        Self { trainee, p1, p2 }
    }

    /// Every present parent and grandparent id (the trainee is not included).
    pub fn lineage_ids(&self) -> BTreeSet<CharacterId> {
        lineage_ids(&self.p1, &self.p2)
    }
}

/// Every present id in a two-parent lineage.
pub fn lineage_ids(p1: &ParentSlot, p2: &ParentSlot) -> BTreeSet<CharacterId> {
    [p1, p2]
        .into_iter()
        .flat_map(|slot| {
            std::iter::once(slot.parent).chain(slot.grandparents.iter().flatten().copied())
        })
        .collect()
}

/// Display label for one tree position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotLabel {
    /// `None` when the slot was empty.
    pub id: Option<CharacterId>,
    pub name: String,
}

impl std::fmt::Display for SlotLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.id {
            Some(id) => write!(f, "{} ({id})", self.name),
            None => f.write_str(&self.name),
        }
    }
}

/// Labels for all seven tree positions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeLabels {
    pub trainee: SlotLabel,
    pub p1: SlotLabel,
    pub p1_gp1: SlotLabel,
    pub p1_gp2: SlotLabel,
    pub p2: SlotLabel,
    pub p2_gp1: SlotLabel,
    pub p2_gp2: SlotLabel,
}

/// Every term of a tree score plus the derived subtotals and total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TreeScores {
    pub trainee_p1: Score,
    pub p1_gp1: Score,
    pub p1_gp2: Score,
    pub p1_total: Score,
    pub trainee_p2: Score,
    pub p2_gp1: Score,
    pub p2_gp2: Score,
    pub p2_total: Score,
    pub cross_parent: Score,
    pub total: Score,
}

impl TreeScores {
    /// Derive subtotals and the grand total from the seven computed terms.
    pub fn from_terms(
        trainee_p1: Score,
        trainee_p2: Score,
        cross_parent: Score,
        p1_gp1: Score,
        p1_gp2: Score,
        p2_gp1: Score,
        p2_gp2: Score,
    ) -> Self {
        let p1_total = trainee_p1 + p1_gp1 + p1_gp2;
        let p2_total = trainee_p2 + p2_gp1 + p2_gp2;
        Self {
            trainee_p1,
            p1_gp1,
            p1_gp2,
            p1_total,
            trainee_p2,
            p2_gp1,
            p2_gp2,
            p2_total,
            cross_parent,
            total: p1_total + p2_total + cross_parent,
        }
    }
}

/// Result of scoring one [`AncestryTree`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreBreakdown {
    pub labels: TreeLabels,
    pub scores: TreeScores,
}

impl ScoreBreakdown {
    pub fn total(&self) -> Score {
        self.scores.total
    }
}
