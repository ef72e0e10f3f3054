//! Read-only relationship lookup tables consumed by the scoring engine.
//!
//! A [`RelationshipIndex`] holds three maps: group points, per-character group
//! sets, and the display-name directory. It is built in memory with
//! [`RelationshipIndex::new`] or read from disk via [`load`].

pub mod load;

pub use load::{load_index, load_with_overlay, IndexError};

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

use crate::affinity::types::{CharacterId, Points, RelationGroup};

/// Immutable lookup tables for one data region.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RelationshipIndex {
    relation_points: HashMap<RelationGroup, Points>,
    chara_relations: HashMap<CharacterId, BTreeSet<RelationGroup>>,
    chara_map: HashMap<CharacterId, String>,
}

/// Summary counts for an index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexStats {
    pub groups: usize,
    pub characters: usize,
    pub named_characters: usize,
    pub total_points: u64,
}

/// Data problems that do not prevent scoring but silently zero some terms.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConsistencyReport {
    /// Characters with relations but no directory entry.
    pub unnamed_characters: Vec<CharacterId>,
    /// Groups used by some character but missing from the point table (score 0).
    pub unpriced_groups: Vec<RelationGroup>,
    /// Groups with points that no character belongs to.
    pub unused_groups: Vec<RelationGroup>,
    /// Characters whose group set is empty.
    pub characters_without_groups: Vec<CharacterId>,
}

impl ConsistencyReport {
    pub fn is_clean(&self) -> bool {
        self.unnamed_characters.is_empty()
            && self.unpriced_groups.is_empty()
            && self.unused_groups.is_empty()
            && self.characters_without_groups.is_empty()
    }
}

impl RelationshipIndex {
    pub fn new(
        relation_points: HashMap<RelationGroup, Points>,
        chara_relations: HashMap<CharacterId, BTreeSet<RelationGroup>>,
        chara_map: HashMap<CharacterId, String>,
    ) -> Self {
        Self {
            relation_points,
            chara_relations,
            chara_map,
        }
    }

    /// Group set of a character, or `None` if the character is unknown.
    pub fn groups_of(&self, id: CharacterId) -> Option<&BTreeSet<RelationGroup>> {
        self.chara_relations.get(&id)
    }

    /// Point value of a group. Unknown groups are worth 0.
    pub fn points_of(&self, group: RelationGroup) -> Points {
        self.relation_points.get(&group).copied().unwrap_or(0)
    }

    pub fn name_of(&self, id: CharacterId) -> Option<&str> {
        self.chara_map.get(&id).map(String::as_str)
    }

    /// Whether the character has a relation entry (and can therefore score).
    pub fn contains(&self, id: CharacterId) -> bool {
        self.chara_relations.contains_key(&id)
    }

    /// All characters with a relation entry, sorted by id.
    pub fn characters(&self) -> Vec<CharacterId> {
        let mut ids: Vec<_> = self.chara_relations.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Case-insensitive substring search over display names, sorted by id.
    pub fn find_by_name(&self, term: &str) -> Vec<(CharacterId, &str)> {
        let needle = term.to_lowercase();
        let mut hits: Vec<_> = self
            .chara_map
            .iter()
            .filter(|(_, name)| name.to_lowercase().contains(&needle))
            .map(|(id, name)| (*id, name.as_str()))
            .collect();
        hits.sort_unstable_by_key(|(id, _)| *id);
        hits
    }

    /// Overlay another region's tables on top of this one.
    ///
    /// Entries from `overlay` replace entries with the same key; a character's
    /// group set is replaced as a whole, never unioned.
    pub fn merge(mut self, overlay: RelationshipIndex) -> Self {
        self.relation_points.extend(overlay.relation_points);
        self.chara_relations.extend(overlay.chara_relations);
        self.chara_map.extend(overlay.chara_map);
        self
    }

    pub fn stats(&self) -> IndexStats {
        IndexStats {
            groups: self.relation_points.len(),
            characters: self.chara_relations.len(),
            named_characters: self.chara_map.len(),
            total_points: self.relation_points.values().map(|p| u64::from(*p)).sum(),
        }
    }

    /// Cross-check the three tables against each other.
    pub fn check(&self) -> ConsistencyReport {
        let referenced: BTreeSet<RelationGroup> =
            self.chara_relations.values().flatten().copied().collect();

        let mut report = ConsistencyReport {
            unnamed_characters: self
                .chara_relations
                .keys()
                .filter(|id| !self.chara_map.contains_key(*id))
                .copied()
                .collect(),
            unpriced_groups: referenced
                .iter()
                .filter(|g| !self.relation_points.contains_key(*g))
                .copied()
                .collect(),
            unused_groups: self
                .relation_points
                .keys()
                .filter(|g| !referenced.contains(*g))
                .copied()
                .collect(),
            characters_without_groups: self
                .chara_relations
                .iter()
                .filter(|(_, groups)| groups.is_empty())
                .map(|(id, _)| *id)
                .collect(),
        };
        report.unnamed_characters.sort_unstable();
        report.unused_groups.sort_unstable();
        report.characters_without_groups.sort_unstable();
        report
    }
}
