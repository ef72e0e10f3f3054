//! Affinity scoring engine.
//!
//! Pure functions over a [`RelationshipIndex`](crate::index::RelationshipIndex):
//! nothing here performs I/O or mutates its inputs, so one index can be shared
//! by any number of concurrent scoring calls.

pub mod score;
pub mod suggest;
pub mod types;

pub use score::{score_group, score_tree};
pub use suggest::{suggest_trainees, SuggestOptions, Suggestion};
pub use types::{AncestryTree, CharacterId, ParentSlot, Participants, ScoreBreakdown};
