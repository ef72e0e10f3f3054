//! Pedigree affinity calculator.
//!
//! Scores how well a trainee fits its parents and grandparents. Every character
//! belongs to a set of relationship groups, each worth some points; an affinity
//! term is the sum of the points of the groups that all of its participants
//! share. A tree is scored as seven terms:
//!
//! | Term | Participants |
//! |------|--------------|
//! | trainee–P1 | trainee, parent 1 |
//! | trainee–P2 | trainee, parent 2 |
//! | cross-parent | parent 1, parent 2 |
//! | P1-GP1, P1-GP2 | trainee, parent 1, one of its grandparents |
//! | P2-GP1, P2-GP2 | trainee, parent 2, one of its grandparents |
//!
//! Empty slots and unknown characters are skipped, and a term in which the
//! same character appears twice scores 0. Bonuses from mutual race wins are
//! not part of the score.
//!
//! # Modules
//!
//! - [`config`] — Configuration loading from TOML files and environment variables
//! - [`index`] — The relationship lookup tables and their JSON loader
//! - [`affinity`] — Group and tree scoring, plus trainee suggestions

pub mod affinity;
pub mod cli;
pub mod config;
pub mod index;
