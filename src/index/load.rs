//! Loading a [`RelationshipIndex`] from its JSON document.
//!
//! The document has three optional top-level objects keyed by numeric strings:
//!
//! ```json
//! {
//!   "relation_points": { "10": 100 },
//!   "chara_relations": { "1001": [10, 20] },
//!   "chara_map": { "1001": "Special Week" }
//! }
//! ```

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

use super::RelationshipIndex;

/// Failure to produce an index. Scoring never starts without one.
#[derive(Debug, Error)]
pub enum IndexError {
    #[error("relationship data not found: {}", path.display())]
    Missing { path: PathBuf },

    #[error("failed to read relationship data {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse relationship data {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Parse an index from a JSON string.
pub fn parse_index(json: &str) -> Result<RelationshipIndex, serde_json::Error> {
    serde_json::from_str(json)
}

/// Load one index file.
pub fn load_index(path: impl AsRef<Path>) -> Result<RelationshipIndex, IndexError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(IndexError::Missing {
            path: path.to_path_buf(),
        });
    }

    let json = std::fs::read_to_string(path).map_err(|source| IndexError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let index = parse_index(&json).map_err(|source| IndexError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let stats = index.stats();
    info!(
        path = %path.display(),
        groups = stats.groups,
        characters = stats.characters,
        names = stats.named_characters,
        "relationship index loaded"
    );
    Ok(index)
}

/// Load a base index and, if given, overlay a second region on top of it.
///
/// The base must exist. A missing overlay is skipped with a warning; any other
/// overlay failure is returned.
pub fn load_with_overlay(
    base: impl AsRef<Path>,
    overlay: Option<&Path>,
) -> Result<RelationshipIndex, IndexError> {
    let index = load_index(base)?;
    let Some(overlay) = overlay else {
        return Ok(index);
    };

    match load_index(overlay) {
        Ok(extra) => Ok(index.merge(extra)),
        Err(IndexError::Missing { path }) => {
            warn!(path = %path.display(), "overlay not found, using base data only");
            Ok(index)
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_string_keys_as_ids() {
        let index = parse_index(
            r#"{
                "relation_points": {"10": 100, "20": 50},
                "chara_relations": {"1": [10, 20], "2": [10]},
                "chara_map": {"1": "Special Week"}
            }"#,
        )
        .unwrap();
        assert_eq!(index.points_of(20), 50);
        assert!(index.groups_of(2).unwrap().contains(&10));
        assert_eq!(index.name_of(1), Some("Special Week"));
    }

    #[test]
    fn missing_sections_default_to_empty() {
        let index = parse_index(r#"{"relation_points": {"10": 5}}"#).unwrap();
        assert_eq!(index.stats().characters, 0);
        assert_eq!(index.points_of(10), 5);
    }

    #[test]
    fn rejects_negative_points() {
        assert!(parse_index(r#"{"relation_points": {"10": -5}}"#).is_err());
    }

    #[test]
    fn rejects_non_numeric_ids() {
        assert!(parse_index(r#"{"chara_map": {"abc": "Nobody"}}"#).is_err());
    }

    #[test]
    fn missing_file_is_reported() {
        let err = load_index("/nonexistent/affinity.json").unwrap_err();
        assert!(matches!(err, IndexError::Missing { .. }));
        assert!(err.to_string().contains("not found"));
    }
}
