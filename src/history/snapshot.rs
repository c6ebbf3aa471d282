use log::debug;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::models::Habit;

/// A point-in-time export of every habit and its entries, as produced by the
/// system that owns the records. Loaded read-only; nothing here writes back.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub habits: Vec<Habit>,
}

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("no history snapshot at {0}")]
    NotFound(PathBuf),
    #[error("reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parsing {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub fn load(path: &Path) -> Result<Snapshot, SnapshotError> {
    if !path.exists() {
        return Err(SnapshotError::NotFound(path.to_path_buf()));
    }
    let content = std::fs::read_to_string(path).map_err(|source| SnapshotError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let snapshot: Snapshot =
        serde_json::from_str(&content).map_err(|source| SnapshotError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    debug!(
        "loaded {} habit(s) from {}",
        snapshot.habits.len(),
        path.display()
    );
    Ok(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EntryStatus;
    use std::io::Write;

    fn write_temp(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_habits_with_entries() {
        let file = write_temp(
            r#"{
                "habits": [
                    {
                        "name": "Exercise",
                        "created": "2025-01-01",
                        "entries": [
                            {"date": "2025-01-02", "status": "completed", "note": "morning run"},
                            {"date": "2025-01-03", "status": "skipped"}
                        ]
                    }
                ]
            }"#,
        );

        let snapshot = load(file.path()).unwrap();
        assert_eq!(snapshot.habits.len(), 1);
        let habit = &snapshot.habits[0];
        assert_eq!(habit.name, "Exercise");
        assert!(!habit.archived);
        assert_eq!(habit.entries.len(), 2);
        assert_eq!(habit.entries[0].status, EntryStatus::Completed);
        assert_eq!(habit.entries[0].note.as_deref(), Some("morning run"));
        assert_eq!(habit.entries[1].status, EntryStatus::Skipped);
    }

    #[test]
    fn empty_snapshot_is_valid() {
        let file = write_temp("{}");
        let snapshot = load(file.path()).unwrap();
        assert!(snapshot.habits.is_empty());
    }

    #[test]
    fn missing_file_is_not_found() {
        let err = load(Path::new("/nonexistent/habits.json")).unwrap_err();
        assert!(matches!(err, SnapshotError::NotFound(_)));
    }

    #[test]
    fn bad_date_is_a_parse_error() {
        let file = write_temp(
            r#"{"habits": [{"name": "X", "created": "01/02/2025", "entries": []}]}"#,
        );
        let err = load(file.path()).unwrap_err();
        assert!(matches!(err, SnapshotError::Parse { .. }));
    }

    #[test]
    fn unknown_status_is_a_parse_error() {
        let file = write_temp(
            r#"{"habits": [{"name": "X", "created": "2025-01-01",
                "entries": [{"date": "2025-01-02", "status": "missed"}]}]}"#,
        );
        let err = load(file.path()).unwrap_err();
        assert!(matches!(err, SnapshotError::Parse { .. }));
    }
}
