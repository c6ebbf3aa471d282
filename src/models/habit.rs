use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::Entry;

/// Read-only view of one habit as loaded from a history snapshot. The
/// analytics code never mutates it; ownership of the real records stays with
/// whatever produced the snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Habit {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Calendar date the habit came into existence. Entries dated before this
    /// are ignored for completion-rate accounting.
    pub created: NaiveDate,
    #[serde(default)]
    pub archived: bool,
    #[serde(default)]
    pub entries: Vec<Entry>,
}

impl Habit {
    pub fn new(name: impl Into<String>, created: NaiveDate) -> Self {
        Self {
            name: name.into(),
            description: None,
            created,
            archived: false,
            entries: Vec::new(),
        }
    }
}
