#![allow(dead_code)]
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryStatus {
    Completed,
    Skipped,
}

impl EntryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryStatus::Completed => "completed",
            EntryStatus::Skipped => "skipped",
        }
    }
}

impl std::fmt::Display for EntryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for EntryStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "completed" | "complete" | "done" => Ok(EntryStatus::Completed),
            "skipped" | "skip" => Ok(EntryStatus::Skipped),
            _ => Err(anyhow::anyhow!("Unknown entry status: {}", s)),
        }
    }
}

/// One calendar-day record for a habit. The upstream store keeps at most one
/// entry per habit per date; the analytics code still copes if it does not.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entry {
    pub date: NaiveDate,
    pub status: EntryStatus,
    /// Free-text note on a completion, or the reason given for a skip.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Entry {
    pub fn completed(date: NaiveDate) -> Self {
        Self {
            date,
            status: EntryStatus::Completed,
            note: None,
        }
    }

    pub fn skipped(date: NaiveDate) -> Self {
        Self {
            date,
            status: EntryStatus::Skipped,
            note: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parses_common_spellings() {
        assert_eq!("completed".parse::<EntryStatus>().unwrap(), EntryStatus::Completed);
        assert_eq!("Done".parse::<EntryStatus>().unwrap(), EntryStatus::Completed);
        assert_eq!("skip".parse::<EntryStatus>().unwrap(), EntryStatus::Skipped);
        assert!("missed".parse::<EntryStatus>().is_err());
    }

    #[test]
    fn status_serializes_lowercase() {
        let json = serde_json::to_string(&EntryStatus::Skipped).unwrap();
        assert_eq!(json, "\"skipped\"");
    }
}
