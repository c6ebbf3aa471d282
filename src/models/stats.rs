use serde::{Deserialize, Serialize};

/// The scalar results computed for one habit against a reference date.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HabitStats {
    /// Consecutive-day activity count ending at (or one grace day before)
    /// the reference date.
    pub current_streak: u32,
    /// Longest run of strictly consecutive completed dates in all history.
    pub longest_streak: u32,
    /// Percentage of eligible days with a completion, in [0.0, 100.0].
    pub completion_rate: f64,
    /// Whether a completed entry exists exactly on the reference date.
    pub completed_today: bool,
}
