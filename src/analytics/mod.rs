pub mod engine;

pub use engine::{completed_on, completion_rate, current_streak, habit_stats, longest_streak};
