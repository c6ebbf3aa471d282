pub mod entry;
pub mod habit;
pub mod stats;

pub use entry::{Entry, EntryStatus};
pub use habit::Habit;
pub use stats::HabitStats;
