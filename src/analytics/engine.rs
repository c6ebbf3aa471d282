use chrono::NaiveDate;
use std::collections::{BTreeSet, HashMap};

use crate::models::{Entry, EntryStatus, Habit, HabitStats};

/// Consecutive-day activity count ending at the reference date.
///
/// Walks backward one day at a time: completed days increment the count,
/// skipped days pass through without incrementing, and an unlogged day ends
/// the walk. The one exception is the grace day: while nothing has been
/// counted yet, a single unlogged day is stepped over so a streak built
/// through yesterday is not reported as broken just because today has no
/// entry yet.
pub fn current_streak(entries: &[Entry], reference: NaiveDate) -> u32 {
    let by_date = status_by_date(entries);
    let mut count = 0u32;
    let mut grace_used = false;
    let mut cursor = reference;

    loop {
        match by_date.get(&cursor) {
            Some(EntryStatus::Completed) => count += 1,
            Some(EntryStatus::Skipped) => {}
            None => {
                if count == 0 && !grace_used {
                    grace_used = true;
                } else {
                    break;
                }
            }
        }
        cursor = match cursor.pred_opt() {
            Some(d) => d,
            None => break,
        };
    }

    count
}

/// Longest run of strictly consecutive completed dates across all history.
///
/// Unlike [`current_streak`], skips do not bridge gaps here: the longest
/// streak is a historical fact over completed days only.
pub fn longest_streak(entries: &[Entry]) -> u32 {
    let completed = completed_dates(entries);

    let mut best = 0u32;
    let mut run = 0u32;
    let mut prev: Option<NaiveDate> = None;

    for date in completed {
        run = match prev {
            Some(p) if p.succ_opt() == Some(date) => run + 1,
            _ => 1,
        };
        best = best.max(run);
        prev = Some(date);
    }

    best
}

/// Fraction of eligible days with a completion, as a percentage.
///
/// Eligible days run from the creation date through the reference date,
/// floored at 1. Completions dated outside that window (imported or
/// clock-skewed data) are excluded from the numerator. The result is clamped
/// to 100.0 even if upstream invariants were violated; keep the clamp.
pub fn completion_rate(created: NaiveDate, entries: &[Entry], reference: NaiveDate) -> f64 {
    let eligible_days = ((reference - created).num_days() + 1).max(1);

    let valid: BTreeSet<NaiveDate> = entries
        .iter()
        .filter(|e| e.status == EntryStatus::Completed && e.date >= created && e.date <= reference)
        .map(|e| e.date)
        .collect();

    let rate = (valid.len() as f64 / eligible_days as f64) * 100.0;
    rate.min(100.0)
}

/// Whether a completed entry exists exactly on the given date.
pub fn completed_on(entries: &[Entry], date: NaiveDate) -> bool {
    entries
        .iter()
        .any(|e| e.date == date && e.status == EntryStatus::Completed)
}

/// Evaluate all stats for one habit against a reference date.
pub fn habit_stats(habit: &Habit, reference: NaiveDate) -> HabitStats {
    HabitStats {
        current_streak: current_streak(&habit.entries, reference),
        longest_streak: longest_streak(&habit.entries),
        completion_rate: completion_rate(habit.created, &habit.entries, reference),
        completed_today: completed_on(&habit.entries, reference),
    }
}

// Duplicate dates collapse to one status; a completed entry wins over a
// skipped one for the same day, so duplicates never double count.
fn status_by_date(entries: &[Entry]) -> HashMap<NaiveDate, EntryStatus> {
    let mut map: HashMap<NaiveDate, EntryStatus> = HashMap::with_capacity(entries.len());
    for entry in entries {
        let status = map.entry(entry.date).or_insert(entry.status);
        if entry.status == EntryStatus::Completed {
            *status = EntryStatus::Completed;
        }
    }
    map
}

fn completed_dates(entries: &[Entry]) -> BTreeSet<NaiveDate> {
    entries
        .iter()
        .filter(|e| e.status == EntryStatus::Completed)
        .map(|e| e.date)
        .collect()
}
