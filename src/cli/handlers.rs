use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use log::debug;
use serde::Serialize;
use std::collections::HashMap;
use std::path::PathBuf;

use crate::analytics::habit_stats;
use crate::config::AppConfig;
use crate::history::{Snapshot, snapshot};
use crate::models::{Habit, HabitStats};
use crate::utils::format::{format_days, format_percent, rate_bar};

// ─── ANSI helpers ────────────────────────────────────────────────────────────

macro_rules! println_colored {
    ($color:expr, $($arg:tt)*) => {{
        print!("{}", $color);
        print!($($arg)*);
        println!("\x1b[0m");
    }};
}

const GREEN: &str = "\x1b[32m";
const AMBER: &str = "\x1b[33m";
const DIM: &str = "\x1b[2m";
const BOLD: &str = "\x1b[1m";
const GOLD: &str = "\x1b[38;2;196;160;68m";

// ─── Shared resolution ───────────────────────────────────────────────────────

/// The reference date is fixed here, at the outermost boundary. Everything
/// below takes it as a parameter so results are reproducible for any date.
fn resolve_reference(as_of: Option<&str>) -> Result<NaiveDate> {
    match as_of {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .with_context(|| format!("Invalid --as-of date '{}', expected YYYY-MM-DD", s)),
        None => Ok(Local::now().date_naive()),
    }
}

fn resolve_snapshot(config: &AppConfig, file: Option<PathBuf>) -> Result<Snapshot> {
    let path = match file {
        Some(p) => p,
        None => config.history_path()?,
    };
    debug!("using history snapshot {}", path.display());
    Ok(snapshot::load(&path)?)
}

fn visible_habits(snapshot: &Snapshot, all: bool) -> Vec<&Habit> {
    snapshot
        .habits
        .iter()
        .filter(|h| all || !h.archived)
        .collect()
}

// ─── Stats ───────────────────────────────────────────────────────────────────

pub fn handle_stats(
    config: &AppConfig,
    file: Option<PathBuf>,
    as_of: Option<&str>,
    all: bool,
) -> Result<()> {
    let reference = resolve_reference(as_of)?;
    let snapshot = resolve_snapshot(config, file)?;
    let habits = visible_habits(&snapshot, all);

    println!();
    println_colored!(GOLD, "  Habit Statistics — {}", reference.format("%Y-%m-%d"));
    println!();

    if habits.is_empty() {
        println_colored!(DIM, "  No habits to show.");
        println!();
        return Ok(());
    }

    let bar_width = config.display.bar_width;
    for habit in habits {
        let stats = habit_stats(habit, reference);

        let marker = if stats.completed_today {
            format!("{}✓\x1b[0m", GREEN)
        } else {
            format!("{}·\x1b[0m", DIM)
        };
        let archived_tag = if habit.archived { " (archived)" } else { "" };
        println_colored!(BOLD, "  {} {}{}", marker, habit.name, archived_tag);

        if let Some(desc) = &habit.description {
            println_colored!(DIM, "      {}", desc);
        }
        println!(
            "      Streak:  {} current  |  {} best",
            format_days(stats.current_streak),
            format_days(stats.longest_streak)
        );
        println!(
            "      Rate:    {} {}",
            rate_bar(stats.completion_rate, bar_width),
            format_percent(stats.completion_rate)
        );
        println!();
    }

    Ok(())
}

// ─── Export ──────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct StatsReport<'a> {
    name: &'a str,
    #[serde(flatten)]
    stats: HabitStats,
}

pub fn handle_export(
    config: &AppConfig,
    file: Option<PathBuf>,
    as_of: Option<&str>,
    all: bool,
) -> Result<()> {
    let reference = resolve_reference(as_of)?;
    let snapshot = resolve_snapshot(config, file)?;

    let reports: Vec<StatsReport> = visible_habits(&snapshot, all)
        .into_iter()
        .map(|habit| StatsReport {
            name: &habit.name,
            stats: habit_stats(habit, reference),
        })
        .collect();

    let json = serde_json::to_string_pretty(&reports).context("Serializing stats report")?;
    println!("{}", json);
    Ok(())
}

// ─── Check ───────────────────────────────────────────────────────────────────

/// Surface upstream-invariant violations the analytics code resolves
/// silently: duplicate dates, entries before creation, entries in the future.
pub fn handle_check(config: &AppConfig, file: Option<PathBuf>, as_of: Option<&str>) -> Result<()> {
    let reference = resolve_reference(as_of)?;
    let snapshot = resolve_snapshot(config, file)?;

    println!();
    if snapshot.habits.is_empty() {
        println_colored!(DIM, "  Snapshot contains no habits.");
        println!();
        return Ok(());
    }

    let mut problems = 0usize;
    for habit in &snapshot.habits {
        for warning in check_habit(habit, reference) {
            println_colored!(AMBER, "  {}: {}", habit.name, warning);
            problems += 1;
        }
    }

    if problems == 0 {
        println_colored!(GREEN, "  {} habit(s), no problems found ✓", snapshot.habits.len());
    } else {
        println_colored!(
            DIM,
            "  {} problem(s). Stats stay well-defined; duplicates count once and out-of-range entries are ignored.",
            problems
        );
    }
    println!();
    Ok(())
}

fn check_habit(habit: &Habit, reference: NaiveDate) -> Vec<String> {
    let mut warnings = Vec::new();

    let mut per_date: HashMap<NaiveDate, usize> = HashMap::new();
    for entry in &habit.entries {
        *per_date.entry(entry.date).or_default() += 1;
    }
    let mut duplicated: Vec<NaiveDate> = per_date
        .into_iter()
        .filter(|(_, n)| *n > 1)
        .map(|(d, _)| d)
        .collect();
    duplicated.sort();
    for date in duplicated {
        warnings.push(format!("more than one entry on {}", date));
    }

    let pre_creation = habit.entries.iter().filter(|e| e.date < habit.created).count();
    if pre_creation > 0 {
        warnings.push(format!(
            "{} entr{} dated before creation ({})",
            pre_creation,
            if pre_creation == 1 { "y" } else { "ies" },
            habit.created
        ));
    }

    let future = habit.entries.iter().filter(|e| e.date > reference).count();
    if future > 0 {
        warnings.push(format!(
            "{} entr{} dated after {}",
            future,
            if future == 1 { "y" } else { "ies" },
            reference
        ));
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Entry;

    fn jan(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, d).unwrap()
    }

    #[test]
    fn reference_parses_or_defaults() {
        assert_eq!(resolve_reference(Some("2025-01-10")).unwrap(), jan(10));
        assert!(resolve_reference(Some("10/01/2025")).is_err());
        assert!(resolve_reference(None).is_ok());
    }

    #[test]
    fn clean_habit_has_no_warnings() {
        let mut habit = Habit::new("Read", jan(1));
        habit.entries = vec![Entry::completed(jan(2)), Entry::skipped(jan(3))];
        assert!(check_habit(&habit, jan(10)).is_empty());
    }

    #[test]
    fn check_flags_duplicates_and_out_of_range_entries() {
        let mut habit = Habit::new("Read", jan(5));
        habit.entries = vec![
            Entry::completed(jan(6)),
            Entry::completed(jan(6)),
            Entry::completed(jan(2)),
            Entry::completed(jan(20)),
        ];
        let warnings = check_habit(&habit, jan(10));
        assert_eq!(warnings.len(), 3);
    }

    #[test]
    fn archived_habits_hidden_unless_requested() {
        let mut archived = Habit::new("Old", jan(1));
        archived.archived = true;
        let snapshot = Snapshot {
            habits: vec![Habit::new("Live", jan(1)), archived],
        };
        assert_eq!(visible_habits(&snapshot, false).len(), 1);
        assert_eq!(visible_habits(&snapshot, true).len(), 2);
    }
}
