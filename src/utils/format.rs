/// Format a percentage, trimming the decimal when it is whole
pub fn format_percent(rate: f64) -> String {
    if rate == rate.floor() {
        format!("{}%", rate as i64)
    } else {
        format!("{:.1}%", rate)
    }
}

/// Format a day count with the right plural
pub fn format_days(days: u32) -> String {
    if days == 1 {
        "1 day".to_string()
    } else {
        format!("{} days", days)
    }
}

/// Create a simple ASCII bar for a completion rate in [0.0, 100.0]
pub fn rate_bar(rate: f64, width: usize) -> String {
    let ratio = (rate / 100.0).clamp(0.0, 1.0);
    let filled = (ratio * width as f64).round() as usize;
    let empty = width.saturating_sub(filled);
    format!("{}{}", "█".repeat(filled), "░".repeat(empty))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_trims_whole_values() {
        assert_eq!(format_percent(50.0), "50%");
        assert_eq!(format_percent(100.0), "100%");
        assert_eq!(format_percent(33.333), "33.3%");
    }

    #[test]
    fn days_pluralize() {
        assert_eq!(format_days(1), "1 day");
        assert_eq!(format_days(0), "0 days");
        assert_eq!(format_days(7), "7 days");
    }

    #[test]
    fn bar_spans_width() {
        assert_eq!(rate_bar(0.0, 4), "░░░░");
        assert_eq!(rate_bar(100.0, 4), "████");
        assert_eq!(rate_bar(50.0, 4), "██░░");
    }
}
