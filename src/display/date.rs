//! Relative date labels
//!
//! Due dates and paid dates read better as "Tomorrow" or "In 2 weeks" than
//! as raw dates.

use chrono::NaiveDate;

/// Human-friendly label for `date` relative to `today`
pub fn relative_date_label(date: NaiveDate, today: NaiveDate) -> String {
    let diff_days = (date - today).num_days();

    match diff_days {
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        2..=6 => format!("In {} days", diff_days),
        d if d >= 7 => format!("In {}", weeks(d)),
        -1 => "Yesterday".to_string(),
        -6..=-2 => format!("{} days ago", -diff_days),
        d => format!("{} ago", weeks(-d)),
    }
}

fn weeks(days: i64) -> String {
    let weeks = days / 7;
    if weeks == 1 {
        "1 week".to_string()
    } else {
        format!("{} weeks", weeks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 7, 15).unwrap()
    }

    fn label(offset: i64) -> String {
        relative_date_label(today() + Duration::days(offset), today())
    }

    #[test]
    fn test_near_labels() {
        assert_eq!(label(0), "Today");
        assert_eq!(label(1), "Tomorrow");
        assert_eq!(label(-1), "Yesterday");
    }

    #[test]
    fn test_future_labels() {
        assert_eq!(label(3), "In 3 days");
        assert_eq!(label(7), "In 1 week");
        assert_eq!(label(13), "In 1 week");
        assert_eq!(label(21), "In 3 weeks");
    }

    #[test]
    fn test_past_labels() {
        assert_eq!(label(-4), "4 days ago");
        assert_eq!(label(-7), "1 week ago");
        assert_eq!(label(-15), "2 weeks ago");
    }
}
