// src/modules/quest/calendar.rs

//! The "resilience log": one entry per calendar day for the last 30 days.

use chrono::{Datelike, Duration, NaiveDate};

use super::Quest;

pub const CALENDAR_SPAN_DAYS: i64 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayStatus {
    Checked,
    Today,
    /// No check-in on a past day after the `missed_after` threshold. This is
    /// a mock; there is no real commitment start date behind it.
    Missed,
    Neutral,
}

impl DayStatus {
    pub fn marker(&self) -> &str {
        match self {
            DayStatus::Checked => "✓",
            DayStatus::Today => "●",
            DayStatus::Missed => "✗",
            DayStatus::Neutral => " ",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub day_name: String,
    pub day_num: u32,
    pub status: DayStatus,
}

pub fn classify(quest: &Quest, date: NaiveDate, today: NaiveDate, missed_after: NaiveDate) -> DayStatus {
    if quest.is_checked_in(date) {
        DayStatus::Checked
    } else if date == today {
        DayStatus::Today
    } else if date > missed_after {
        DayStatus::Missed
    } else {
        DayStatus::Neutral
    }
}

/// Today first, then back one day at a time.
pub fn resilience_log(quest: &Quest, today: NaiveDate, missed_after: NaiveDate) -> Vec<CalendarDay> {
    (0..CALENDAR_SPAN_DAYS)
        .map(|days_ago| {
            let date = today - Duration::days(days_ago);
            CalendarDay {
                date,
                day_name: date.format("%a").to_string(),
                day_num: date.day(),
                status: classify(quest, date, today, missed_after),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::quest::QuestRole;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    fn threshold() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
    }

    #[test]
    fn test_log_spans_thirty_days_from_today() {
        let log = resilience_log(&Quest::seeded(today()), today(), threshold());

        assert_eq!(log.len(), 30);
        assert_eq!(log[0].date, today());
        assert_eq!(log[0].day_name, "Fri");
        assert_eq!(log[0].day_num, 16);
        assert_eq!(log[29].date, today() - Duration::days(29));
    }

    #[test]
    fn test_seeded_history_classification() {
        let log = resilience_log(&Quest::seeded(today()), today(), threshold());

        assert_eq!(log[0].status, DayStatus::Today);
        assert_eq!(log[1].status, DayStatus::Checked);
        assert_eq!(log[7].status, DayStatus::Missed);
        assert_eq!(log[14].status, DayStatus::Missed);
        let checked = log.iter().filter(|d| d.status == DayStatus::Checked).count();
        assert_eq!(checked, 12);
    }

    #[test]
    fn test_checked_wins_over_today() {
        let mut quest = Quest::seeded(today());
        quest.checked_in_days.insert(today());

        assert_eq!(classify(&quest, today(), today(), threshold()), DayStatus::Checked);
    }

    #[test]
    fn test_days_before_threshold_are_neutral() {
        let quest = Quest::new("Gym".to_string(), 30, 100.0, QuestRole::Owner, None);
        let yesterday = today() - Duration::days(1);

        assert_eq!(classify(&quest, yesterday, today(), today()), DayStatus::Neutral);
        assert_eq!(classify(&quest, threshold(), today(), threshold()), DayStatus::Neutral);
    }
}
