// src/modules/quest/mod.rs

pub mod state;
pub mod progress;
pub mod calendar;
pub mod form;

pub use state::{QuestEvent, QuestIntent, QuestState, QuestStateMachine};

use std::collections::BTreeSet;

use chrono::{Duration, NaiveDate};

/// Amount added to the bounty for every recorded penalty.
pub const PENALTY_AMOUNT: f64 = 10.0;

/// Display label stamped on freshly recorded penalties.
pub const PENALTY_DATE_LABEL: &str = "Just now";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestRole {
    Owner,      // Checks in daily
    Supporter,  // Funds and watches someone else's quest
}

impl QuestRole {
    pub fn from_for_self(for_self: bool) -> Self {
        if for_self { QuestRole::Owner } else { QuestRole::Supporter }
    }
}

/// The single active commitment.
///
/// The check-in count is not stored: [`Quest::day`] is the size of
/// `checked_in_days`, so the two can never disagree.
#[derive(Debug, Clone, PartialEq)]
pub struct Quest {
    pub habit_name: String,
    pub target_days: u32,
    pub bounty: f64,
    pub role: QuestRole,
    pub target_user: Option<String>,
    pub checked_in_days: BTreeSet<NaiveDate>,
}

/// What the centre button of the navigation bar does right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainAction {
    Check,
    Done,
    Create,
}

impl MainAction {
    pub fn label(&self) -> &str {
        match self {
            MainAction::Check => "CHECK",
            MainAction::Done => "DONE",
            MainAction::Create => "CREATE",
        }
    }
}

impl Quest {
    pub fn new(
        habit_name: String,
        target_days: u32,
        bounty: f64,
        role: QuestRole,
        target_user: Option<String>,
    ) -> Self {
        Self {
            habit_name,
            target_days,
            bounty,
            role,
            target_user,
            checked_in_days: BTreeSet::new(),
        }
    }

    /// The demo quest the app opens with: twelve check-ins over the last two
    /// weeks, with a gap a week ago.
    pub fn seeded(today: NaiveDate) -> Self {
        let mut quest = Self::new("No Caffeine".to_string(), 30, 100.0, QuestRole::Owner, None);
        quest.checked_in_days = (1..=13)
            .filter(|days_ago| *days_ago != 7)
            .map(|days_ago| today - Duration::days(days_ago))
            .collect();
        quest
    }

    /// Completed check-ins.
    pub fn day(&self) -> u32 {
        self.checked_in_days.len() as u32
    }

    pub fn is_owner(&self) -> bool {
        self.role == QuestRole::Owner
    }

    pub fn is_checked_in(&self, date: NaiveDate) -> bool {
        self.checked_in_days.contains(&date)
    }

    pub fn can_check_in(&self, today: NaiveDate) -> bool {
        self.is_owner() && !self.is_checked_in(today)
    }

    pub fn main_action(&self, today: NaiveDate) -> MainAction {
        if !self.is_owner() {
            MainAction::Create
        } else if self.is_checked_in(today) {
            MainAction::Done
        } else {
            MainAction::Check
        }
    }

    /// Who the tempter went after: the supported user, or "Me".
    pub fn tempted_party(&self) -> &str {
        match (&self.role, &self.target_user) {
            (QuestRole::Supporter, Some(user)) => user,
            _ => "Me",
        }
    }
}

/// Validated input for a new quest, produced by the create form.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestDraft {
    pub habit_name: String,
    pub target_days: u32,
    pub bounty: f64,
    pub for_self: bool,
    pub target_handle: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Penalty {
    pub name: String,
    pub amount: f64,
    pub date: String,
    pub context: Option<String>,
}

impl Penalty {
    pub fn new(name: String) -> Self {
        Self {
            name,
            amount: PENALTY_AMOUNT,
            date: PENALTY_DATE_LABEL.to_string(),
            context: None,
        }
    }

    pub fn display_summary(&self) -> String {
        format!("{} was caught!", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    #[test]
    fn test_seeded_quest_opens_on_day_twelve() {
        let quest = Quest::seeded(today());

        assert_eq!(quest.day(), 12);
        assert_eq!(quest.target_days, 30);
        assert_eq!(quest.bounty, 100.0);
        assert!(quest.is_owner());
        assert!(!quest.is_checked_in(today()));
        assert!(!quest.is_checked_in(today() - Duration::days(7)));
        assert!(quest.is_checked_in(today() - Duration::days(1)));
    }

    #[test]
    fn test_main_action_follows_role_and_today() {
        let mut quest = Quest::seeded(today());
        assert_eq!(quest.main_action(today()), MainAction::Check);

        quest.checked_in_days.insert(today());
        assert_eq!(quest.main_action(today()), MainAction::Done);

        quest.role = QuestRole::Supporter;
        assert_eq!(quest.main_action(today()), MainAction::Create);
    }

    #[test]
    fn test_tempted_party() {
        let mut quest = Quest::new("Gym".to_string(), 10, 50.0, QuestRole::Owner, None);
        assert_eq!(quest.tempted_party(), "Me");

        quest.role = QuestRole::Supporter;
        quest.target_user = Some("@bob".to_string());
        assert_eq!(quest.tempted_party(), "@bob");
    }

    #[test]
    fn test_new_penalty_uses_fixed_amount() {
        let penalty = Penalty::new("@eve".to_string());
        assert_eq!(penalty.amount, PENALTY_AMOUNT);
        assert_eq!(penalty.date, PENALTY_DATE_LABEL);
        assert_eq!(penalty.display_summary(), "@eve was caught!");
    }
}
