// src/modules/quest/progress.rs

//! Display values derived from a [`Quest`]. Nothing here is stored; the
//! dashboard recomputes it on every frame.

use super::{Quest, QuestRole};
use crate::util::string::StringUtils;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuestProgress {
    /// `day / target_days`. Not clamped: an overrun quest reports > 1.0.
    pub fraction: f64,
    /// Portion of the bounty already earned back, rounded to cents.
    pub secured: f64,
    /// `bounty - secured`.
    pub risked: f64,
}

impl QuestProgress {
    pub fn of(quest: &Quest) -> Self {
        let fraction = progress_fraction(quest);
        let secured = round_cents(quest.bounty * fraction);
        let risked = round_cents(quest.bounty - secured);

        Self { fraction, secured, risked }
    }

    pub fn secured_display(&self) -> String {
        StringUtils::money(self.secured)
    }

    pub fn risked_display(&self) -> String {
        StringUtils::money(self.risked)
    }

    /// Fraction clamped into `0.0..=1.0` for progress bars.
    pub fn gauge_ratio(&self) -> f64 {
        if self.fraction.is_finite() {
            self.fraction.clamp(0.0, 1.0)
        } else {
            0.0
        }
    }
}

/// A zero-length quest has no progress rather than an undefined one.
pub fn progress_fraction(quest: &Quest) -> f64 {
    if quest.target_days == 0 {
        return 0.0;
    }
    quest.day() as f64 / quest.target_days as f64
}

pub fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

pub fn status_label(quest: &Quest) -> &'static str {
    if quest.day() == 0 {
        "Starting Quest"
    } else {
        "Partial Payout Secured"
    }
}

pub fn headline(quest: &Quest) -> String {
    match quest.role {
        QuestRole::Supporter => format!(
            "SUPPORTING: {}",
            quest.target_user.as_deref().unwrap_or_default()
        ),
        QuestRole::Owner => format!("YOUR GOAL: {}", quest.habit_name.to_uppercase()),
    }
}

pub fn day_counter(quest: &Quest) -> String {
    format!("Day {} of {}", quest.day(), quest.target_days)
}
