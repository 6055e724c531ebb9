// src/modules/quest/form.rs

//! Input layer for the create-quest pane. Owns the raw text of each field and
//! turns it into a [`QuestDraft`] on submit.

use thiserror::Error;

use super::QuestDraft;

pub const DEFAULT_DURATION: &str = "30";
pub const DEFAULT_BOUNTY: &str = "100";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    GoalName,
    Duration,
    Bounty,
    Role,
    TargetHandle,
}

impl FormField {
    pub fn label(&self) -> &str {
        match self {
            FormField::GoalName => "THE GOAL",
            FormField::Duration => "DURATION (DAYS)",
            FormField::Bounty => "BOUNTY ($)",
            FormField::Role => "WHO IS DETERMINED?",
            FormField::TargetHandle => "THE CHALLENGED",
        }
    }

    pub fn placeholder(&self) -> &str {
        match self {
            FormField::GoalName => "e.g. No Sugar, 6AM Gym, Code daily",
            FormField::TargetHandle => "@username",
            _ => "",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("Duration must be a whole number of days above zero, got '{0}'")]
    InvalidDuration(String),

    #[error("Bounty must be a non-negative amount, got '{0}'")]
    InvalidBounty(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateQuestForm {
    pub goal_name: String,
    pub duration: String,
    pub bounty: String,
    pub for_self: bool,
    pub target_handle: String,
    pub focus: FormField,
    pub error: Option<FormError>,
}

impl Default for CreateQuestForm {
    fn default() -> Self {
        Self {
            goal_name: String::new(),
            duration: DEFAULT_DURATION.to_string(),
            bounty: DEFAULT_BOUNTY.to_string(),
            for_self: true,
            target_handle: String::new(),
            focus: FormField::GoalName,
            error: None,
        }
    }
}

impl CreateQuestForm {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// The handle field only exists while the quest is for someone else.
    pub fn visible_fields(&self) -> Vec<FormField> {
        let mut fields = vec![
            FormField::GoalName,
            FormField::Duration,
            FormField::Bounty,
            FormField::Role,
        ];
        if !self.for_self {
            fields.push(FormField::TargetHandle);
        }
        fields
    }

    pub fn next_field(&mut self) {
        let fields = self.visible_fields();
        let idx = fields.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = fields[(idx + 1) % fields.len()];
    }

    pub fn prev_field(&mut self) {
        let fields = self.visible_fields();
        let idx = fields.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = fields[(idx + fields.len() - 1) % fields.len()];
    }

    pub fn set_for_self(&mut self, for_self: bool) {
        self.for_self = for_self;
        if for_self && self.focus == FormField::TargetHandle {
            self.focus = FormField::Role;
        }
    }

    pub fn toggle_role(&mut self) {
        self.set_for_self(!self.for_self);
    }

    fn focused_text_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            FormField::GoalName => Some(&mut self.goal_name),
            FormField::Duration => Some(&mut self.duration),
            FormField::Bounty => Some(&mut self.bounty),
            FormField::TargetHandle => Some(&mut self.target_handle),
            FormField::Role => None,
        }
    }

    /// Type a character into the focused field. On the role selector a space
    /// flips the role instead.
    pub fn input(&mut self, c: char) {
        self.error = None;
        match self.focus {
            FormField::Role => {
                if c == ' ' {
                    self.toggle_role();
                }
            }
            FormField::Duration if !c.is_ascii_digit() => {}
            FormField::Bounty if !(c.is_ascii_digit() || c == '.') => {}
            _ => {
                if let Some(text) = self.focused_text_mut() {
                    text.push(c);
                }
            }
        }
    }

    pub fn backspace(&mut self) {
        self.error = None;
        if let Some(text) = self.focused_text_mut() {
            text.pop();
        }
    }

    pub fn field_value(&self, field: FormField) -> String {
        match field {
            FormField::GoalName => self.goal_name.clone(),
            FormField::Duration => self.duration.clone(),
            FormField::Bounty => self.bounty.clone(),
            FormField::Role => if self.for_self { "Me".to_string() } else { "Someone Else".to_string() },
            FormField::TargetHandle => self.target_handle.clone(),
        }
    }

    /// Required-field and numeric checks. The first failing field wins.
    pub fn validate(&self) -> Result<QuestDraft, FormError> {
        let habit_name = self.goal_name.trim();
        if habit_name.is_empty() {
            return Err(FormError::MissingField("The goal"));
        }

        let duration = self.duration.trim();
        if duration.is_empty() {
            return Err(FormError::MissingField("Duration"));
        }
        let target_days = duration
            .parse::<u32>()
            .ok()
            .filter(|days| *days > 0)
            .ok_or_else(|| FormError::InvalidDuration(duration.to_string()))?;

        let bounty_text = self.bounty.trim();
        if bounty_text.is_empty() {
            return Err(FormError::MissingField("Bounty"));
        }
        let bounty = bounty_text
            .parse::<f64>()
            .ok()
            .filter(|amount| amount.is_finite() && *amount >= 0.0)
            .ok_or_else(|| FormError::InvalidBounty(bounty_text.to_string()))?;

        let target_handle = self.target_handle.trim();
        if !self.for_self && target_handle.is_empty() {
            return Err(FormError::MissingField("The challenged"));
        }

        Ok(QuestDraft {
            habit_name: habit_name.to_string(),
            target_days,
            bounty,
            for_self: self.for_self,
            target_handle: if self.for_self { String::new() } else { target_handle.to_string() },
        })
    }
}
