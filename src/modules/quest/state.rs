// src/modules/quest/state.rs
use chrono::NaiveDate;

use super::{Penalty, Quest, QuestDraft, QuestRole, PENALTY_AMOUNT};

#[derive(Debug, Clone, PartialEq)]
pub struct QuestState {
    pub quest: Quest,
    /// Most recent first.
    pub penalties: Vec<Penalty>,
}

impl QuestState {
    pub fn new(quest: Quest) -> Self {
        Self {
            quest,
            penalties: Vec::new(),
        }
    }

    pub fn seeded(today: NaiveDate) -> Self {
        Self::new(Quest::seeded(today))
    }
}

// ----------------------------------------------------------------------------
// INTENT - Messages that express what user wants to do
// ----------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub enum QuestIntent {
    CheckIn { today: NaiveDate },
    CreateQuest(QuestDraft),
    RecordPenalty { handle: String },
}

// ----------------------------------------------------------------------------
// EVENTS - Things that happened (past tense)
// ----------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub enum QuestEvent {
    CheckedIn { date: NaiveDate, day: u32 },
    QuestCreated { habit_name: String, role: QuestRole },
    PenaltyRecorded { name: String, bounty: f64 },
}

// ----------------------------------------------------------------------------
// STATE MACHINE - Pure function: (State, Intent) -> (State, Vec<Event>)
// ----------------------------------------------------------------------------

pub struct QuestStateMachine;

impl QuestStateMachine {
    /// Precondition failures (wrong role, repeated date, empty handle) return
    /// the state untouched with no events.
    pub fn transition(
        state: QuestState,
        intent: QuestIntent,
    ) -> (QuestState, Vec<QuestEvent>) {
        use QuestIntent::*;

        match intent {
            CheckIn { today } => Self::handle_check_in(state, today),
            CreateQuest(draft) => Self::handle_create_quest(state, draft),
            RecordPenalty { handle } => Self::handle_record_penalty(state, handle),
        }
    }

    fn handle_check_in(mut state: QuestState, today: NaiveDate) -> (QuestState, Vec<QuestEvent>) {
        if !state.quest.can_check_in(today) {
            return (state, vec![]);
        }

        state.quest.checked_in_days.insert(today);
        let day = state.quest.day();

        (state, vec![QuestEvent::CheckedIn { date: today, day }])
    }

    fn handle_create_quest(_state: QuestState, draft: QuestDraft) -> (QuestState, Vec<QuestEvent>) {
        let role = QuestRole::from_for_self(draft.for_self);
        let target_user = if draft.for_self { None } else { Some(draft.target_handle) };

        let quest = Quest::new(
            draft.habit_name,
            draft.target_days,
            draft.bounty,
            role,
            target_user,
        );
        let event = QuestEvent::QuestCreated {
            habit_name: quest.habit_name.clone(),
            role,
        };

        // The previous quest and its penalties are discarded, not archived.
        (QuestState::new(quest), vec![event])
    }

    fn handle_record_penalty(mut state: QuestState, handle: String) -> (QuestState, Vec<QuestEvent>) {
        if handle.trim().is_empty() {
            return (state, vec![]);
        }

        state.quest.bounty += PENALTY_AMOUNT;
        state.penalties.insert(0, Penalty::new(handle.clone()));
        let bounty = state.quest.bounty;

        (state, vec![QuestEvent::PenaltyRecorded { name: handle, bounty }])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use pretty_assertions::assert_eq;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    fn draft(for_self: bool, handle: &str) -> QuestDraft {
        QuestDraft {
            habit_name: "X".to_string(),
            target_days: 10,
            bounty: 50.0,
            for_self,
            target_handle: handle.to_string(),
        }
    }

    #[test]
    fn test_owner_check_in_adds_today() {
        let state = QuestState::seeded(today());

        let (next, events) = QuestStateMachine::transition(state, QuestIntent::CheckIn { today: today() });

        assert_eq!(next.quest.day(), 13);
        assert!(next.quest.is_checked_in(today()));
        assert_eq!(events, vec![QuestEvent::CheckedIn { date: today(), day: 13 }]);
    }

    #[test]
    fn test_supporter_check_in_is_noop() {
        let mut state = QuestState::seeded(today());
        state.quest.role = QuestRole::Supporter;
        let before = state.clone();

        let (next, events) = QuestStateMachine::transition(state, QuestIntent::CheckIn { today: today() });

        assert_eq!(next, before);
        assert!(events.is_empty());
    }

    #[test]
    fn test_second_check_in_same_day_is_noop() {
        let state = QuestState::seeded(today());
        let (once, _) = QuestStateMachine::transition(state, QuestIntent::CheckIn { today: today() });
        let (twice, events) = QuestStateMachine::transition(once.clone(), QuestIntent::CheckIn { today: today() });

        assert_eq!(twice, once);
        assert!(events.is_empty());

        let tomorrow = today() + Duration::days(1);
        let (next_day, _) = QuestStateMachine::transition(twice, QuestIntent::CheckIn { today: tomorrow });
        assert_eq!(next_day.quest.day(), 14);
    }

    #[test]
    fn test_create_for_self_resets_progress() {
        let mut state = QuestState::seeded(today());
        state.penalties.push(Penalty::new("@old".to_string()));

        let (next, events) = QuestStateMachine::transition(state, QuestIntent::CreateQuest(draft(true, "")));

        assert_eq!(next.quest.habit_name, "X");
        assert_eq!(next.quest.target_days, 10);
        assert_eq!(next.quest.bounty, 50.0);
        assert_eq!(next.quest.day(), 0);
        assert!(next.quest.checked_in_days.is_empty());
        assert_eq!(next.quest.role, QuestRole::Owner);
        assert_eq!(next.quest.target_user, None);
        assert!(next.penalties.is_empty());
        assert_eq!(events, vec![QuestEvent::QuestCreated { habit_name: "X".to_string(), role: QuestRole::Owner }]);
    }

    #[test]
    fn test_create_for_self_ignores_handle() {
        let state = QuestState::seeded(today());
        let (next, _) = QuestStateMachine::transition(state, QuestIntent::CreateQuest(draft(true, "@bob")));
        assert_eq!(next.quest.target_user, None);
    }

    #[test]
    fn test_create_for_someone_else() {
        let state = QuestState::seeded(today());

        let (next, _) = QuestStateMachine::transition(state, QuestIntent::CreateQuest(draft(false, "@bob")));

        assert_eq!(next.quest.role, QuestRole::Supporter);
        assert_eq!(next.quest.target_user.as_deref(), Some("@bob"));
    }

    #[test]
    fn test_record_penalty_prepends_and_raises_bounty() {
        let state = QuestState::seeded(today());
        let (first, _) = QuestStateMachine::transition(state, QuestIntent::RecordPenalty { handle: "@mallory".to_string() });

        let (next, events) = QuestStateMachine::transition(first, QuestIntent::RecordPenalty { handle: "@eve".to_string() });

        assert_eq!(next.quest.bounty, 120.0);
        assert_eq!(next.penalties.len(), 2);
        assert_eq!(next.penalties[0].name, "@eve");
        assert_eq!(next.penalties[0].amount, 10.0);
        assert_eq!(next.penalties[1].name, "@mallory");
        assert_eq!(events, vec![QuestEvent::PenaltyRecorded { name: "@eve".to_string(), bounty: 120.0 }]);
    }

    #[test]
    fn test_empty_penalty_handle_is_noop() {
        let state = QuestState::seeded(today());
        let before = state.clone();

        let (next, events) = QuestStateMachine::transition(state, QuestIntent::RecordPenalty { handle: "".to_string() });
        assert_eq!(next, before);
        assert!(events.is_empty());

        let (next, _) = QuestStateMachine::transition(next, QuestIntent::RecordPenalty { handle: "   ".to_string() });
        assert_eq!(next, before);
    }

    #[test]
    fn test_duplicate_handles_are_not_deduplicated() {
        let state = QuestState::seeded(today());
        let (once, _) = QuestStateMachine::transition(state, QuestIntent::RecordPenalty { handle: "@eve".to_string() });
        let (twice, _) = QuestStateMachine::transition(once, QuestIntent::RecordPenalty { handle: "@eve".to_string() });

        assert_eq!(twice.penalties.len(), 2);
        assert_eq!(twice.quest.bounty, 120.0);
    }
}
