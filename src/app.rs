use chrono::{Local, NaiveDate};
use color_eyre::Result;
use ratatui::{
    DefaultTerminal,
    crossterm::event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
};
use ratatui_image::picker::Picker;
use throbber_widgets_tui::ThrobberState;

use crate::config::AppConfig;
use crate::event::{AppEvent, Event, EventHandler};
use crate::modules::avatar::{self, AvatarLoader, GeminiClient};
use crate::modules::quest::{
    QuestDraft, QuestEvent, QuestIntent, QuestState, QuestStateMachine,
    form::{CreateQuestForm, FormField},
};
use crate::util::{
    database::Database,
    image::{self as term_image, ImageRenderer},
    task::DelayedTask,
};
use crate::view::View;
use crate::{log_debug, log_error, log_info};

/// The "expose the tempter" dialog.
#[derive(Debug, Default)]
pub struct TempterModal {
    pub open: bool,
    pub input: String,
}

#[derive(Debug)]
pub enum AvatarSlot {
    /// Generation request in flight.
    Loading,
    /// Resolved. `renderer` is `None` when there is no terminal to draw into.
    Ready { renderer: Option<ImageRenderer> },
    /// Disabled, failed, or never requested.
    Missing,
}

/// Application.
pub struct App {
    /// Is the application running?
    pub running: bool,
    /// Pane on screen
    pub view: View,
    /// Active quest and its penalties
    pub state: QuestState,
    pub form: CreateQuestForm,
    pub tempter: TempterModal,
    pub avatar: AvatarSlot,
    pub throbber: ThrobberState,
    /// One-line feedback shown in the footer
    pub status_message: Option<String>,
    pub config: AppConfig,
    /// Local store for the avatar cache
    pub database: Database,
    /// Event handler.
    pub events: EventHandler,

    picker: Option<Picker>,
    avatar_started: bool,
    pending_create: Option<DelayedTask>,
    pending_penalty: Option<DelayedTask>,
}

impl App {
    /// Constructs the terminal application. Call after `ratatui::init()`.
    pub fn new(config: AppConfig) -> Result<Self> {
        let database = Database::open(&config.database_path)?;
        // Query before the event reader starts competing for stdin.
        let picker = term_image::query_picker();
        let events = EventHandler::new();

        let mut app = Self::with_parts(config, database, events, Some(picker));
        app.start_avatar_loader();
        Ok(app)
    }

    /// Assemble an app from its parts without touching the terminal.
    pub fn with_parts(
        config: AppConfig,
        database: Database,
        events: EventHandler,
        picker: Option<Picker>,
    ) -> Self {
        let today = Local::now().date_naive();

        Self {
            running: true,
            view: View::default(),
            state: QuestState::seeded(today),
            form: CreateQuestForm::default(),
            tempter: TempterModal::default(),
            avatar: AvatarSlot::Missing,
            throbber: ThrobberState::default(),
            status_message: None,
            config,
            database,
            events,
            picker,
            avatar_started: false,
            pending_create: None,
            pending_penalty: None,
        }
    }

    /// Run the application's main loop.
    pub async fn run(mut self, mut terminal: DefaultTerminal) -> Result<()> {
        let mut needs_redraw = true;

        while self.running {
            if needs_redraw {
                terminal.draw(|frame| frame.render_widget(&mut self, frame.area()))?;
            }

            // save power: only redraw when an event changed something
            let event = self.events.next().await?;
            needs_redraw = self.handle_event(event)?;
        }
        Ok(())
    }

    /// Dispatch one event. Returns whether the screen needs redrawing.
    pub fn handle_event(&mut self, event: Event) -> Result<bool> {
        match event {
            Event::Tick => {
                if self.is_busy() {
                    self.throbber.calc_next();
                    return Ok(true);
                }
                Ok(false)
            }
            Event::Crossterm(event) => match event {
                CrosstermEvent::Key(key_event) => {
                    self.handle_key_events(key_event)?;
                    Ok(true)
                }
                CrosstermEvent::Resize(_, _) => Ok(true),
                _ => Ok(false),
            },
            Event::App(app_event) => {
                self.handle_app_event(app_event);
                Ok(true)
            }
        }
    }

    /// Process every event already queued. Used when driving the app without
    /// a terminal.
    pub fn drain_events(&mut self) -> Result<()> {
        while let Some(event) = self.events.try_next() {
            self.handle_event(event)?;
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    pub fn handle_key_events(&mut self, key_event: KeyEvent) -> Result<()> {
        if key_event.kind != KeyEventKind::Press {
            return Ok(());
        }

        if let KeyCode::Char('c' | 'C') = key_event.code {
            if key_event.modifiers == KeyModifiers::CONTROL {
                self.events.send(AppEvent::Quit);
                return Ok(());
            }
        }

        if self.tempter.open {
            match key_event.code {
                KeyCode::Esc => self.events.send(AppEvent::CloseTempter),
                KeyCode::Enter => self.events.send(AppEvent::SubmitPenalty),
                KeyCode::Backspace if !self.is_penalty_pending() => {
                    self.tempter.input.pop();
                }
                KeyCode::Char(c) if !self.is_penalty_pending() => self.tempter.input.push(c),
                _ => {}
            }
            return Ok(());
        }

        if self.view == View::Create {
            match key_event.code {
                KeyCode::Esc => self.events.send(AppEvent::SwitchView(View::Quest)),
                KeyCode::Enter => self.events.send(AppEvent::SubmitQuest),
                KeyCode::Tab | KeyCode::Down => self.form.next_field(),
                KeyCode::BackTab | KeyCode::Up => self.form.prev_field(),
                KeyCode::Left | KeyCode::Right if self.form.focus == FormField::Role => {
                    self.form.toggle_role()
                }
                KeyCode::Backspace => self.form.backspace(),
                KeyCode::Char(c) => self.form.input(c),
                _ => {}
            }
            return Ok(());
        }

        match key_event.code {
            KeyCode::Esc | KeyCode::Char('q') => self.events.send(AppEvent::Quit),
            KeyCode::Tab | KeyCode::Right => self.events.send(AppEvent::NextView),
            KeyCode::BackTab | KeyCode::Left => self.events.send(AppEvent::PrevView),
            KeyCode::Char(' ') | KeyCode::Enter => self.events.send(AppEvent::MainAction),
            KeyCode::Char('c') => self.events.send(AppEvent::CheckIn),
            KeyCode::Char('n') => self.events.send(AppEvent::SwitchView(View::Create)),
            KeyCode::Char('t') if self.view == View::Quest => self.events.send(AppEvent::OpenTempter),
            KeyCode::Char(c) => {
                if let Some(view) = View::from_hotkey(c) {
                    self.events.send(AppEvent::SwitchView(view));
                }
            }
            _ => {}
        }
        Ok(())
    }

    pub fn handle_app_event(&mut self, app_event: AppEvent) {
        match app_event {
            AppEvent::SwitchView(view) => self.switch_view(view),
            AppEvent::NextView => self.switch_view(self.view.next()),
            AppEvent::PrevView => self.switch_view(self.view.prev()),
            AppEvent::MainAction => self.main_action(),
            AppEvent::CheckIn => self.check_in(),
            AppEvent::SubmitQuest => self.submit_quest(),
            AppEvent::OpenTempter => self.tempter.open = true,
            AppEvent::CloseTempter => self.close_tempter(),
            AppEvent::SubmitPenalty => self.submit_penalty(),
            AppEvent::QuestReady(draft) => self.quest_ready(draft),
            AppEvent::PenaltyReady(handle) => self.penalty_ready(handle),
            AppEvent::AvatarResolved(data_url) => self.avatar_resolved(data_url),
            AppEvent::Quit => self.quit(),
        }
    }

    /// Set running to false to quit the application.
    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }

    pub fn is_creating(&self) -> bool {
        self.pending_create.is_some()
    }

    pub fn is_penalty_pending(&self) -> bool {
        self.pending_penalty.is_some()
    }

    pub fn is_busy(&self) -> bool {
        self.is_creating() || self.is_penalty_pending() || matches!(self.avatar, AvatarSlot::Loading)
    }

    /// Feedback belongs to the pane it was raised on; leaving it restores
    /// the key help.
    pub fn switch_view(&mut self, view: View) {
        log_debug!("View {:?} -> {:?}", self.view, view);
        self.view = view;
        self.status_message = None;
    }

    fn apply(&mut self, intent: QuestIntent) -> Vec<QuestEvent> {
        let (state, events) = QuestStateMachine::transition(self.state.clone(), intent);
        self.state = state;

        for event in &events {
            log_info!("Quest event: {:?}", event);
        }
        events
    }

    /// Centre button: supporters go to the create form, owners check in.
    pub fn main_action(&mut self) {
        if self.state.quest.is_owner() {
            self.check_in();
        } else {
            self.switch_view(View::Create);
        }
    }

    pub fn check_in(&mut self) {
        let today = self.today();
        if self.apply(QuestIntent::CheckIn { today }).is_empty() {
            log_debug!("Check-in ignored for {}", today);
            return;
        }
        self.status_message = Some(format!("Checked in for {}", today.format("%a %d %b")));
    }

    pub fn submit_quest(&mut self) {
        if self.is_creating() {
            return;
        }

        match self.form.validate() {
            Ok(draft) => {
                log_info!("Creating quest '{}'", draft.habit_name);
                self.form.error = None;
                self.pending_create = Some(DelayedTask::spawn(
                    "create_quest",
                    self.config.create_latency(),
                    self.events.sender(),
                    Event::App(AppEvent::QuestReady(draft)),
                ));
            }
            Err(e) => {
                log_debug!("Create form rejected: {}", e);
                self.form.error = Some(e);
            }
        }
    }

    fn quest_ready(&mut self, draft: QuestDraft) {
        if self.pending_create.take().is_none() {
            log_debug!("Dropping quest result with no pending create");
            return;
        }

        self.apply(QuestIntent::CreateQuest(draft));
        self.form.reset();
        self.switch_view(View::Quest);
        self.status_message = Some(format!("Quest started: {}", self.state.quest.habit_name));
    }

    pub fn submit_penalty(&mut self) {
        let handle = self.tempter.input.trim().to_string();
        if handle.is_empty() || self.is_penalty_pending() {
            return;
        }

        log_info!("Requesting penalty for {}", handle);
        self.pending_penalty = Some(DelayedTask::spawn(
            "record_penalty",
            self.config.penalty_latency(),
            self.events.sender(),
            Event::App(AppEvent::PenaltyReady(handle)),
        ));
    }

    fn penalty_ready(&mut self, handle: String) {
        if self.pending_penalty.take().is_none() {
            log_debug!("Dropping penalty for {} with no pending request", handle);
            return;
        }

        if !self.apply(QuestIntent::RecordPenalty { handle: handle.clone() }).is_empty() {
            self.status_message = Some(format!("{} was charged", handle));
        }
        self.tempter.input.clear();
        self.tempter.open = false;
    }

    /// Closing the dialog abandons any request still in flight.
    pub fn close_tempter(&mut self) {
        if let Some(task) = self.pending_penalty.take() {
            log_info!("Cancelled pending {}", task.label());
            task.cancel();
        }
        self.tempter.open = false;
    }

    /// Kick off the one avatar lookup for this session.
    pub fn start_avatar_loader(&mut self) {
        if self.avatar_started {
            return;
        }
        self.avatar_started = true;

        if !self.config.avatar.enabled {
            self.avatar = AvatarSlot::Missing;
            return;
        }

        let client = match GeminiClient::new(&self.config.avatar) {
            Ok(client) => client,
            Err(e) => {
                log_error!("Failed to build avatar client: {}", e);
                self.avatar = AvatarSlot::Missing;
                return;
            }
        };

        let loader = AvatarLoader::new(
            self.database.clone(),
            client,
            self.config.avatar.cache_key.clone(),
            self.config.avatar.prompt.clone(),
        );
        let sender = self.events.sender();

        self.avatar = AvatarSlot::Loading;
        tokio::spawn(async move {
            let outcome = loader.load().await;
            let data_url = outcome.data_url().map(str::to_string);
            let _ = sender.send(Event::App(AppEvent::AvatarResolved(data_url)));
        });
    }

    fn avatar_resolved(&mut self, data_url: Option<String>) {
        let Some(data_url) = data_url else {
            self.avatar = AvatarSlot::Missing;
            return;
        };

        let Some(picker) = &self.picker else {
            self.avatar = AvatarSlot::Ready { renderer: None };
            return;
        };

        self.avatar = match avatar::decode_image(&data_url) {
            Ok(img) => AvatarSlot::Ready {
                renderer: Some(ImageRenderer::from_dynamic_image(picker, img)),
            },
            Err(e) => {
                log_error!("Cached avatar is unreadable: {}", e);
                AvatarSlot::Missing
            }
        };
    }
}
