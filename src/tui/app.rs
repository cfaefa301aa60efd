//! TUI Application
//!
//! Single event loop owning the session: drains resolved transport calls,
//! applies them one at a time, renders, then polls keyboard input. Transport
//! calls run in spawned tasks and report back over an mpsc channel, so every
//! resolution is applied atomically between two draws.

use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;
use tui_textarea::TextArea;

use crate::client::ReportClient;
use crate::error::{AdrepError, Result};
use crate::session::{CallOutcome, FollowUp, Session};

use super::theme::Theme;
use super::ui::render_frame;

/// Keyboard poll timeout per loop iteration.
const TICK_RATE_MS: u64 = 50;

/// Action resulting from input handling
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Quit the application
    Quit,
    /// Submit the current draft for processing
    Submit,
    /// Refresh the history table
    Refresh,
    /// Translate the result outcome into the given language
    Translate(&'static str),
    /// Dismiss the transient notice
    DismissNotice,
    /// Forward the key to the draft editor
    Edit(KeyEvent),
}

/// Main TUI application
pub struct App {
    /// Transport client, shared with spawned request tasks
    client: Arc<ReportClient>,
    /// Session state, owned exclusively by this loop
    session: Session,
    /// Draft editor widget, kept in sync with `session.draft()`
    textarea: TextArea<'static>,
    /// Color theme
    theme: Theme,
    /// Terminal backend (initialized on run)
    terminal: Option<Terminal<CrosstermBackend<Stdout>>>,
    /// Resolved-call sender, cloned into request tasks
    outcome_tx: mpsc::UnboundedSender<CallOutcome>,
    /// Resolved-call receiver, drained by the loop
    outcome_rx: mpsc::UnboundedReceiver<CallOutcome>,
    /// Should quit flag
    should_quit: bool,
}

impl App {
    /// Create a new TUI application.
    ///
    /// Terminal initialization is deferred to `run()` so App can be created
    /// in test contexts without a TTY.
    pub fn new(client: ReportClient) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();

        let mut textarea = TextArea::default();
        textarea.set_placeholder_text("Paste an adverse event report here…");

        Self {
            client: Arc::new(client),
            session: Session::new(),
            textarea,
            theme: Theme::default(),
            terminal: None,
            outcome_tx,
            outcome_rx,
            should_quit: false,
        }
    }

    fn init_terminal(&mut self) -> Result<()> {
        if self.terminal.is_some() {
            return Ok(());
        }

        enable_raw_mode().map_err(|e| AdrepError::TuiError {
            reason: format!("Failed to enable raw mode: {}", e),
        })?;

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).map_err(|e| AdrepError::TuiError {
            reason: format!("Failed to enter alternate screen: {}", e),
        })?;

        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend).map_err(|e| AdrepError::TuiError {
            reason: format!("Failed to create terminal: {}", e),
        })?;

        self.terminal = Some(terminal);
        Ok(())
    }

    /// Run the TUI application
    pub async fn run(mut self) -> Result<()> {
        tracing::info!("TUI started against {}", self.client.origin());

        self.init_terminal()?;

        // Populate the initial history table, once, before any interaction.
        self.spawn_refresh();

        let tick_rate = Duration::from_millis(TICK_RATE_MS);

        loop {
            // 1. Drain resolved transport calls, applying each atomically.
            while let Ok(outcome) = self.outcome_rx.try_recv() {
                if let Some(FollowUp::RefreshHistory) = self.session.apply(outcome) {
                    self.spawn_refresh();
                }
            }

            // 2. Render frame
            let session = &self.session;
            let textarea = &self.textarea;
            let theme = &self.theme;
            if let Some(ref mut terminal) = self.terminal {
                terminal
                    .draw(|frame| render_frame(frame, session, textarea, theme))
                    .map_err(|e| AdrepError::TuiError {
                        reason: format!("Failed to draw frame: {}", e),
                    })?;
            }

            // 3. Poll keyboard input (with timeout for frame rate)
            if event::poll(tick_rate).map_err(|e| AdrepError::TuiError {
                reason: format!("Failed to poll events: {}", e),
            })? {
                if let Event::Key(key) = event::read().map_err(|e| AdrepError::TuiError {
                    reason: format!("Failed to read event: {}", e),
                })? {
                    let action = self.handle_key(key);
                    self.apply_action(action);
                }
            }

            // 4. Check quit flag
            if self.should_quit {
                break;
            }
        }

        // Outstanding request tasks resolve into a dropped receiver and are
        // discarded.
        self.cleanup()
    }

    /// Handle keyboard input
    fn handle_key(&self, key: KeyEvent) -> Action {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('q') if ctrl => Action::Quit,
            KeyCode::Char('c') if ctrl => Action::Quit,

            KeyCode::Char('s') if ctrl => Action::Submit,
            KeyCode::Char('r') if ctrl => Action::Refresh,

            // Translation is only offered once a result with an outcome is
            // present; the keys are inert before that.
            KeyCode::Char('f') if ctrl => Action::Translate("fr"),
            KeyCode::Char('k') if ctrl => Action::Translate("sw"),

            KeyCode::Esc if self.session.notice().is_some() => Action::DismissNotice,

            // Everything else edits the draft.
            _ => Action::Edit(key),
        }
    }

    /// Apply an action to the state, spawning transport calls as needed.
    fn apply_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::Submit => self.spawn_submit(),
            Action::Refresh => self.spawn_refresh(),
            Action::Translate(lang) => self.spawn_translate(lang),
            Action::DismissNotice => self.session.dismiss_notice(),
            Action::Edit(key) => {
                if self.textarea.input(key) {
                    self.session.edit_draft(self.textarea.lines().join("\n"));
                }
            }
        }
    }

    fn spawn_submit(&mut self) {
        let text = self.session.begin_submit();
        let client = Arc::clone(&self.client);
        let tx = self.outcome_tx.clone();
        tokio::spawn(async move {
            let result = client.submit_report(&text).await;
            let _ = tx.send(CallOutcome::Submit(result));
        });
    }

    fn spawn_refresh(&mut self) {
        self.session.begin_refresh();
        let client = Arc::clone(&self.client);
        let tx = self.outcome_tx.clone();
        tokio::spawn(async move {
            let result = client.fetch_history().await;
            let _ = tx.send(CallOutcome::Refresh(result));
        });
    }

    fn spawn_translate(&mut self, lang: &'static str) {
        let Some(text) = self.session.begin_translate() else {
            return;
        };
        let client = Arc::clone(&self.client);
        let tx = self.outcome_tx.clone();
        tokio::spawn(async move {
            let result = client.translate(&text, lang).await;
            let _ = tx.send(CallOutcome::Translate {
                lang: lang.to_string(),
                result,
            });
        });
    }

    fn cleanup(&mut self) -> Result<()> {
        if self.terminal.is_some() {
            disable_raw_mode().map_err(|e| AdrepError::TuiError {
                reason: format!("Failed to disable raw mode: {}", e),
            })?;
            execute!(io::stdout(), LeaveAlternateScreen).map_err(|e| AdrepError::TuiError {
                reason: format!("Failed to leave alternate screen: {}", e),
            })?;
        }
        Ok(())
    }
}
