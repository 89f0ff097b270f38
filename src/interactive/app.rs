//! TUI application state and logic

use crate::core::{Criterion, Edit, Word};
use crate::filter::{LoadStatus, Session};
use crate::wordlists::loader::{LoadError, WordSource, spawn_load};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::sync::mpsc::{Receiver, TryRecvError};
use std::time::{Duration, Instant};

/// Poll interval while waiting on the corpus load
const LOADING_POLL: Duration = Duration::from_millis(50);
/// Poll interval when nothing is scheduled
const IDLE_POLL: Duration = Duration::from_millis(250);

type PendingLoad = Receiver<Result<Vec<Word>, LoadError>>;

/// Application state
pub struct App {
    pub session: Session,
    pub selected: usize,
    pub field: Field,
    pub input_mode: InputMode,
    pub messages: Vec<Message>,
    pub results_scroll: u16,
    pub should_quit: bool,
    source: WordSource,
    pending_load: Option<PendingLoad>,
}

/// Criterion field under the cursor, in on-screen order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Scope,
    Letters,
    Kind,
}

impl Field {
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Scope => Self::Letters,
            Self::Letters => Self::Kind,
            Self::Kind => Self::Scope,
        }
    }

    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::Scope => Self::Kind,
            Self::Letters => Self::Scope,
            Self::Kind => Self::Letters,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Navigate,
    EditLetters,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl App {
    /// Create the app and start loading the corpus in the background
    #[must_use]
    pub fn new(session: Session, source: WordSource) -> Self {
        let mut app = Self::with_session(session);
        app.source = source;
        app.start_load();
        app
    }

    /// Create the app around a session whose corpus is already settled
    #[must_use]
    pub fn with_session(session: Session) -> Self {
        Self {
            session,
            selected: 0,
            field: Field::Letters,
            input_mode: InputMode::Navigate,
            messages: vec![Message {
                text: "Add filters to narrow the word list. Press '?' for keys.".to_string(),
                style: MessageStyle::Info,
            }],
            results_scroll: 0,
            should_quit: false,
            source: WordSource::Embedded,
            pending_load: None,
        }
    }

    fn start_load(&mut self) {
        self.session.begin_load();
        self.pending_load = Some(spawn_load(self.source.clone()));
    }

    /// Retry a failed corpus load
    pub fn retry_load(&mut self) {
        if matches!(self.session.status(), LoadStatus::Failed(_)) {
            self.add_message(&format!("Reloading {}...", self.source), MessageStyle::Info);
            self.start_load();
        }
    }

    /// One scheduling tick: collect the corpus load, then run any due recompute
    pub fn on_tick(&mut self, now: Instant) {
        self.poll_load();
        if self.session.tick(now) {
            self.results_scroll = 0;
        }
    }

    fn poll_load(&mut self) {
        let Some(rx) = &self.pending_load else {
            return;
        };

        let result = match rx.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return,
            Err(TryRecvError::Disconnected) => Err(LoadError::Io(io::Error::other(
                "loader exited without a result",
            ))),
        };
        self.pending_load = None;

        self.session.finish_load(result);
        match self.session.status().clone() {
            LoadStatus::Loaded(count) => {
                self.add_message(&format!("Loaded {count} words"), MessageStyle::Success);
            }
            LoadStatus::Failed(reason) => {
                self.add_message(
                    &format!("Word list unavailable: {reason}. Press 'r' to retry."),
                    MessageStyle::Error,
                );
            }
            LoadStatus::Loading => {}
        }
    }

    /// How long the event loop may block before the next tick is needed
    #[must_use]
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        if let Some(remaining) = self.session.next_deadline(now) {
            remaining
        } else if self.pending_load.is_some() {
            LOADING_POLL
        } else {
            IDLE_POLL
        }
    }

    #[must_use]
    pub fn selected_criterion(&self) -> Option<&Criterion> {
        self.session.store().get(self.selected)
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Dispatch one key press
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::Navigate => self.handle_navigate_key(code),
            InputMode::EditLetters => self.handle_edit_key(code, modifiers),
        }
    }

    fn handle_navigate_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected + 1 < self.session.criteria().len() {
                    self.selected += 1;
                }
            }
            KeyCode::Left | KeyCode::Char('h') | KeyCode::BackTab => self.field = self.field.prev(),
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => self.field = self.field.next(),
            KeyCode::Enter | KeyCode::Char(' ') => self.activate_field(),
            KeyCode::Char('a' | '+') => {
                self.session.add_criterion();
                self.selected = self.session.criteria().len() - 1;
                self.field = Field::Letters;
            }
            KeyCode::Char('d' | '-') | KeyCode::Delete => self.remove_selected(),
            KeyCode::Char('m') => {
                let shown = self.session.load_more();
                self.add_message(
                    &format!(
                        "Showing {shown} of {}",
                        self.session.engine().result_count()
                    ),
                    MessageStyle::Info,
                );
            }
            KeyCode::PageDown => self.results_scroll = self.results_scroll.saturating_add(5),
            KeyCode::PageUp => self.results_scroll = self.results_scroll.saturating_sub(5),
            KeyCode::Char('r') => self.retry_load(),
            KeyCode::Char('?') => self.add_message(
                "↑↓ select | ←→ field | Enter edit/cycle | a add | d remove | m more | q quit",
                MessageStyle::Info,
            ),
            _ => {}
        }
    }

    fn handle_edit_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        let Some(current) = self.selected_criterion().map(|c| c.letters().to_string()) else {
            self.input_mode = InputMode::Navigate;
            return;
        };

        match code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Tab => self.input_mode = InputMode::Navigate,
            KeyCode::Char('u') if modifiers.contains(KeyModifiers::CONTROL) => {
                self.edit_selected(Edit::Letters(String::new()));
            }
            KeyCode::Char(c)
                if !modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.edit_selected(Edit::Letters(format!("{current}{c}")));
            }
            KeyCode::Backspace => {
                let mut letters = current;
                letters.pop();
                self.edit_selected(Edit::Letters(letters));
            }
            _ => {}
        }
    }

    fn activate_field(&mut self) {
        let Some(criterion) = self.selected_criterion().cloned() else {
            return;
        };

        match self.field {
            Field::Letters => self.input_mode = InputMode::EditLetters,
            Field::Scope => self.edit_selected(Edit::Scope(criterion.scope().cycle())),
            Field::Kind => {
                self.edit_selected(Edit::Kind(criterion.kind().cycle(criterion.scope())));
            }
        }
    }

    fn edit_selected(&mut self, edit: Edit) {
        self.session.edit_criterion(self.selected, edit);
    }

    fn remove_selected(&mut self) {
        if self.session.remove_criterion(self.selected) {
            let len = self.session.criteria().len();
            self.selected = self.selected.min(len.saturating_sub(1));
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        app.on_tick(Instant::now());
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        // Drain every key already queued so a burst of edits shares one tick
        if event::poll(app.poll_timeout(Instant::now()))? {
            loop {
                if let Event::Key(key) = event::read()? {
                    // Only process key press events (fixes Windows double-input bug)
                    if key.kind == KeyEventKind::Press {
                        app.handle_key(key.code, key.modifiers);
                    }
                }
                if app.should_quit || !event::poll(Duration::ZERO)? {
                    break;
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
