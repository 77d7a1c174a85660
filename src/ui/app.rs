//! Main TUI application state and logic
//!
//! The event loop owns every screen's state plus one [`TickClock`]. Each
//! iteration draws, advances the active playback session if its tick is due,
//! then polls the keyboard with a bounded timeout. Playback is therefore
//! fully cooperative: one tick at most per iteration, and reset/back/new
//! start take effect before any further tick can fire.

use crate::input;
use crate::player::{PlaybackSession, PlayerState, TickClock, TickEvent};
use crate::tracer::{self, Algorithm};
use crate::ui::panes;
use crate::ui::theme::DEFAULT_THEME;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    backend::Backend,
    Frame, Terminal,
};
use rustc_hash::FxHashSet;
use std::io;
use std::time::{Duration, Instant};

/// Tick intervals `+`/`-` step through, fastest first.
pub const SPEED_LADDER: [u64; 8] = [50, 100, 200, 300, 400, 500, 750, 1000];

/// Ladder index of the sorting screen's default interval (200 ms).
const SORT_SPEED_IDX: usize = 2;
/// Ladder index of the searching screen's default interval (400 ms).
const SEARCH_SPEED_IDX: usize = 4;

/// Default array size on the sorting screen.
const DEFAULT_SIZE: usize = 20;

const HOME_HINTS: &[(&str, &str)] = &[("↑/↓", "select"), ("↵", "open"), ("q", "quit")];
const SORT_HINTS: &[(&str, &str)] = &[
    ("⇥", "algorithm"),
    ("[/]", "size"),
    ("g", "new array"),
    ("s", "start"),
    ("⎵", "pause"),
    ("r", "reset"),
    ("+/-", "speed"),
    ("b", "home"),
];
const SEARCH_HINTS: &[(&str, &str)] = &[
    ("⇥", "algorithm"),
    ("e", "array"),
    ("t", "target"),
    ("s", "start"),
    ("⎵", "pause"),
    ("r", "reset"),
    ("b", "home"),
];

/// Which visualizer screen is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    Sorting,
    Searching,
}

/// Which searching-screen field is being edited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditField {
    Values,
    Target,
}

/// Sorting screen state: the current array and the run over it
pub struct SortingScreen {
    pub algo_idx: usize,
    pub size: usize,
    pub values: Vec<i64>,
    pub speed_idx: usize,
    pub session: Option<PlaybackSession>,
    pub started_at: Option<Instant>,
    pub elapsed: Duration,
}

impl SortingScreen {
    fn new() -> Self {
        SortingScreen {
            algo_idx: 0,
            size: DEFAULT_SIZE,
            values: input::generate_values(DEFAULT_SIZE),
            speed_idx: SORT_SPEED_IDX,
            session: None,
            started_at: None,
            elapsed: Duration::ZERO,
        }
    }

    pub fn algorithm(&self) -> Algorithm {
        Algorithm::SORTS[self.algo_idx]
    }

    /// New random array; any run in progress is discarded with it.
    fn regenerate(&mut self) {
        self.values = input::generate_values(self.size);
        self.session = None;
        self.started_at = None;
        self.elapsed = Duration::ZERO;
    }
}

/// Searching screen state: the two input fields and the run
pub struct SearchingScreen {
    pub algo_idx: usize,
    pub values_text: String,
    pub target_text: String,
    pub editing: Option<EditField>,
    pub speed_idx: usize,
    pub session: Option<PlaybackSession>,
}

impl SearchingScreen {
    fn new() -> Self {
        SearchingScreen {
            algo_idx: 0,
            values_text: String::new(),
            target_text: String::new(),
            editing: None,
            speed_idx: SEARCH_SPEED_IDX,
            session: None,
        }
    }

    pub fn algorithm(&self) -> Algorithm {
        Algorithm::SEARCHES[self.algo_idx]
    }

    /// What the bar chart shows before any run: the parsed field, or the
    /// demo array when the field is blank or not yet valid.
    fn preview(&self) -> Vec<i64> {
        if self.values_text.trim().is_empty() {
            input::DEMO_VALUES.to_vec()
        } else {
            input::parse_values(&self.values_text)
                .unwrap_or_else(|_| input::DEMO_VALUES.to_vec())
        }
    }
}

/// The main application state
pub struct App {
    pub screen: Screen,
    pub menu_idx: usize,
    pub sorting: SortingScreen,
    pub searching: SearchingScreen,

    /// One clock serves whichever session is active; re-armed on every
    /// start/resume so the first frame lands a full interval later.
    pub clock: TickClock,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl App {
    /// Create a new app opened on the given screen
    pub fn new(screen: Screen) -> Self {
        App {
            screen,
            menu_idx: 0,
            sorting: SortingScreen::new(),
            searching: SearchingScreen::new(),
            clock: TickClock::new(Instant::now()),
            should_quit: false,
            status_message: String::from("Ready!"),
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or_else(Instant::now),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.drive_playback();

            // Poll with timeout so playback keeps advancing between keys
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Advance the active session by one frame if its tick is due.
    fn drive_playback(&mut self) {
        let now = Instant::now();
        match self.screen {
            Screen::Home => {}
            Screen::Sorting => {
                let name = self.sorting.algorithm().name();
                let started_at = self.sorting.started_at;
                let Some(session) = self.sorting.session.as_mut() else {
                    return;
                };
                if !session.is_running() || !self.clock.due(now, session.interval()) {
                    return;
                }
                if let Some(TickEvent::Finished) = session.tick() {
                    self.sorting.elapsed = started_at.map(|t| t.elapsed()).unwrap_or_default();
                    self.status_message = format!("{} complete", name);
                }
            }
            Screen::Searching => {
                let Some(session) = self.searching.session.as_mut() else {
                    return;
                };
                if !session.is_running() || !self.clock.due(now, session.interval()) {
                    return;
                }
                let done = match session.tick() {
                    Some(TickEvent::Matched(frame)) => Some(frame.match_index),
                    Some(TickEvent::Finished) => Some(None),
                    _ => None,
                };
                if let Some(match_index) = done {
                    let target = session.trace().target();
                    self.status_message = match (match_index, target) {
                        (Some(index), Some(target)) => {
                            format!("Target {} found at index {}", target, index)
                        }
                        (None, Some(target)) => format!("Target {} was not found", target),
                        _ => String::from("Search complete"),
                    };
                }
            }
        }
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(frame.area());

        match self.screen {
            Screen::Home => panes::render_home(frame, chunks[0], self.menu_idx),
            Screen::Sorting => self.render_sorting(frame, chunks[0]),
            Screen::Searching => self.render_searching(frame, chunks[0]),
        }

        let (progress, state) = self.playback_status();
        let hints = match self.screen {
            Screen::Home => HOME_HINTS,
            Screen::Sorting => SORT_HINTS,
            Screen::Searching => SEARCH_HINTS,
        };
        panes::render_status_bar(frame, chunks[1], &self.status_message, progress, state, hints);
    }

    fn render_sorting(&self, frame: &mut Frame, area: Rect) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(8),
                Constraint::Length(10),
            ])
            .split(area);

        panes::render_sort_controls(
            frame,
            rows[0],
            self.sorting.algorithm(),
            self.sorting.size,
            SPEED_LADDER[self.sorting.speed_idx],
        );

        let last = self.sorting.session.as_ref().and_then(|s| s.last_frame());
        let (values, highlighted): (&[i64], &[usize]) = match last {
            Some(frame) => (&frame.values, &frame.highlighted),
            None => (&self.sorting.values, &[]),
        };
        let highlight_set: FxHashSet<usize> = highlighted.iter().copied().collect();
        panes::render_bars_pane(
            frame,
            rows[1],
            " Visualization ",
            values,
            &highlight_set,
            None,
            DEFAULT_THEME.bar_swap,
        );

        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(rows[2]);
        panes::render_info_pane(frame, cols[0], self.sorting.algorithm());

        let (comparisons, mutations) = last
            .map(|frame| (frame.comparisons, frame.mutations))
            .unwrap_or((0, 0));
        let completed = self
            .sorting
            .session
            .as_ref()
            .is_some_and(|s| s.is_complete());
        let elapsed = if completed {
            self.sorting.elapsed
        } else {
            self.sorting
                .started_at
                .map(|t| t.elapsed())
                .unwrap_or_default()
        };
        panes::render_run_pane(frame, cols[1], comparisons, mutations, elapsed, completed);
    }

    fn render_searching(&self, frame: &mut Frame, area: Rect) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5),
                Constraint::Length(1),
                Constraint::Min(8),
                Constraint::Length(9),
            ])
            .split(area);

        panes::render_search_controls(
            frame,
            rows[0],
            self.searching.algorithm(),
            &self.searching.values_text,
            &self.searching.target_text,
            self.searching.editing,
            SPEED_LADDER[self.searching.speed_idx],
        );

        let result = self
            .searching
            .session
            .as_ref()
            .filter(|s| s.is_complete())
            .map(|s| (s.trace().outcome(), s.trace().target()));
        panes::render_result_line(frame, rows[1], result);

        let preview;
        let (values, highlighted, match_index): (&[i64], &[usize], Option<usize>) =
            match self.searching.session.as_ref() {
                Some(session) => {
                    // Before the first tick, show the trace's first frame.
                    match session.last_frame().or_else(|| session.trace().get(0)) {
                        Some(frame) => (&frame.values, &frame.highlighted, frame.match_index),
                        None => (&[], &[], None),
                    }
                }
                None => {
                    preview = self.searching.preview();
                    (&preview, &[], None)
                }
            };
        let highlight_set: FxHashSet<usize> = highlighted.iter().copied().collect();
        panes::render_bars_pane(
            frame,
            rows[2],
            " Visualization ",
            values,
            &highlight_set,
            match_index,
            DEFAULT_THEME.bar_active,
        );

        panes::render_explain_pane(frame, rows[3], self.searching.algorithm(), result);
    }

    fn playback_status(&self) -> (Option<(usize, usize)>, Option<PlayerState>) {
        let session = match self.screen {
            Screen::Home => None,
            Screen::Sorting => self.sorting.session.as_ref(),
            Screen::Searching => self.searching.session.as_ref(),
        };
        match session {
            Some(s) => (Some((s.cursor(), s.trace().len())), Some(s.state())),
            None => (None, None),
        }
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        match self.screen {
            Screen::Home => self.handle_home_key(key),
            Screen::Sorting => self.handle_sorting_key(key),
            Screen::Searching => self.handle_searching_key(key),
        }
    }

    fn handle_home_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Up => {
                self.menu_idx = self.menu_idx.checked_sub(1).unwrap_or(panes::MENU.len() - 1);
            }
            KeyCode::Down => {
                self.menu_idx = (self.menu_idx + 1) % panes::MENU.len();
            }
            KeyCode::Enter => match self.menu_idx {
                0 => {
                    self.screen = Screen::Sorting;
                    self.status_message = String::from("Press s to start sorting");
                }
                1 => {
                    self.screen = Screen::Searching;
                    self.status_message = String::from("Press s to start the search");
                }
                _ => self.should_quit = true,
            },
            _ => {}
        }
    }

    fn handle_sorting_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Char('b') | KeyCode::Esc => {
                // Navigating away cancels the run outright
                self.sorting.session = None;
                self.screen = Screen::Home;
                self.status_message = String::from("Ready!");
            }
            KeyCode::Tab => {
                self.sorting.algo_idx = (self.sorting.algo_idx + 1) % Algorithm::SORTS.len();
                self.sorting.session = None;
                self.status_message = format!("{} selected", self.sorting.algorithm().name());
            }
            KeyCode::Char('[') => {
                if self.sorting.size > input::MIN_SIZE {
                    self.sorting.size -= 1;
                    self.sorting.regenerate();
                    self.status_message = format!("Array size: {}", self.sorting.size);
                }
            }
            KeyCode::Char(']') => {
                if self.sorting.size < input::MAX_SIZE {
                    self.sorting.size += 1;
                    self.sorting.regenerate();
                    self.status_message = format!("Array size: {}", self.sorting.size);
                }
            }
            KeyCode::Char('g') => {
                self.sorting.regenerate();
                self.status_message =
                    format!("Generated {} random values", self.sorting.values.len());
            }
            KeyCode::Char('r') => {
                self.sorting.regenerate();
                self.status_message = String::from("Reset");
            }
            KeyCode::Char('s') => self.start_sorting(),
            KeyCode::Char(' ') => self.toggle_pause(),
            KeyCode::Char('+') | KeyCode::Char('=') => self.change_speed(true),
            KeyCode::Char('-') => self.change_speed(false),
            _ => {}
        }
    }

    fn handle_searching_key(&mut self, key: KeyEvent) {
        if let Some(field) = self.searching.editing {
            let buffer = match field {
                EditField::Values => &mut self.searching.values_text,
                EditField::Target => &mut self.searching.target_text,
            };
            match key.code {
                KeyCode::Enter | KeyCode::Esc => {
                    self.searching.editing = None;
                    self.status_message = String::from("Press s to start the search");
                }
                KeyCode::Backspace => {
                    buffer.pop();
                }
                KeyCode::Char(c) => buffer.push(c),
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Char('b') | KeyCode::Esc => {
                self.searching.session = None;
                self.screen = Screen::Home;
                self.status_message = String::from("Ready!");
            }
            KeyCode::Tab => {
                self.searching.algo_idx =
                    (self.searching.algo_idx + 1) % Algorithm::SEARCHES.len();
                self.searching.session = None;
                self.status_message =
                    format!("{} selected", self.searching.algorithm().name());
            }
            KeyCode::Char('e') => {
                self.searching.editing = Some(EditField::Values);
                self.searching.session = None;
                self.status_message = String::from("Editing array — Enter to confirm");
            }
            KeyCode::Char('t') => {
                self.searching.editing = Some(EditField::Target);
                self.searching.session = None;
                self.status_message = String::from("Editing target — Enter to confirm");
            }
            KeyCode::Char('r') => {
                self.searching.session = None;
                self.status_message = String::from("Reset");
            }
            KeyCode::Char('s') => self.start_searching(),
            KeyCode::Char(' ') => self.toggle_pause(),
            KeyCode::Char('+') | KeyCode::Char('=') => self.change_speed(true),
            KeyCode::Char('-') => self.change_speed(false),
            _ => {}
        }
    }

    /// Build a fresh trace from the current array and start playing it.
    fn start_sorting(&mut self) {
        if self.sorting.session.as_ref().is_some_and(|s| s.is_running()) {
            return; // ignore if already running
        }
        let interval = Duration::from_millis(SPEED_LADDER[self.sorting.speed_idx]);
        match tracer::build_trace(self.sorting.algorithm(), &self.sorting.values, None) {
            Ok(trace) => {
                let mut session = PlaybackSession::new(trace, interval);
                session.start();
                self.sorting.session = Some(session);
                self.sorting.started_at = Some(Instant::now());
                self.sorting.elapsed = Duration::ZERO;
                self.clock.rearm(Instant::now());
                self.status_message =
                    format!("Playing {}...", self.sorting.algorithm().name());
            }
            Err(e) => self.status_message = e.to_string(),
        }
    }

    /// Validate both fields, build the trace, and start playing it. Invalid
    /// input ends up in the status bar and never reaches the tracer.
    fn start_searching(&mut self) {
        if self
            .searching
            .session
            .as_ref()
            .is_some_and(|s| s.is_running())
        {
            return;
        }

        // Blank array field falls back to the demo array
        let values = if self.searching.values_text.trim().is_empty() {
            input::DEMO_VALUES.to_vec()
        } else {
            match input::parse_values(&self.searching.values_text) {
                Ok(values) => values,
                Err(e) => {
                    self.status_message = e.to_string();
                    return;
                }
            }
        };
        let target = match input::parse_target(&self.searching.target_text) {
            Ok(target) => target,
            Err(e) => {
                self.status_message = e.to_string();
                return;
            }
        };

        let interval = Duration::from_millis(SPEED_LADDER[self.searching.speed_idx]);
        match tracer::build_trace(self.searching.algorithm(), &values, Some(target)) {
            Ok(trace) => {
                let mut session = PlaybackSession::new(trace, interval);
                session.start();
                self.searching.session = Some(session);
                self.clock.rearm(Instant::now());
                self.status_message = format!("Searching for {}...", target);
            }
            Err(e) => self.status_message = e.to_string(),
        }
    }

    /// Toggle pause/resume on the active session (200ms debounce against key
    /// repeat spam).
    fn toggle_pause(&mut self) {
        if self.last_space_press.elapsed() < Duration::from_millis(200) {
            return;
        }
        self.last_space_press = Instant::now();

        let session = match self.screen {
            Screen::Home => None,
            Screen::Sorting => self.sorting.session.as_mut(),
            Screen::Searching => self.searching.session.as_mut(),
        };
        let Some(session) = session else { return };
        match session.state() {
            PlayerState::Running => {
                session.pause();
                self.status_message = String::from("Paused");
            }
            PlayerState::Paused => {
                session.resume();
                self.clock.rearm(Instant::now());
                self.status_message = String::from("Playing...");
            }
            _ => {}
        }
    }

    /// Step the tick interval through the speed ladder; a live session picks
    /// the new interval up on its next tick.
    fn change_speed(&mut self, faster: bool) {
        let speed_idx = match self.screen {
            Screen::Home => return,
            Screen::Sorting => &mut self.sorting.speed_idx,
            Screen::Searching => &mut self.searching.speed_idx,
        };
        if faster {
            *speed_idx = speed_idx.saturating_sub(1);
        } else {
            *speed_idx = (*speed_idx + 1).min(SPEED_LADDER.len() - 1);
        }
        let ms = SPEED_LADDER[*speed_idx];

        let session = match self.screen {
            Screen::Home => None,
            Screen::Sorting => self.sorting.session.as_mut(),
            Screen::Searching => self.searching.session.as_mut(),
        };
        if let Some(session) = session {
            session.set_interval(Duration::from_millis(ms));
        }
        self.status_message = format!("Speed: {} ms/step", ms);
    }
}
