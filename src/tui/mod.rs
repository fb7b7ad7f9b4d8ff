//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Routing
//!
//! Global keys (quit, clear, focus cycling, model card) are handled first.
//! Everything else goes to the focused control through [`route`], a table
//! keyed by [`Control`]: each control turns the key into its own high-level
//! event, which maps to at most one `Action`.
//!
//! ## Redraw Strategy
//!
//! - **Loading**: draws every ~80ms so the spinner animates.
//! - **Idle**: sleeps up to 500ms (250ms while notifications are up, so they
//!   disappear on time) and only redraws on events or background actions.

mod component;
pub mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::{Duration, Instant};

use crossterm::cursor::{SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, EnableBracketedPaste, KeyboardEnhancementFlags,
    PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;
use ratatui::style::Color;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::{App, UiState};
use crate::prediction::{AnalysisRequest, HttpPredictionClient, PredictionClient};
use crate::tui::component::EventHandler;
use crate::tui::components::{
    Button, InputBox, InputEvent, ResultPanelState, SampleEvent, SampleList,
};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// Focusable controls, in Tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Message,
    Analyze,
    Clear,
    Samples,
    Results,
}

impl Control {
    const ORDER: [Control; 5] = [
        Control::Message,
        Control::Analyze,
        Control::Clear,
        Control::Samples,
        Control::Results,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|c| *c == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        Self::ORDER[(self.position() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub focus: Control,
    pub input_box: InputBox,
    pub analyze_button: Button,
    pub clear_button: Button,
    pub sample_list: SampleList,
    pub result_panel: ResultPanelState,
    pub show_model_card: bool,
}

impl TuiState {
    pub fn new(samples: Vec<String>) -> Self {
        Self {
            focus: Control::Message, // User expects to type immediately
            input_box: InputBox::new(),
            analyze_button: Button::new("Analyze", Color::Blue).with_busy_label("Analyzing..."),
            clear_button: Button::new("Clear", Color::Gray),
            sample_list: SampleList::new(samples),
            result_panel: ResultPanelState::new(),
            show_model_card: false,
        }
    }

    /// Copies props from App state into the components.
    pub fn sync(&mut self, app: &App, spinner_frame: usize) {
        self.input_box.text.clone_from(&app.input);
        self.input_box.focused = self.focus == Control::Message;
        self.input_box.dimmed = !app.submit_enabled();

        self.analyze_button.enabled = app.submit_enabled();
        self.analyze_button.focused = self.focus == Control::Analyze;
        self.analyze_button.spinner_frame = spinner_frame;

        self.clear_button.focused = self.focus == Control::Clear;
        self.sample_list.focused = self.focus == Control::Samples;
    }
}

/// Sends an event to whichever control has focus.
pub(crate) fn route(tui: &mut TuiState, event: &TuiEvent) -> Option<Action> {
    match tui.focus {
        Control::Message => tui.input_box.handle_event(event).map(|e| match e {
            InputEvent::Char(c) => Action::InputChar(c),
            InputEvent::Backspace => Action::Backspace,
            InputEvent::Paste(data) => Action::Paste(data),
            InputEvent::Submit => Action::Submit,
        }),
        Control::Analyze => tui.analyze_button.handle_event(event).map(|()| Action::Submit),
        Control::Clear => tui.clear_button.handle_event(event).map(|()| Action::Clear),
        Control::Samples => tui
            .sample_list
            .handle_event(event)
            .map(|SampleEvent::Select(index)| Action::SelectSample(index)),
        Control::Results => {
            tui.result_panel.handle_event(event);
            None
        }
    }
}

/// Handles global keys, then routes the rest to the focused control.
pub(crate) fn handle_event(tui: &mut TuiState, event: &TuiEvent) -> Option<Action> {
    match event {
        TuiEvent::Resize => return None,
        TuiEvent::Quit => return Some(Action::Quit),
        TuiEvent::ToggleModelCard => {
            tui.show_model_card = !tui.show_model_card;
            return None;
        }
        TuiEvent::FocusNext => {
            tui.focus = tui.focus.next();
            return None;
        }
        TuiEvent::FocusPrev => {
            tui.focus = tui.focus.prev();
            return None;
        }
        TuiEvent::Clear => {
            tui.focus = Control::Message;
            return Some(Action::Clear);
        }
        _ => {}
    }

    // Typing anywhere goes to the message field. Space stays with buttons
    // and samples, where it presses.
    let typing = match event {
        TuiEvent::Paste(_) | TuiEvent::Backspace => true,
        TuiEvent::InputChar(' ') => tui.focus == Control::Results,
        TuiEvent::InputChar(_) => true,
        _ => false,
    };
    if typing && tui.focus != Control::Message {
        tui.focus = Control::Message;
    }

    let action = route(tui, event);
    if matches!(action, Some(Action::Clear)) {
        tui.focus = Control::Message;
    }
    action
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // The Kitty keyboard protocol is harmlessly ignored by terminals that
        // don't support it
        execute!(
            stdout(),
            EnableBracketedPaste,
            Show,
            SetCursorStyle::SteadyBlock,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
        )?;
        info!("Terminal modes enabled (bracketed paste, steady block cursor, keyboard enhancement)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), PopKeyboardEnhancementFlags, DisableBracketedPaste);
    }
}

/// Build the prediction client from a resolved config.
pub fn build_client(config: &ResolvedConfig) -> Arc<dyn PredictionClient> {
    Arc::new(HttpPredictionClient::new(
        config.api_base_url.clone(),
        config.endpoint.path(),
    ))
}

/// Performs one analysis and packages the outcome as an action.
pub async fn run_analysis(
    client: &dyn PredictionClient,
    attempt: String,
    request: AnalysisRequest,
) -> Action {
    let outcome = client.analyze(&request).await;
    Action::AnalysisFinished { attempt, outcome }
}

fn spawn_request(
    client: Arc<dyn PredictionClient>,
    attempt: String,
    request: AnalysisRequest,
    tx: mpsc::Sender<Action>,
) {
    info!("Spawning prediction request (attempt={})", attempt);
    tokio::spawn(async move {
        let action = run_analysis(client.as_ref(), attempt, request).await;
        if tx.send(action).is_err() {
            warn!("Failed to send analysis result: receiver dropped");
        }
    });
}

fn schedule_analysis(text: String, delay: Duration, tx: mpsc::Sender<Action>) {
    debug!("Scheduling sample analysis in {:?}", delay);
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        if tx.send(Action::ScheduledAnalysis(text)).is_err() {
            warn!("Failed to send scheduled analysis: receiver dropped");
        }
    });
}

/// Runs an action through the reducer and performs the resulting effect.
/// Returns true when the app should quit.
fn dispatch(
    app: &mut App,
    tui: &mut TuiState,
    action: Action,
    client: &Arc<dyn PredictionClient>,
    tx: &mpsc::Sender<Action>,
) -> bool {
    match update(app, action) {
        Effect::None => {}
        Effect::Quit => return true,
        Effect::SpawnRequest { attempt, request } => {
            spawn_request(client.clone(), attempt, request, tx.clone());
        }
        Effect::ScheduleAnalysis { text, delay } => {
            schedule_analysis(text, delay, tx.clone());
        }
        Effect::RevealResult => {
            tui.result_panel.reveal();
            tui.focus = Control::Results;
        }
    }
    false
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let client = build_client(&config);
    let mut app = App::new(&config, client.endpoint());
    let mut tui = TuiState::new(app.samples.clone());
    info!("Prediction endpoint: {}", app.api_endpoint);

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = match TerminalModeGuard::new() {
        Ok(guard) => Some(guard),
        Err(e) => {
            warn!("Failed to enable terminal modes: {}", e);
            None
        }
    };

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    let start_time = Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        let loading = app.ui_state == UiState::Loading;
        if loading || app.prune_notifications(Instant::now()) {
            needs_redraw = true;
        }

        let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
        tui.sync(&app, spinner_frame);

        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        let timeout = if loading {
            Duration::from_millis(80)
        } else if !app.notifications.is_empty() {
            Duration::from_millis(250)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if let Some(action) = handle_event(&mut tui, &event) {
                should_quit |= dispatch(&mut app, &mut tui, action, &client, &tx);
                // Keep the analyze button's enabled flag current within the batch
                tui.sync(&app, spinner_frame);
            }
        }

        // Handle background task actions (analysis results, sample timers)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            should_quit |= dispatch(&mut app, &mut tui, action, &client, &tx);
        }

        if should_quit {
            info!("Quitting");
            break;
        }
    }

    ratatui::restore();
    Ok(())
}
