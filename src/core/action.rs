//! # Actions
//!
//! Everything that can happen in the detector becomes an `Action`.
//! User presses Enter? That's `Action::Submit`.
//! API responds? That's `Action::AnalysisFinished { .. }`.
//!
//! The `update()` function takes the current state and an action,
//! mutates the state, and returns an `Effect` describing any I/O the caller
//! must perform. No side effects here. I/O happens elsewhere.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! The analysis lifecycle is a small state machine:
//!
//! ```text
//! Idle ──Submit──▶ Loading ──Ok──▶ ResultShown ──Clear──▶ Idle
//!                     │
//!                     └───Err──▶ ErrorShown ──Clear──▶ Idle
//! ```
//!
//! A submit from `ResultShown` or `ErrorShown` goes straight to `Loading`.
//! While `Loading`, submits are ignored: only one request is ever in flight.

use std::time::Duration;

use chrono::Utc;
use log::{debug, info, warn};

use crate::core::input::{sanitize_paste, validate};
use crate::core::notification::Level;
use crate::core::report::ResultView;
use crate::core::state::{App, Attempt, UiState};
use crate::prediction::{AnalysisRequest, AnalysisResult, RequestError};

/// Shown for every failed request. Details go to the log.
pub const REQUEST_FAILED_MESSAGE: &str = "Could not analyze the message. Please try again.";
pub const SAMPLE_QUEUED_MESSAGE: &str = "Sample loaded, analyzing...";
pub const SAMPLE_WHILE_LOADING_MESSAGE: &str = "Wait for the current analysis to finish.";

#[derive(Debug)]
pub enum Action {
    Quit,
    InputChar(char),
    Backspace,
    Paste(String),
    /// Analyze the current input.
    Submit,
    /// Empty the input and hide the result.
    Clear,
    /// Fill the input with a sample and analyze it after a short pause.
    SelectSample(usize),
    /// The pause after `SelectSample` elapsed.
    ScheduledAnalysis(String),
    AnalysisFinished {
        attempt: String,
        outcome: Result<AnalysisResult, RequestError>,
    },
}

/// I/O the event loop must perform after an update.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    Quit,
    SpawnRequest {
        attempt: String,
        request: AnalysisRequest,
    },
    ScheduleAnalysis {
        text: String,
        delay: Duration,
    },
    /// Bring the result region into view.
    RevealResult,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Quit => Effect::Quit,
        Action::InputChar(c) => {
            app.pending_sample = None;
            app.input.push(c);
            Effect::None
        }
        Action::Backspace => {
            app.pending_sample = None;
            app.input.pop();
            Effect::None
        }
        Action::Paste(data) => {
            app.pending_sample = None;
            app.input.push_str(&sanitize_paste(&data));
            Effect::None
        }
        Action::Submit => {
            app.pending_sample = None;
            let text = app.input.clone();
            start_analysis(app, &text)
        }
        Action::Clear => {
            app.pending_sample = None;
            app.input.clear();
            app.result = None;
            // A request already on the wire keeps running; its verdict still lands
            if app.ui_state != UiState::Loading {
                app.ui_state = UiState::Idle;
                app.status_message = String::from("Type a message or pick a sample");
            }
            Effect::None
        }
        Action::SelectSample(index) => {
            if !app.submit_enabled() {
                app.notify(Level::Warning, SAMPLE_WHILE_LOADING_MESSAGE);
                return Effect::None;
            }
            let Some(sample) = app.samples.get(index).cloned() else {
                warn!("Sample index {} out of range ({} samples)", index, app.samples.len());
                return Effect::None;
            };
            info!("Sample {} selected", index);
            app.input = sample.clone();
            app.pending_sample = Some(sample.clone());
            app.notify(Level::Info, SAMPLE_QUEUED_MESSAGE);
            Effect::ScheduleAnalysis {
                text: sample,
                delay: app.sample_delay,
            }
        }
        Action::ScheduledAnalysis(text) => {
            if app.pending_sample.as_deref() != Some(text.as_str()) {
                debug!("Scheduled analysis superseded, dropping");
                return Effect::None;
            }
            app.pending_sample = None;
            start_analysis(app, &text)
        }
        Action::AnalysisFinished { attempt, outcome } => finish_analysis(app, attempt, outcome),
    }
}

fn start_analysis(app: &mut App, text: &str) -> Effect {
    if !app.submit_enabled() {
        debug!("Analysis requested while a request is in flight, ignoring");
        return Effect::None;
    }

    let request = match validate(text) {
        Ok(request) => request,
        Err(e) => {
            info!("Validation failed: {:?}", e);
            app.notify(Level::Warning, e.to_string());
            return Effect::None;
        }
    };

    let attempt = uuid::Uuid::new_v4().to_string();
    info!(
        "Starting analysis attempt {} ({} chars)",
        attempt,
        request.text.chars().count()
    );

    app.ui_state = UiState::Loading;
    app.result = None;
    app.status_message = String::from("Analyzing...");
    app.in_flight = Some(Attempt {
        id: attempt.clone(),
        text: request.text.clone(),
    });

    Effect::SpawnRequest { attempt, request }
}

fn finish_analysis(
    app: &mut App,
    attempt: String,
    outcome: Result<AnalysisResult, RequestError>,
) -> Effect {
    let in_flight = match app.in_flight.take() {
        Some(current) if current.id == attempt => current,
        other => {
            warn!("Ignoring completion for stale attempt {}", attempt);
            app.in_flight = other;
            return Effect::None;
        }
    };

    match outcome {
        Ok(result) => {
            let view = ResultView::new(&result, &in_flight.text, Utc::now());
            info!(
                "Attempt {} finished: {} (probability={}, confidence={})",
                attempt,
                result.prediction,
                view.probability(),
                view.confidence()
            );
            app.status_message = format!("{} ({})", view.headline(), view.band.label());
            app.result = Some(view);
            app.ui_state = UiState::ResultShown;
            Effect::RevealResult
        }
        Err(e) => {
            warn!("Attempt {} failed: {}", attempt, e);
            app.ui_state = UiState::ErrorShown;
            app.status_message = String::from("Analysis failed");
            app.notify(Level::Danger, REQUEST_FAILED_MESSAGE);
            Effect::None
        }
    }
}
