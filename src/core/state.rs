//! # Application State
//!
//! Core business state for the detector. This module contains domain logic
//! only, no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── input: String                  // message being composed
//! ├── ui_state: UiState              // Idle / Loading / ResultShown / ErrorShown
//! ├── in_flight: Option<Attempt>     // the one outstanding request, if any
//! ├── result: Option<ResultView>     // last rendered verdict (None = hidden)
//! ├── notifications: Vec<Notification>
//! ├── samples: Vec<String>           // clickable sample messages
//! ├── sample_delay: Duration         // pause before a sample auto-analyzes
//! ├── notification_ttl: Duration     // alert lifetime
//! ├── status_message: String         // title bar text
//! └── api_endpoint: String           // where requests go (display only)
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use std::time::{Duration, Instant};

use crate::core::config::ResolvedConfig;
use crate::core::notification::{Level, Notification};
use crate::core::report::ResultView;

/// Where the current analysis attempt stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiState {
    #[default]
    Idle,
    Loading,
    ResultShown,
    ErrorShown,
}

/// The request currently on the wire.
#[derive(Debug, Clone, PartialEq)]
pub struct Attempt {
    pub id: String,
    /// Text exactly as sent, used for the character metric in the result.
    pub text: String,
}

pub struct App {
    pub input: String,
    pub ui_state: UiState,
    pub in_flight: Option<Attempt>,
    /// Sample waiting out its delay. Only the latest selection is analyzed.
    pub pending_sample: Option<String>,
    pub result: Option<ResultView>,
    pub notifications: Vec<Notification>,
    pub samples: Vec<String>,
    pub sample_delay: Duration,
    pub notification_ttl: Duration,
    pub status_message: String,
    pub api_endpoint: String,
}

impl App {
    pub fn new(config: &ResolvedConfig, api_endpoint: String) -> Self {
        Self {
            input: String::new(),
            ui_state: UiState::Idle,
            in_flight: None,
            pending_sample: None,
            result: None,
            notifications: Vec::new(),
            samples: config.samples.clone(),
            sample_delay: config.sample_delay,
            notification_ttl: config.notification_ttl,
            status_message: String::from("Type a message or pick a sample"),
            api_endpoint,
        }
    }

    /// The submit control is usable whenever no request is outstanding.
    pub fn submit_enabled(&self) -> bool {
        self.ui_state != UiState::Loading
    }

    pub fn notify(&mut self, level: Level, message: impl Into<String>) {
        self.notifications
            .push(Notification::new(level, message, Instant::now()));
    }

    /// Drops expired notifications. Returns true if any were removed.
    pub fn prune_notifications(&mut self, now: Instant) -> bool {
        let before = self.notifications.len();
        let ttl = self.notification_ttl;
        self.notifications.retain(|n| !n.is_expired(now, ttl));
        self.notifications.len() != before
    }
}
