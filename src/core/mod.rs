//! # Core Application Logic
//!
//! This module contains the detector's business logic.
//! It knows nothing about any specific UI technology or transport.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                   ┌────────────┴────────────┐
//!                   ▼                         ▼
//!            ┌────────────┐            ┌────────────┐
//!            │    TUI     │            │ Prediction │
//!            │  Adapter   │            │   Client   │
//!            │ (ratatui)  │            │ (reqwest)  │
//!            └────────────┘            └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct — all application state in one place
//! - [`action`]: The `Action` enum and `update()` reducer
//! - [`input`]: Message validation and character counter rules
//! - [`report`]: Percentages, confidence bands, the result view
//! - [`notification`]: Auto-dismissing alerts
//! - [`model_card`]: Static model metrics for the charts
//! - [`config`]: Settings resolution

pub mod action;
pub mod config;
pub mod input;
pub mod model_card;
pub mod notification;
pub mod report;
pub mod state;
