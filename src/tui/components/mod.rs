//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as fields set by the parent:
//! - `TitleBar`: endpoint and status line
//! - `Toasts`: live notifications
//! - `ModelCard`: static model charts
//! - `ResultPanel`: the verdict (borrows its scroll state from `TuiState`)
//!
//! ### Controls (Event-Driven)
//!
//! Focusable components that also implement `EventHandler`:
//! - `InputBox`: message field with character counter
//! - `Button`: analyze / clear
//! - `SampleList`: sample messages
//! - `ResultPanelState`: scrolling of the result region
//!
//! ## Props-Based Data Flow
//!
//! Components receive external data as "props" (struct fields), never by
//! reaching into `App`. The parent copies what each one needs before drawing:
//!
//! ```rust,ignore
//! tui.input_box.text = app.input.clone();
//! tui.input_box.dimmed = !app.submit_enabled();
//! ```

pub mod button;
pub mod input_box;
pub mod model_card;
pub mod result_panel;
pub mod sample_list;
pub mod title_bar;
pub mod toasts;

pub use button::Button;
pub use input_box::{InputBox, InputEvent};
pub use model_card::ModelCard;
pub use result_panel::{ResultPanel, ResultPanelState};
pub use sample_list::{SampleEvent, SampleList};
pub use title_bar::TitleBar;
pub use toasts::Toasts;

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Braille spinner glyph for an animation frame counter.
pub fn spinner(frame: usize) -> &'static str {
    SPINNER_FRAMES[frame % SPINNER_FRAMES.len()]
}
