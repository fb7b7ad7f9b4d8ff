//! # InputBox Component
//!
//! The message field and its character counter.
//!
//! ## Responsibilities
//!
//! - Translate key presses into edit events while focused
//! - Display the message with word wrapping
//! - Display the `n/280` counter, coloured by how close the text is to the limit
//!
//! ## State Management
//!
//! The text is a prop from the application state: the core owns the message
//! because sample selection and clearing rewrite it.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};
use unicode_width::UnicodeWidthStr;

use crate::core::input::{CounterLevel, char_count, counter_label};
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Borders (1 top + 1 bottom).
const VERTICAL_OVERHEAD: u16 = 2;
/// Borders (1 left + 1 right).
const HORIZONTAL_OVERHEAD: u16 = 2;
/// The field grows with its content up to this many lines.
const MAX_VISIBLE_LINES: u16 = 6;

/// High-level events emitted by the InputBox
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    Char(char),
    Backspace,
    Paste(String),
    Submit,
}

/// # Props
///
/// - `text`: Current message (from App state)
/// - `focused`: Whether the field has keyboard focus
/// - `dimmed`: Rendered dim while a request is in flight
pub struct InputBox {
    pub text: String,
    pub focused: bool,
    pub dimmed: bool,
}

fn wrap_options(width: usize) -> textwrap::Options<'static> {
    textwrap::Options::new(width)
        .break_words(true)
        .word_separator(textwrap::WordSeparator::AsciiSpace)
}

impl InputBox {
    pub fn new() -> Self {
        Self {
            text: String::new(),
            focused: true,
            dimmed: false,
        }
    }

    /// Wrapped lines of the current text at the given outer width.
    fn wrapped_lines(&self, outer_width: u16) -> Vec<String> {
        let width = outer_width.saturating_sub(HORIZONTAL_OVERHEAD) as usize;
        if width == 0 || self.text.is_empty() {
            return vec![String::new()];
        }
        textwrap::wrap(&self.text, wrap_options(width))
            .into_iter()
            .map(|line| line.into_owned())
            .collect()
    }

    /// Required height for the current text, clamped to the visible maximum.
    pub fn calculate_height(&self, outer_width: u16) -> u16 {
        let lines = self.wrapped_lines(outer_width).len() as u16;
        lines.clamp(1, MAX_VISIBLE_LINES) + VERTICAL_OVERHEAD
    }

    fn counter_style(&self) -> Style {
        let color = match CounterLevel::for_count(char_count(&self.text)) {
            CounterLevel::Normal => Color::Gray,
            CounterLevel::Caution => Color::Yellow,
            CounterLevel::Limit => Color::Red,
        };
        Style::default().fg(color)
    }
}

impl Default for InputBox {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for InputBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = match (self.focused, self.dimmed) {
            (_, true) => Style::default().add_modifier(Modifier::DIM),
            (true, false) => Style::default().fg(Color::Cyan),
            (false, false) => Style::default(),
        };

        let counter = Line::from(Span::styled(
            format!(" {} ", counter_label(&self.text)),
            self.counter_style(),
        ))
        .right_aligned();

        let block = Block::bordered()
            .title(" Message ")
            .title_bottom(counter)
            .border_style(border_style);

        let lines = self.wrapped_lines(area.width);
        let visible = area.height.saturating_sub(VERTICAL_OVERHEAD).max(1) as usize;
        // Keep the tail (where typing happens) visible
        let skip = lines.len().saturating_sub(visible);

        let paragraph = Paragraph::new(lines[skip..].join("\n"))
            .block(block)
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, area);

        if self.focused && !self.dimmed {
            let last = lines.last().map(|l| l.width()).unwrap_or(0) as u16;
            let row = (lines.len() - skip).saturating_sub(1) as u16;
            let x = (area.x + 1 + last).min(area.right().saturating_sub(2));
            frame.set_cursor_position((x, area.y + 1 + row));
        }
    }
}

impl EventHandler for InputBox {
    type Event = InputEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => Some(InputEvent::Char(*c)),
            TuiEvent::Backspace => Some(InputEvent::Backspace),
            TuiEvent::Paste(data) => Some(InputEvent::Paste(data.clone())),
            TuiEvent::Submit => Some(InputEvent::Submit),
            _ => None,
        }
    }
}
