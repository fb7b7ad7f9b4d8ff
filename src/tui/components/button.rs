//! # Button Component
//!
//! A one-line push button. Enter or Space presses it while it has focus.
//! A disabled button swallows presses, which is how the analyze button
//! keeps a second request from going out while one is in flight.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;

use crate::tui::component::{Component, EventHandler};
use crate::tui::components::spinner;
use crate::tui::event::TuiEvent;

pub struct Button {
    pub label: &'static str,
    /// Label shown instead while the action runs (None = keep `label`)
    pub busy_label: Option<&'static str>,
    pub enabled: bool,
    pub focused: bool,
    pub spinner_frame: usize,
    accent: Color,
}

impl Button {
    pub fn new(label: &'static str, accent: Color) -> Self {
        Self {
            label,
            busy_label: None,
            enabled: true,
            focused: false,
            spinner_frame: 0,
            accent,
        }
    }

    pub fn with_busy_label(mut self, busy_label: &'static str) -> Self {
        self.busy_label = Some(busy_label);
        self
    }

    fn text(&self) -> String {
        match (self.enabled, self.busy_label) {
            (false, Some(busy)) => format!("[ {} {} ]", spinner(self.spinner_frame), busy),
            _ => format!("[ {} ]", self.label),
        }
    }

    fn style(&self) -> Style {
        if !self.enabled {
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
        } else if self.focused {
            Style::default()
                .fg(Color::Black)
                .bg(self.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.accent)
        }
    }
}

impl Component for Button {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Span::styled(self.text(), self.style()), area);
    }
}

impl EventHandler for Button {
    /// Unit event: the button was pressed.
    type Event = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        if !self.enabled {
            return None;
        }
        match event {
            TuiEvent::Submit | TuiEvent::InputChar(' ') => Some(()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_keys() {
        let mut button = Button::new("Analyze", Color::Blue);
        assert_eq!(button.handle_event(&TuiEvent::Submit), Some(()));
        assert_eq!(button.handle_event(&TuiEvent::InputChar(' ')), Some(()));
        assert_eq!(button.handle_event(&TuiEvent::InputChar('x')), None);
    }

    #[test]
    fn test_disabled_button_ignores_presses() {
        let mut button = Button::new("Analyze", Color::Blue).with_busy_label("Analyzing...");
        button.enabled = false;
        assert_eq!(button.handle_event(&TuiEvent::Submit), None);
        assert!(button.text().contains("Analyzing..."));
    }

    #[test]
    fn test_label() {
        let button = Button::new("Clear", Color::Gray);
        assert_eq!(button.text(), "[ Clear ]");
    }
}
