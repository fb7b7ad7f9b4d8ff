//! # SampleList Component
//!
//! The fixed list of sample messages. Up/Down moves the highlight, Enter or
//! Space picks the highlighted sample.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, List, ListItem, ListState};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

#[derive(Debug, Clone, PartialEq)]
pub enum SampleEvent {
    Select(usize),
}

pub struct SampleList {
    /// Sample texts (Prop)
    pub samples: Vec<String>,
    pub focused: bool,
    list_state: ListState,
}

impl SampleList {
    pub fn new(samples: Vec<String>) -> Self {
        let selected = if samples.is_empty() { None } else { Some(0) };
        Self {
            samples,
            focused: false,
            list_state: ListState::default().with_selected(selected),
        }
    }

    pub fn selected(&self) -> Option<usize> {
        self.list_state.selected()
    }

    fn move_by(&mut self, delta: isize) {
        if self.samples.is_empty() {
            return;
        }
        let last = self.samples.len() - 1;
        let current = self.list_state.selected().unwrap_or(0);
        let next = current.saturating_add_signed(delta).min(last);
        self.list_state.select(Some(next));
    }
}

impl Component for SampleList {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        };

        // One line per sample; long ones are cut by the list
        let items: Vec<ListItem> = self
            .samples
            .iter()
            .map(|s| ListItem::new(s.as_str()))
            .collect();

        let highlight = if self.focused {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };

        let list = List::new(items)
            .block(
                Block::bordered()
                    .title(" Samples ")
                    .border_style(border_style),
            )
            .highlight_style(highlight)
            .highlight_symbol("> ");

        frame.render_stateful_widget(list, area, &mut self.list_state);
    }
}

impl EventHandler for SampleList {
    type Event = SampleEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::Up => {
                self.move_by(-1);
                None
            }
            TuiEvent::Down => {
                self.move_by(1);
                None
            }
            TuiEvent::Submit | TuiEvent::InputChar(' ') => {
                self.list_state.selected().map(SampleEvent::Select)
            }
            _ => None,
        }
    }
}
