//! # Toasts Component
//!
//! Renders the live notifications as a stack in the top-right corner,
//! drawn over whatever is underneath. Expiry is the core's job; this only
//! draws what is still alive.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Clear, Paragraph, Wrap};
use unicode_width::UnicodeWidthStr;

use crate::core::notification::{Level, Notification};
use crate::tui::component::Component;

/// Widest a toast gets, borders included.
const MAX_TOAST_WIDTH: u16 = 44;
const HORIZONTAL_OVERHEAD: u16 = 2;
const VERTICAL_OVERHEAD: u16 = 2;

pub struct Toasts<'a> {
    pub notifications: &'a [Notification],
}

fn level_style(level: Level) -> (Style, &'static str) {
    match level {
        Level::Info => (Style::default().fg(Color::Cyan), " Info "),
        Level::Warning => (Style::default().fg(Color::Yellow), " Warning "),
        Level::Danger => (Style::default().fg(Color::Red), " Error "),
    }
}

/// Area of one toast, given the screen and the row it starts at.
pub fn toast_area(screen: Rect, top: u16, message: &str) -> Rect {
    let max_width = MAX_TOAST_WIDTH.min(screen.width).max(HORIZONTAL_OVERHEAD + 1);
    let min_width = (HORIZONTAL_OVERHEAD + 10).min(max_width);
    let text_width = (message.width() as u16).saturating_add(HORIZONTAL_OVERHEAD);
    let width = text_width.clamp(min_width, max_width);
    let inner = width.saturating_sub(HORIZONTAL_OVERHEAD).max(1) as usize;
    let lines = textwrap::wrap(message, inner).len() as u16;
    let height = lines.max(1) + VERTICAL_OVERHEAD;
    Rect::new(
        screen.right().saturating_sub(width + 1),
        top,
        width.min(screen.width),
        height,
    )
    .intersection(screen)
}

impl Component for Toasts<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        // Newest on top
        let mut top = area.y + 1;
        for notification in self.notifications.iter().rev() {
            if top >= area.bottom() {
                break;
            }
            let rect = toast_area(area, top, &notification.message);
            let (style, title) = level_style(notification.level);
            let toast = Paragraph::new(notification.message.as_str())
                .wrap(Wrap { trim: true })
                .block(Block::bordered().title(title).border_style(style))
                .style(style);

            frame.render_widget(Clear, rect);
            frame.render_widget(toast, rect);
            top = rect.bottom();
        }
    }
}
