//! # TitleBar Component
//!
//! Top status bar: which endpoint requests go to, and what the detector is
//! doing right now.
//!
//! Stateless: every field is a prop set by the parent before rendering.
//!
//! ## Conditional Formatting
//!
//! 1. **Loading**: `"Stress Detector (api: …) | ⠋ Analyzing..."`
//! 2. **Status message**: `"Stress Detector (api: …) | Stress detected (High confidence)"`
//! 3. **Default**: `"Stress Detector (api: …)"`

use crate::tui::component::Component;
use crate::tui::components::spinner;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;

pub struct TitleBar {
    /// Full URL of the prediction endpoint
    pub api_endpoint: String,
    /// Status text from App state
    pub status_message: String,
    /// Whether a request is in flight (adds a spinner)
    pub loading: bool,
    pub spinner_frame: usize,
}

impl TitleBar {
    pub fn new(
        api_endpoint: String,
        status_message: String,
        loading: bool,
        spinner_frame: usize,
    ) -> Self {
        Self {
            api_endpoint,
            status_message,
            loading,
            spinner_frame,
        }
    }

    fn text(&self) -> String {
        if self.loading {
            format!(
                "Stress Detector (api: {}) | {} {}",
                self.api_endpoint,
                spinner(self.spinner_frame),
                self.status_message
            )
        } else if self.status_message.is_empty() {
            format!("Stress Detector (api: {})", self.api_endpoint)
        } else {
            format!(
                "Stress Detector (api: {}) | {}",
                self.api_endpoint, self.status_message
            )
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let span = Span::styled(self.text(), Style::default().add_modifier(Modifier::BOLD));
        frame.render_widget(span, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn rendered(title_bar: &mut TitleBar) -> String {
        let backend = TestBackend::new(100, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                title_bar.render(f, f.area());
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_title_bar_with_status_message() {
        let mut title_bar = TitleBar::new(
            "http://localhost:8000/predict".to_string(),
            "Stress detected (High confidence)".to_string(),
            false,
            0,
        );
        let text = rendered(&mut title_bar);
        assert!(text.contains("Stress Detector"));
        assert!(text.contains("http://localhost:8000/predict"));
        assert!(text.contains("Stress detected (High confidence)"));
    }

    #[test]
    fn test_title_bar_default_no_status() {
        let mut title_bar = TitleBar::new("http://x/predict".to_string(), "".to_string(), false, 0);
        let text = rendered(&mut title_bar);
        assert!(text.contains("Stress Detector"));
        assert!(!text.contains('|'));
    }

    #[test]
    fn test_title_bar_loading_shows_spinner() {
        let title_bar = TitleBar::new("http://x/predict".to_string(), "Analyzing...".to_string(), true, 3);
        assert!(title_bar.text().contains(spinner(3)));
        assert!(title_bar.text().contains("Analyzing..."));
    }
}
