//! # ResultPanel Component
//!
//! The result region. Shows a placeholder, a loading indicator, the failure
//! hint, or the full verdict depending on the analysis state.
//!
//! The verdict can be taller than the region on small terminals, so it lives
//! in a `ScrollView`. Revealing a fresh result scrolls back to its top.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Gauge, Paragraph, Wrap};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::report::{MODEL_FOOTNOTE, ResultView};
use crate::core::state::UiState;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::spinner;
use crate::tui::event::TuiEvent;

/// Persistent scroll state of the result region.
#[derive(Default)]
pub struct ResultPanelState {
    pub scroll_state: ScrollViewState,
}

impl ResultPanelState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Brings the top of the result into view.
    pub fn reveal(&mut self) {
        self.scroll_state.scroll_to_top();
    }
}

impl EventHandler for ResultPanelState {
    type Event = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::Up => self.scroll_state.scroll_up(),
            TuiEvent::Down => self.scroll_state.scroll_down(),
            TuiEvent::PageUp => self.scroll_state.scroll_page_up(),
            TuiEvent::PageDown => self.scroll_state.scroll_page_down(),
            _ => {}
        }
        None
    }
}

/// Transient renderer, created each frame with the data it needs.
pub struct ResultPanel<'a> {
    pub state: &'a mut ResultPanelState,
    pub ui_state: UiState,
    pub view: Option<&'a ResultView>,
    pub focused: bool,
    pub spinner_frame: usize,
}

fn verdict_color(view: &ResultView) -> Color {
    if view.prediction.is_stress() {
        Color::Red
    } else {
        Color::Green
    }
}

/// Lines above the confidence bar.
pub fn summary_lines(view: &ResultView) -> Vec<Line<'static>> {
    let color = verdict_color(view);
    let icon = if view.prediction.is_stress() { "⚠" } else { "✔" };
    let label = Style::default().fg(Color::DarkGray);
    let number = Style::default().add_modifier(Modifier::BOLD);

    vec![
        Line::from(Span::styled(
            format!("{icon} {}", view.headline()),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(view.description()),
        Line::default(),
        Line::from(vec![
            Span::styled("Probability ", label),
            Span::styled(view.probability(), number),
            Span::styled("   Confidence ", label),
            Span::styled(view.confidence(), number),
            Span::styled("   Characters ", label),
            Span::styled(view.char_count.to_string(), number),
        ]),
        Line::default(),
    ]
}

/// Lines below the confidence bar.
pub fn detail_lines(view: &ResultView) -> Vec<Line<'static>> {
    let muted = Style::default().fg(Color::DarkGray);
    let mut lines = vec![
        Line::default(),
        Line::from(Span::styled(
            view.band.interpretation(),
            Style::default().add_modifier(Modifier::ITALIC),
        )),
    ];

    if let Some(cleaned) = &view.cleaned_text {
        lines.push(Line::default());
        lines.push(Line::from(vec![
            Span::styled("Processed text: ", muted),
            Span::raw(cleaned.clone()),
        ]));
    }

    lines.push(Line::default());
    if let Some(ts) = &view.server_timestamp {
        lines.push(Line::from(Span::styled(format!("Server time: {ts}"), muted)));
    }
    lines.push(Line::from(Span::styled(
        format!(
            "Received: {}",
            view.received_at.with_timezone(&chrono::Local).format("%Y-%m-%d %H:%M:%S")
        ),
        muted,
    )));
    lines.push(Line::from(Span::styled(format!("ⓘ {MODEL_FOOTNOTE}"), muted)));
    lines
}

impl ResultPanel<'_> {
    fn render_placeholder(&self, frame: &mut Frame, area: Rect, text: Line<'static>) {
        let paragraph = Paragraph::new(vec![Line::default(), text])
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }

    fn render_view(&mut self, frame: &mut Frame, area: Rect, view: &ResultView) {
        let width = area.width.saturating_sub(1); // scrollbar column
        let summary = Paragraph::new(summary_lines(view)).wrap(Wrap { trim: true });
        let details = Paragraph::new(detail_lines(view)).wrap(Wrap { trim: true });
        let summary_height = summary.line_count(width) as u16;
        let details_height = details.line_count(width) as u16;
        let gauge_height = 1;

        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(verdict_color(view)).bg(Color::DarkGray))
            .percent(view.confidence_pct as u16)
            .label(format!("Confidence {}", view.confidence()));

        let total = summary_height + gauge_height + details_height;
        let mut scroll_view = ScrollView::new(Size::new(width, total))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        scroll_view.render_widget(summary, Rect::new(0, 0, width, summary_height));
        scroll_view.render_widget(gauge, Rect::new(0, summary_height, width, gauge_height));
        scroll_view.render_widget(
            details,
            Rect::new(0, summary_height + gauge_height, width, details_height),
        );

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }
}

impl Component for ResultPanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        };
        let block = Block::bordered().title(" Result ").border_style(border_style);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        match (self.ui_state, self.view) {
            (UiState::Loading, _) => self.render_placeholder(
                frame,
                inner,
                Line::from(Span::styled(
                    format!("{} Analyzing message...", spinner(self.spinner_frame)),
                    Style::default().fg(Color::Yellow),
                )),
            ),
            (UiState::ResultShown, Some(view)) => self.render_view(frame, inner, view),
            (UiState::ErrorShown, _) => self.render_placeholder(
                frame,
                inner,
                Line::from(Span::styled(
                    "The last analysis failed. Submit again to retry.",
                    Style::default().fg(Color::Red),
                )),
            ),
            _ => self.render_placeholder(
                frame,
                inner,
                Line::from(Span::styled(
                    "Results appear here after an analysis.",
                    Style::default().fg(Color::DarkGray),
                )),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::report::ResultView;
    use crate::prediction::Prediction;
    use crate::test_support::sample_result;
    use chrono::Utc;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(ui_state: UiState, view: Option<&ResultView>) -> String {
        let backend = TestBackend::new(70, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut state = ResultPanelState::new();
        terminal
            .draw(|f| {
                let mut panel = ResultPanel {
                    state: &mut state,
                    ui_state,
                    view,
                    focused: false,
                    spinner_frame: 0,
                };
                panel.render(f, f.area());
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_renders_verdict_and_percentages() {
        let view = ResultView::new(
            &sample_result(Prediction::Stress, 0.8, 0.9),
            "deadline tomorrow",
            Utc::now(),
        );
        let text = draw(UiState::ResultShown, Some(&view));
        assert!(text.contains("Stress detected"));
        assert!(text.contains("80%"));
        assert!(text.contains("90%"));
        assert!(text.contains("High confidence"));
    }

    #[test]
    fn test_renders_placeholders() {
        assert!(draw(UiState::Idle, None).contains("Results appear here"));
        assert!(draw(UiState::Loading, None).contains("Analyzing message"));
        assert!(draw(UiState::ErrorShown, None).contains("Submit again"));
    }

    #[test]
    fn test_detail_lines_include_optional_fields() {
        let mut raw = sample_result(Prediction::NoStress, 0.2, 0.55);
        raw.cleaned_text = Some("nice walk park".to_string());
        raw.timestamp = Some("2024-05-01T10:00:00Z".to_string());
        let view = ResultView::new(&raw, "Nice walk in the park", Utc::now());

        let text: String = detail_lines(&view)
            .iter()
            .map(|l| l.to_string())
            .collect::<Vec<_>>()
            .join("\n");
        assert!(text.contains("nice walk park"));
        assert!(text.contains("2024-05-01T10:00:00Z"));
        assert!(text.contains("Moderate confidence"));
        assert!(text.contains(MODEL_FOOTNOTE));
    }
}
