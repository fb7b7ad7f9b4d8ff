use crate::core::state::App;
use crate::tui::component::Component;
use crate::tui::components::model_card::MODEL_CARD_HEIGHT;
use crate::tui::components::{ModelCard, ResultPanel, TitleBar, Toasts};
use crate::tui::{Control, TuiState};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Style};
use ratatui::text::Span;

const HELP_TEXT: &str =
    "Enter analyze · Tab focus · ↑↓ samples/scroll · Ctrl+L clear · F2 model card · Esc quit";

/// Width of the analyze button slot (fits the busy label and spinner).
const ANALYZE_BUTTON_WIDTH: u16 = 20;
const CLEAR_BUTTON_WIDTH: u16 = 11;

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min, Percentage};

    let [title_area, body_area, help_area] =
        Layout::vertical([Length(1), Min(0), Length(1)]).areas(frame.area());

    let mut title_bar = TitleBar::new(
        app.api_endpoint.clone(),
        app.status_message.clone(),
        !app.submit_enabled(),
        spinner_frame,
    );
    title_bar.render(frame, title_area);

    let [left_area, right_area] =
        Layout::horizontal([Percentage(45), Percentage(55)]).areas(body_area);

    // Left column: message, buttons, samples
    let input_height = tui.input_box.calculate_height(left_area.width);
    let [input_area, buttons_area, samples_area] =
        Layout::vertical([Length(input_height), Length(1), Min(3)]).areas(left_area);

    tui.input_box.render(frame, input_area);

    let [analyze_area, _gap, clear_area] = Layout::horizontal([
        Length(ANALYZE_BUTTON_WIDTH),
        Length(1),
        Length(CLEAR_BUTTON_WIDTH),
    ])
    .areas(buttons_area);
    tui.analyze_button.render(frame, analyze_area);
    tui.clear_button.render(frame, clear_area);

    tui.sample_list.render(frame, samples_area);

    // Right column: result, optionally the model card below it
    let result_area = if tui.show_model_card {
        let [result_area, card_area] =
            Layout::vertical([Min(8), Length(MODEL_CARD_HEIGHT)]).areas(right_area);
        ModelCard.render(frame, card_area);
        result_area
    } else {
        right_area
    };

    let mut result_panel = ResultPanel {
        state: &mut tui.result_panel,
        ui_state: app.ui_state,
        view: app.result.as_ref(),
        focused: tui.focus == Control::Results,
        spinner_frame,
    };
    result_panel.render(frame, result_area);

    frame.render_widget(
        Span::styled(HELP_TEXT, Style::default().fg(Color::DarkGray)),
        help_area,
    );

    // Notifications float above everything else
    let mut toasts = Toasts {
        notifications: &app.notifications,
    };
    toasts.render(frame, body_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, Effect, update};
    use crate::prediction::Prediction;
    use crate::test_support::{sample_result, test_app};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(app: &App, tui: &mut TuiState) -> String {
        let backend = TestBackend::new(120, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        tui.sync(app, 0);
        terminal.draw(|f| draw_ui(f, app, tui, 0)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    fn show_result(app: &mut App, text: &str) {
        app.input = text.to_string();
        let Effect::SpawnRequest { attempt, .. } = update(app, Action::Submit) else {
            panic!("expected a request");
        };
        update(
            app,
            Action::AnalysisFinished {
                attempt,
                outcome: Ok(sample_result(Prediction::Stress, 0.8, 0.9)),
            },
        );
    }

    #[test]
    fn test_draw_idle_screen() {
        let app = test_app();
        let mut tui = TuiState::new(app.samples.clone());
        let text = render(&app, &mut tui);
        assert!(text.contains("Stress Detector"));
        assert!(text.contains("0/280"));
        assert!(text.contains("[ Analyze ]"));
        assert!(text.contains("Results appear here"));
    }

    #[test]
    fn test_draw_result() {
        let mut app = test_app();
        let mut tui = TuiState::new(app.samples.clone());
        show_result(&mut app, "Too many deadlines this week");
        let text = render(&app, &mut tui);
        assert!(text.contains("Stress detected"));
        assert!(text.contains("80%"));
        assert!(text.contains("90%"));
    }

    #[test]
    fn test_clear_after_result_hides_it_and_resets_counter() {
        let mut app = test_app();
        let mut tui = TuiState::new(app.samples.clone());
        show_result(&mut app, "Too many deadlines this week");
        update(&mut app, Action::Clear);

        let text = render(&app, &mut tui);
        assert!(!text.contains("Stress detected"));
        assert!(text.contains("0/280"));
        assert!(text.contains("Results appear here"));
    }

    #[test]
    fn test_draw_loading_disables_analyze_button() {
        let mut app = test_app();
        let mut tui = TuiState::new(app.samples.clone());
        app.input = "hello".to_string();
        update(&mut app, Action::Submit);

        let text = render(&app, &mut tui);
        assert!(text.contains("Analyzing..."));
        assert!(!text.contains("[ Analyze ]"));
        assert!(!tui.analyze_button.enabled);
    }

    #[test]
    fn test_draw_with_model_card_and_notification() {
        let mut app = test_app();
        let mut tui = TuiState::new(app.samples.clone());
        tui.show_model_card = true;
        update(&mut app, Action::Submit); // empty input → warning

        let text = render(&app, &mut tui);
        assert!(text.contains("Dataset"));
        assert!(text.contains("Please enter a message to analyze."));
    }

    #[test]
    fn test_draw_tiny_terminal() {
        let app = test_app();
        let mut tui = TuiState::new(app.samples.clone());
        let backend = TestBackend::new(10, 4);
        let mut terminal = Terminal::new(backend).unwrap();
        tui.sync(&app, 0);
        terminal.draw(|f| draw_ui(f, &app, &mut tui, 0)).unwrap();
    }
}
