//! # ModelCard Component
//!
//! Illustrative charts about the model behind the API: metric comparison
//! between the base and optimized SVM, F1 convergence during the
//! hyperparameter search, and how the dataset was split.
//!
//! All data is static (see `core::model_card`). Toggled with F2.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Gauge, Sparkline};

use crate::core::model_card::{
    BASE_SVM_METRICS, DATASET_SPLIT, METRIC_LABELS, OPTIMIZED_SVM_METRICS, dataset_total,
    f1_convergence, split_percent,
};
use crate::tui::component::Component;

/// Rows the card needs to show everything.
pub const MODEL_CARD_HEIGHT: u16 = 21;

const BASE_COLOR: Color = Color::Gray;
const OPTIMIZED_COLOR: Color = Color::Blue;
const SPLIT_COLORS: [Color; 3] = [Color::Blue, Color::Green, Color::Yellow];

pub struct ModelCard;

/// Bars hold hundredths of a percent so 91.16 vs 92.63 stays visible.
fn metric_bar(value: f64, color: Color) -> Bar<'static> {
    Bar::default()
        .value((value * 100.0).round() as u64)
        .text_value(format!("{value:.1}"))
        .style(Style::default().fg(color))
        .value_style(Style::default().fg(Color::Black).bg(color))
}

fn metric_groups() -> Vec<BarGroup<'static>> {
    METRIC_LABELS
        .iter()
        .zip(BASE_SVM_METRICS.iter().zip(OPTIMIZED_SVM_METRICS.iter()))
        .map(|(label, (base, tuned))| {
            BarGroup::default()
                .label(Line::from(*label))
                .bars(&[metric_bar(*base, BASE_COLOR), metric_bar(*tuned, OPTIMIZED_COLOR)])
        })
        .collect()
}

impl ModelCard {
    fn render_comparison(frame: &mut Frame, area: Rect) {
        let mut chart = BarChart::default()
            .block(Block::bordered().title(" Performance (%) · gray: base, blue: optimized "))
            .bar_width(5)
            .bar_gap(1)
            .group_gap(3)
            .max(10_000);
        for group in metric_groups() {
            chart = chart.data(group);
        }
        frame.render_widget(chart, area);
    }

    fn render_convergence(frame: &mut Frame, area: Rect) {
        let series: Vec<u64> = f1_convergence()
            .iter()
            .map(|f1| (f1 * 1000.0).round() as u64)
            .collect();
        let sparkline = Sparkline::default()
            .block(Block::bordered().title(" F1 convergence over 100 trials "))
            .data(&series)
            .max(1000)
            .style(Style::default().fg(OPTIMIZED_COLOR));
        frame.render_widget(sparkline, area);
    }

    fn render_dataset(frame: &mut Frame, area: Rect) {
        let block = Block::bordered().title(format!(" Dataset ({} samples) ", dataset_total()));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::vertical([Constraint::Length(1); 3]).split(inner);
        for (((label, samples), color), row) in DATASET_SPLIT
            .iter()
            .zip(SPLIT_COLORS.iter())
            .zip(rows.iter())
        {
            let pct = split_percent(*samples);
            let gauge = Gauge::default()
                .gauge_style(Style::default().fg(*color).bg(Color::DarkGray))
                .percent(pct as u16)
                .label(format!("{label} {samples} ({pct}%)"));
            frame.render_widget(gauge, *row);
        }
    }
}

impl Component for ModelCard {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [bars, sparkline, dataset] = Layout::vertical([
            Constraint::Length(11),
            Constraint::Length(5),
            Constraint::Length(5),
        ])
        .areas(area);

        Self::render_comparison(frame, bars);
        Self::render_convergence(frame, sparkline);
        Self::render_dataset(frame, dataset);
    }
}
