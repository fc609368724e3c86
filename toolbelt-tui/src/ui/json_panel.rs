//! JSON panel — format, minify, analyze.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::AppState;
use crate::theme;
use crate::ui::text_box;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let report_height = if app.json.report.is_some() { 5 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Min(3),
            Constraint::Length(report_height),
        ])
        .split(area);

    let hint = Paragraph::new(Span::styled(
        "[e]dit  [f]ormat  [m]inify  [a]nalyze  [c]lear  [y]copy",
        theme::muted(),
    ));
    f.render_widget(hint, chunks[0]);

    text_box(f, chunks[1], "Input", &app.json.input, app.editing);
    text_box(f, chunks[2], "Output", &app.json.output, false);

    if let Some(report) = &app.json.report {
        let lines: Vec<Line> = report
            .lines()
            .into_iter()
            .map(|l| Line::from(Span::styled(l, theme::neutral())))
            .collect();
        f.render_widget(Paragraph::new(lines), chunks[3]);
    }
}
