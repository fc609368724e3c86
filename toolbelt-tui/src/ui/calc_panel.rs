//! Calculator panel — expression display plus keypad hints.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::AppState;
use crate::theme;
use crate::ui::text_box;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(2),
        ])
        .split(area);

    let hint = Paragraph::new(Span::styled(
        "digits and + - * / % ( ) type directly  [Enter/=] evaluate  [Backspace] delete  [c]lear  (switch panels with Tab)",
        theme::muted(),
    ));
    f.render_widget(hint, chunks[0]);

    let display = if let Some(err) = &app.calc.error {
        err.as_str()
    } else {
        app.calc.calc.expression()
    };
    text_box(f, chunks[1], "Display", display, app.calc.error.is_none());

    if app.calc.error.is_some() {
        f.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "expression cleared — start again",
                theme::negative(),
            ))),
            chunks[2],
        );
    }
}
