//! Password panel — character class toggles, length, generated output.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::AppState;
use crate::theme;
use crate::ui::text_box;

fn checkbox(on: bool) -> &'static str {
    if on {
        "[x]"
    } else {
        "[ ]"
    }
}

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(6),
            Constraint::Length(3),
        ])
        .split(area);

    let hint = Paragraph::new(Span::styled(
        "[g]enerate  [u/l/d/s] toggle classes  [+/-] length  [y]copy",
        theme::muted(),
    ));
    f.render_widget(hint, chunks[0]);

    let spec = &app.password.spec;
    let toggle_style = |on: bool| if on { theme::positive() } else { theme::muted() };
    let lines = vec![
        Line::from(vec![
            Span::styled("length: ", theme::muted()),
            Span::styled(spec.length.to_string(), theme::accent_bold()),
        ]),
        Line::from(Span::styled(
            format!("{} uppercase (u)", checkbox(spec.uppercase)),
            toggle_style(spec.uppercase),
        )),
        Line::from(Span::styled(
            format!("{} lowercase (l)", checkbox(spec.lowercase)),
            toggle_style(spec.lowercase),
        )),
        Line::from(Span::styled(
            format!("{} digits (d)", checkbox(spec.digits)),
            toggle_style(spec.digits),
        )),
        Line::from(Span::styled(
            format!("{} symbols (s)", checkbox(spec.symbols)),
            toggle_style(spec.symbols),
        )),
    ];
    f.render_widget(Paragraph::new(lines), chunks[1]);

    text_box(f, chunks[2], "Generated", &app.password.generated, false);
}
