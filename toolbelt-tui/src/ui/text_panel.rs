//! Text panel — case transforms over a free-form input.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::Span;
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
            Constraint::Min(3),
            Constraint::Min(3),
        ])
        .split(area);

    let hint = Paragraph::new(Span::styled(
        "[e]dit  [u]pper  [l]ower  [t]itle  [r]everse  [c]lear  [y]copy",
        theme::muted(),
    ));
    f.render_widget(hint, chunks[0]);

    text_box(f, chunks[1], "Input", &app.text.input, app.editing);
    text_box(f, chunks[2], "Output", &app.text.output, false);
}
