//! Encode panel — base64 and URL percent encoding, both directions.

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
        "[e]dit  [b]ase64 encode  [B] decode  [u]rl encode  [U] decode  [c]lear  [y]copy",
        theme::muted(),
    ));
    f.render_widget(hint, chunks[0]);

    text_box(f, chunks[1], "Input", &app.encode.input, app.editing);
    text_box(f, chunks[2], "Output", &app.encode.output, false);
}
