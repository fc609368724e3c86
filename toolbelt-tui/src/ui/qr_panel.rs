//! QR panel — renders the encoded text as unicode blocks, or the encoder
//! error in its place.

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
            Constraint::Length(3),
            Constraint::Min(10),
        ])
        .split(area);

    let hint = Paragraph::new(Span::styled(
        "[e]dit text  [g]enerate  [c]lear",
        theme::muted(),
    ));
    f.render_widget(hint, chunks[0]);

    text_box(f, chunks[1], "Text", &app.qr.input, app.editing);

    if let Some(rendered) = &app.qr.rendered {
        f.render_widget(Paragraph::new(rendered.as_str()), chunks[2]);
    } else if let Some(err) = &app.qr.error {
        f.render_widget(
            Paragraph::new(Span::styled(err.as_str(), theme::negative())),
            chunks[2],
        );
    }
}
