//! Stats panel — live character/word/line counts.

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
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);

    let hint = Paragraph::new(Span::styled(
        "[e]dit — counts update as you type  [c]lear",
        theme::muted(),
    ));
    f.render_widget(hint, chunks[0]);

    text_box(f, chunks[1], "Input", &app.stats.input, app.editing);

    let s = app.stats.stats;
    let line = Line::from(vec![
        Span::styled("chars: ", theme::muted()),
        Span::styled(s.chars.to_string(), theme::accent_bold()),
        Span::styled("   words: ", theme::muted()),
        Span::styled(s.words.to_string(), theme::accent_bold()),
        Span::styled("   lines: ", theme::muted()),
        Span::styled(s.lines.to_string(), theme::accent_bold()),
    ]);
    f.render_widget(Paragraph::new(line), chunks[2]);
}
