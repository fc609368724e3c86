//! Color panel — hex input, RGB/HSL readout, inline swatch.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
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
            Constraint::Min(4),
        ])
        .split(area);

    let hint = Paragraph::new(Span::styled(
        "[e]dit hex (#RRGGBB)  [Enter] convert  [c]lear  [y]copy",
        theme::muted(),
    ));
    f.render_widget(hint, chunks[0]);

    text_box(f, chunks[1], "Hex", &app.color.input, app.editing);

    let mut lines: Vec<Line> = Vec::new();
    if let (Some(rgb), Some(hsl)) = (app.color.rgb, app.color.hsl) {
        let swatch = Style::default().bg(Color::Rgb(rgb.r, rgb.g, rgb.b));
        lines.push(Line::from(vec![
            Span::styled("        ", swatch),
            Span::raw("  "),
            Span::styled(rgb.to_hex(), theme::accent_bold()),
        ]));
        lines.push(Line::from(Span::styled(rgb.to_string(), theme::text())));
        lines.push(Line::from(Span::styled(hsl.to_string(), theme::text())));
    } else if let Some(err) = &app.color.error {
        lines.push(Line::from(Span::styled(err.as_str(), theme::negative())));
    }
    f.render_widget(Paragraph::new(lines), chunks[2]);
}
