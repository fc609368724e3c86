//! Units panel — length conversion through the meter base.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use toolbelt_core::units::LengthUnit;

use crate::app::AppState;
use crate::theme;
use crate::ui::text_box;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(2),
        ])
        .split(area);

    let hint = Paragraph::new(Span::styled(
        "[e]dit value  [f]rom unit  [t]o unit  [Enter] convert  [c]lear  [y]copy",
        theme::muted(),
    ));
    f.render_widget(hint, chunks[0]);

    text_box(f, chunks[1], "Value", &app.units.input, app.editing);

    let unit_span = |unit: LengthUnit, selected: LengthUnit| {
        if unit == selected {
            Span::styled(format!(" {unit} "), theme::accent_bold())
        } else {
            Span::styled(format!(" {unit} "), theme::muted())
        }
    };
    let mut spans = vec![Span::styled("from:", theme::muted())];
    for unit in LengthUnit::ALL {
        spans.push(unit_span(unit, app.units.from));
    }
    spans.push(Span::raw("   "));
    spans.push(Span::styled("to:", theme::muted()));
    for unit in LengthUnit::ALL {
        spans.push(unit_span(unit, app.units.to));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), chunks[2]);

    if let Some(result) = &app.units.result {
        f.render_widget(
            Paragraph::new(Span::styled(result.as_str(), theme::positive())),
            chunks[3],
        );
    } else if let Some(err) = &app.units.error {
        f.render_widget(
            Paragraph::new(Span::styled(err.as_str(), theme::negative())),
            chunks[3],
        );
    }
}
