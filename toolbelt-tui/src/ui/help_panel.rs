//! Help panel — global bindings and per-panel key summaries.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

use crate::app::AppState;
use crate::input::key_bindings;
use crate::theme;

const PANEL_KEYS: [(&str, &str); 9] = [
    ("Text", "u/l/t/r transforms, c clear"),
    ("Stats", "counts update while editing"),
    ("JSON", "f format, m minify, a analyze"),
    ("Encode", "b/B base64, u/U url"),
    ("Color", "Enter converts #RRGGBB"),
    ("Password", "g generate, u/l/d/s classes, +/- length"),
    ("QR", "g generate"),
    ("Calc", "keypad is live; Tab leaves the panel"),
    ("Units", "f/t pick units, Enter converts"),
];

pub fn render(f: &mut Frame, area: Rect, _app: &AppState) {
    let mut lines = vec![Line::from(Span::styled("Global keys", theme::accent_bold()))];
    for (keys, what) in key_bindings() {
        lines.push(Line::from(vec![
            Span::styled(format!("  {keys:<18}"), theme::accent()),
            Span::styled(what, theme::text_secondary()),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Panel keys", theme::accent_bold())));
    for (panel, keys) in PANEL_KEYS {
        lines.push(Line::from(vec![
            Span::styled(format!("  {panel:<10}"), theme::neutral()),
            Span::styled(keys, theme::text_secondary()),
        ]));
    }

    let para = Paragraph::new(lines).wrap(Wrap { trim: false });
    f.render_widget(para, area);
}
