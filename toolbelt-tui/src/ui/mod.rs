//! Top-level UI layout — one tool panel at a time plus a status bar, with
//! toasts and dialogs drawn on top.

pub mod calc_panel;
pub mod color_panel;
pub mod encode_panel;
pub mod help_panel;
pub mod json_panel;
pub mod overlays;
pub mod password_panel;
pub mod qr_panel;
pub mod stats_panel;
pub mod status_bar;
pub mod text_panel;
pub mod units_panel;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::{AppState, Panel};
use crate::theme;

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &AppState) {
    // Split: main area + 1-line status bar.
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(f.area());

    let main_area = chunks[0];
    let status_area = chunks[1];

    draw_panel(f, main_area, app);
    status_bar::render(f, status_area, app);

    // Overlays on top: toasts, then the history view, then the front dialog.
    overlays::render_toasts(f, main_area, app);
    if app.show_history {
        overlays::render_history(f, main_area, app);
    }
    if let Some(dialog) = app.overlays.front_dialog() {
        overlays::render_dialog(f, main_area, dialog, app.overlays.dialog_count());
    }
}

/// Draw the single active panel with its border.
fn draw_panel(f: &mut Frame, area: Rect, app: &AppState) {
    let panel = app.active_panel;
    let mode = if app.editing { " — editing (Esc done)" } else { "" };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(true))
        .title(format!(" {} [{}]{} ", panel.label(), (panel.index() + 1) % 10, mode))
        .title_style(theme::panel_title(true));

    let inner = block.inner(area);
    f.render_widget(block, area);

    match panel {
        Panel::Text => text_panel::render(f, inner, app),
        Panel::Stats => stats_panel::render(f, inner, app),
        Panel::Json => json_panel::render(f, inner, app),
        Panel::Encode => encode_panel::render(f, inner, app),
        Panel::Color => color_panel::render(f, inner, app),
        Panel::Password => password_panel::render(f, inner, app),
        Panel::Qr => qr_panel::render(f, inner, app),
        Panel::Calc => calc_panel::render(f, inner, app),
        Panel::Units => units_panel::render(f, inner, app),
        Panel::Help => help_panel::render(f, inner, app),
    }
}

/// Compute a centered rect for overlays.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Bordered text box used by the input/output areas of most panels.
pub(crate) fn text_box(f: &mut Frame, area: Rect, title: &str, content: &str, active: bool) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(active))
        .title(format!(" {title} "))
        .title_style(theme::panel_title(active));
    let para = Paragraph::new(content)
        .style(theme::text())
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(para, area);
}
