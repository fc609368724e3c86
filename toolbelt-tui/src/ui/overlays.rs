//! Overlay widgets — toast stack, confirm dialog, notification history.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::AppState;
use crate::overlay::ConfirmDialog;
use crate::theme;
use crate::ui::centered_rect;

const TOAST_WIDTH: u16 = 38;
const TOAST_HEIGHT: u16 = 4;
const MAX_VISIBLE_TOASTS: usize = 4;

/// Stack active toasts in the top-right corner, oldest on top.
pub fn render_toasts(f: &mut Frame, area: Rect, app: &AppState) {
    let width = TOAST_WIDTH.min(area.width);
    let x = area.right().saturating_sub(width);

    for (i, toast) in app.overlays.toasts().take(MAX_VISIBLE_TOASTS).enumerate() {
        let y = area.y + (i as u16) * TOAST_HEIGHT;
        if y + TOAST_HEIGHT > area.bottom() {
            break;
        }
        let rect = Rect::new(x, y, width, TOAST_HEIGHT);
        f.render_widget(Clear, rect);

        let style = theme::toast(toast.kind);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(style)
            .title(format!(" {} [x] ", toast.title))
            .title_style(style);

        let para = Paragraph::new(Span::styled(toast.message.as_str(), theme::text()))
            .block(block)
            .wrap(Wrap { trim: true });
        f.render_widget(para, rect);
    }
}

/// The frontmost confirm dialog, centered.
pub fn render_dialog(f: &mut Frame, area: Rect, dialog: &ConfirmDialog, pending: usize) {
    let popup = centered_rect(50, 25, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::warning())
        .title(format!(" {} ", dialog.title))
        .title_style(theme::warning());

    let mut text = vec![
        Line::from(""),
        Line::from(Span::styled(dialog.message.as_str(), theme::text())),
        Line::from(""),
        Line::from(vec![
            Span::styled("[y/Enter]", theme::positive()),
            Span::styled(" confirm   ", theme::muted()),
            Span::styled("[n/Esc]", theme::negative()),
            Span::styled(" cancel", theme::muted()),
        ]),
    ];
    if pending > 1 {
        text.push(Line::from(Span::styled(
            format!("({} more pending)", pending - 1),
            theme::muted(),
        )));
    }

    let para = Paragraph::new(text).block(block).wrap(Wrap { trim: true });
    f.render_widget(para, popup);
}

/// Notification history overlay.
pub fn render_history(f: &mut Frame, area: Rect, app: &AppState) {
    let popup = centered_rect(70, 70, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::accent())
        .title(format!(
            " Notifications ({}) [Esc]close [j/k]scroll ",
            app.overlays.history().len()
        ))
        .title_style(theme::accent_bold());

    let inner = block.inner(popup);
    f.render_widget(block, popup);

    if app.overlays.history().is_empty() {
        let text = Paragraph::new(Span::styled("No notifications yet.", theme::muted()));
        f.render_widget(text, inner);
        return;
    }

    let visible_height = inner.height as usize;
    let start = app.history_scroll;
    let end = (start + visible_height).min(app.overlays.history().len());

    let mut lines: Vec<Line> = Vec::new();
    for i in start..end {
        let toast = &app.overlays.history()[i];
        let style = if i == app.history_scroll {
            theme::text()
        } else {
            theme::text_secondary()
        };

        lines.push(Line::from(vec![
            Span::styled(
                format!("[{}] ", toast.created.format("%H:%M:%S")),
                theme::muted(),
            ),
            Span::styled(format!("[{}] ", toast.kind.label()), theme::toast(toast.kind)),
            Span::styled(format!("{}: ", toast.title), theme::toast(toast.kind)),
            Span::styled(toast.message.as_str(), style),
        ]));
    }

    let para = Paragraph::new(lines);
    f.render_widget(para, inner);
}
