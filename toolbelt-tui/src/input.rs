//! Keyboard input dispatch — dialogs → history overlay → edit mode →
//! calculator keypad → global keys → panel-specific handlers.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use toolbelt_core::text::CaseAction;

use crate::app::{AppState, Panel};

/// Handle a key event and update app state.
pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    // 1. The frontmost dialog consumes input first.
    if app.overlays.has_dialog() {
        handle_dialog_key(app, key);
        return;
    }

    // 2. Notification history overlay.
    if app.show_history {
        handle_history_key(app, key);
        return;
    }

    // 3. Edit mode captures printable keys into the active input buffer.
    if app.editing {
        handle_edit_key(app, key);
        return;
    }

    // 4. The calculator claims its keypad while active; leave it with Tab.
    if app.active_panel == Panel::Calc && handle_calc_key(app, key) {
        return;
    }

    // 5. Global keys.
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.running = false;
            return;
        }
        KeyCode::Char('q') => {
            app.request_quit();
            return;
        }
        KeyCode::Char(c @ '0'..='9') => {
            // 1-9 map to the first nine panels, 0 to the last.
            let idx = if c == '0' {
                Panel::COUNT - 1
            } else {
                (c as usize) - ('1' as usize)
            };
            if let Some(panel) = Panel::from_index(idx) {
                app.select_panel(panel);
            }
            return;
        }
        KeyCode::Tab => {
            app.select_panel(app.active_panel.next());
            return;
        }
        KeyCode::BackTab => {
            app.select_panel(app.active_panel.prev());
            return;
        }
        KeyCode::Char('e') => {
            if app.active_panel_editable() {
                app.editing = true;
            } else {
                app.set_warning(format!(
                    "{} panel has no text input",
                    app.active_panel.label()
                ));
            }
            return;
        }
        KeyCode::Char('n') => {
            app.show_history = true;
            app.history_scroll = 0;
            return;
        }
        KeyCode::Char('y') => {
            app.copy_output();
            return;
        }
        KeyCode::Char('x') | KeyCode::Esc => {
            app.overlays.dismiss_front();
            return;
        }
        _ => {}
    }

    // 6. Panel-specific keys.
    match app.active_panel {
        Panel::Text => handle_text_key(app, key),
        Panel::Stats => handle_clear_only_key(app, key),
        Panel::Json => handle_json_key(app, key),
        Panel::Encode => handle_encode_key(app, key),
        Panel::Color => handle_color_key(app, key),
        Panel::Password => handle_password_key(app, key),
        Panel::Qr => handle_qr_key(app, key),
        Panel::Calc => {} // fully handled above
        Panel::Units => handle_units_key(app, key),
        Panel::Help => {}
    }
}

fn handle_dialog_key(app: &mut AppState, key: KeyEvent) {
    let confirmed = match key.code {
        KeyCode::Char('y') | KeyCode::Enter => true,
        KeyCode::Char('n') | KeyCode::Esc => false,
        _ => return,
    };
    if let Some((action, true)) = app.overlays.resolve_front(confirmed) {
        app.apply_action(action);
    }
}

fn handle_history_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('n') => {
            app.show_history = false;
        }
        KeyCode::Char('j') | KeyCode::Down => {
            if app.history_scroll + 1 < app.overlays.history().len() {
                app.history_scroll += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.history_scroll = app.history_scroll.saturating_sub(1);
        }
        _ => {}
    }
}

fn handle_edit_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.editing = false;
        }
        KeyCode::Enter => {
            if app.active_input_multiline() {
                if let Some(buf) = app.active_input_mut() {
                    buf.push('\n');
                }
                app.after_edit();
            } else {
                // Single-line panels convert on Enter and leave edit mode.
                app.editing = false;
                match app.active_panel {
                    Panel::Color => app.color_convert(),
                    Panel::Units => app.units_convert(),
                    _ => {}
                }
            }
        }
        KeyCode::Backspace => {
            if let Some(buf) = app.active_input_mut() {
                buf.pop();
            }
            app.after_edit();
        }
        KeyCode::Char(c) => {
            if let Some(buf) = app.active_input_mut() {
                buf.push(c);
            }
            app.after_edit();
        }
        _ => {}
    }
}

/// Calculator keypad. Returns true if the key was consumed.
fn handle_calc_key(app: &mut AppState, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char(c)
            if c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | '*' | '/' | '%' | '(' | ')') =>
        {
            app.calc.calc.push(c);
            app.calc.error = None;
            true
        }
        KeyCode::Char('=') | KeyCode::Enter => {
            app.calc_evaluate();
            true
        }
        KeyCode::Backspace => {
            app.calc.calc.delete_last();
            app.calc.error = None;
            true
        }
        KeyCode::Char('c') if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.clear_panel(Panel::Calc);
            true
        }
        _ => false,
    }
}

fn handle_text_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('u') => app.text_transform(CaseAction::Upper),
        KeyCode::Char('l') => app.text_transform(CaseAction::Lower),
        KeyCode::Char('t') => app.text_transform(CaseAction::Title),
        KeyCode::Char('r') => app.text_transform(CaseAction::Reverse),
        KeyCode::Char('c') => app.request_clear(),
        _ => {}
    }
}

fn handle_clear_only_key(app: &mut AppState, key: KeyEvent) {
    if key.code == KeyCode::Char('c') {
        app.request_clear();
    }
}

fn handle_json_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('f') => app.json_pretty(),
        KeyCode::Char('m') => app.json_minify(),
        KeyCode::Char('a') => app.json_analyze(),
        KeyCode::Char('c') => app.request_clear(),
        _ => {}
    }
}

fn handle_encode_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('b') => app.encode_base64(),
        KeyCode::Char('B') => app.decode_base64(),
        KeyCode::Char('u') => app.encode_url(),
        KeyCode::Char('U') => app.decode_url(),
        KeyCode::Char('c') => app.request_clear(),
        _ => {}
    }
}

fn handle_color_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.color_convert(),
        KeyCode::Char('c') => app.request_clear(),
        _ => {}
    }
}

fn handle_password_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('g') => app.password_generate(),
        KeyCode::Char('u') => app.password.spec.uppercase = !app.password.spec.uppercase,
        KeyCode::Char('l') => app.password.spec.lowercase = !app.password.spec.lowercase,
        KeyCode::Char('d') => app.password.spec.digits = !app.password.spec.digits,
        KeyCode::Char('s') => app.password.spec.symbols = !app.password.spec.symbols,
        KeyCode::Char('+') | KeyCode::Up => {
            app.password.spec.length = (app.password.spec.length + 1).min(64);
        }
        KeyCode::Char('-') | KeyCode::Down => {
            app.password.spec.length = app.password.spec.length.saturating_sub(1).max(4);
        }
        _ => {}
    }
}

fn handle_qr_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('g') => app.qr_generate(),
        KeyCode::Char('c') => app.request_clear(),
        _ => {}
    }
}

fn handle_units_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('f') => app.units.from = app.units.from.next(),
        KeyCode::Char('t') => app.units.to = app.units.to.next(),
        KeyCode::Enter => app.units_convert(),
        KeyCode::Char('c') => app.request_clear(),
        _ => {}
    }
}

/// Global key bindings shown on the help panel.
pub fn key_bindings() -> Vec<(&'static str, &'static str)> {
    vec![
        ("q / Ctrl+C", "Quit (q asks first)"),
        ("1-9, 0", "Jump to panel"),
        ("Tab / Shift+Tab", "Next / previous panel"),
        ("e", "Edit the panel's input (Esc to leave)"),
        ("y", "Copy panel output to clipboard"),
        ("n", "Notification history"),
        ("x / Esc", "Dismiss oldest toast"),
        ("y / n (in dialog)", "Confirm / cancel"),
    ]
}
