//! Overlay service — transient toasts and confirm dialogs.
//!
//! An explicit context object owned by `AppState`, not a global: input
//! handlers call into it, the renderer reads from it, and tests drive it
//! without a terminal.

use std::collections::VecDeque;

use chrono::NaiveDateTime;

use crate::app::Panel;

/// Toasts kept in the notification history overlay.
const HISTORY_CAP: usize = 50;

/// Toast severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Warning,
    Info,
}

impl ToastKind {
    /// Title used when the caller does not supply one.
    pub fn default_title(self) -> &'static str {
        match self {
            ToastKind::Success => "Success",
            ToastKind::Error => "Error",
            ToastKind::Warning => "Warning",
            ToastKind::Info => "Info",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ToastKind::Success => "OK",
            ToastKind::Error => "ERR",
            ToastKind::Warning => "WARN",
            ToastKind::Info => "INFO",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DialogId(u64);

/// A dismissible, non-blocking notification.
#[derive(Debug, Clone)]
pub struct Toast {
    pub id: ToastId,
    pub kind: ToastKind,
    pub title: String,
    pub message: String,
    pub created: NaiveDateTime,
}

/// Deferred action carried by a confirm dialog, run only on confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingAction {
    Quit,
    ClearPanel(Panel),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Pending,
    Confirmed,
    Cancelled,
}

/// A modal overlay awaiting one of two terminal user actions.
#[derive(Debug, Clone)]
pub struct ConfirmDialog {
    pub id: DialogId,
    pub title: String,
    pub message: String,
    pub resolution: Resolution,
    action: PendingAction,
}

/// Active toasts, pending dialogs, and a bounded notification history.
#[derive(Debug, Default)]
pub struct Overlays {
    toasts: VecDeque<Toast>,
    dialogs: Vec<ConfirmDialog>,
    history: VecDeque<Toast>,
    next_id: u64,
}

impl Overlays {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    /// Mount a toast. Returns its id so the caller can dismiss it later.
    pub fn notify(
        &mut self,
        kind: ToastKind,
        title: Option<&str>,
        message: impl Into<String>,
    ) -> ToastId {
        let id = ToastId(self.next_id());
        let toast = Toast {
            id,
            kind,
            title: title.unwrap_or(kind.default_title()).to_string(),
            message: message.into(),
            created: chrono::Local::now().naive_local(),
        };
        self.history.push_back(toast.clone());
        while self.history.len() > HISTORY_CAP {
            self.history.pop_front();
        }
        self.toasts.push_back(toast);
        id
    }

    pub fn success(&mut self, message: impl Into<String>) -> ToastId {
        self.notify(ToastKind::Success, None, message)
    }

    pub fn error(&mut self, message: impl Into<String>) -> ToastId {
        self.notify(ToastKind::Error, None, message)
    }

    pub fn warning(&mut self, message: impl Into<String>) -> ToastId {
        self.notify(ToastKind::Warning, None, message)
    }

    pub fn info(&mut self, message: impl Into<String>) -> ToastId {
        self.notify(ToastKind::Info, None, message)
    }

    /// Tear down one toast. A second call with the same id returns `None`;
    /// the mount is removed exactly once.
    pub fn dismiss(&mut self, id: ToastId) -> Option<Toast> {
        let idx = self.toasts.iter().position(|t| t.id == id)?;
        self.toasts.remove(idx)
    }

    /// Dismiss the oldest visible toast.
    pub fn dismiss_front(&mut self) -> Option<Toast> {
        self.toasts.pop_front()
    }

    pub fn toasts(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn toast_count(&self) -> usize {
        self.toasts.len()
    }

    /// Mount a confirm dialog. Dialogs are independent: several may be
    /// pending at once, each resolvable on its own.
    pub fn confirm(
        &mut self,
        title: impl Into<String>,
        message: impl Into<String>,
        action: PendingAction,
    ) -> DialogId {
        let id = DialogId(self.next_id());
        self.dialogs.push(ConfirmDialog {
            id,
            title: title.into(),
            message: message.into(),
            resolution: Resolution::Pending,
            action,
        });
        id
    }

    /// Resolve a dialog. The first call removes it and reports the deferred
    /// action with the user's choice; later calls return `None`.
    pub fn resolve(&mut self, id: DialogId, confirmed: bool) -> Option<(PendingAction, bool)> {
        let idx = self.dialogs.iter().position(|d| d.id == id)?;
        let mut dialog = self.dialogs.remove(idx);
        dialog.resolution = if confirmed {
            Resolution::Confirmed
        } else {
            Resolution::Cancelled
        };
        Some((dialog.action, confirmed))
    }

    /// Resolve the frontmost dialog, the one currently shown on top.
    pub fn resolve_front(&mut self, confirmed: bool) -> Option<(PendingAction, bool)> {
        let id = self.front_dialog()?.id;
        self.resolve(id, confirmed)
    }

    /// The dialog rendered on top: most recently mounted.
    pub fn front_dialog(&self) -> Option<&ConfirmDialog> {
        self.dialogs.last()
    }

    pub fn has_dialog(&self) -> bool {
        !self.dialogs.is_empty()
    }

    pub fn dialog_count(&self) -> usize {
        self.dialogs.len()
    }

    pub fn history(&self) -> &VecDeque<Toast> {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notify_uses_default_title_per_kind() {
        let mut overlays = Overlays::new();
        overlays.success("saved");
        overlays.notify(ToastKind::Warning, Some("Heads up"), "check this");

        let toasts: Vec<_> = overlays.toasts().collect();
        assert_eq!(toasts[0].title, "Success");
        assert_eq!(toasts[1].title, "Heads up");
    }

    #[test]
    fn dismiss_removes_exactly_once() {
        let mut overlays = Overlays::new();
        let id = overlays.info("hello");
        assert_eq!(overlays.toast_count(), 1);

        assert!(overlays.dismiss(id).is_some());
        assert_eq!(overlays.toast_count(), 0);
        // Double-teardown guard.
        assert!(overlays.dismiss(id).is_none());
    }

    #[test]
    fn dismissing_one_toast_leaves_the_others() {
        let mut overlays = Overlays::new();
        let a = overlays.info("a");
        let b = overlays.error("b");

        overlays.dismiss(a);
        let remaining: Vec<_> = overlays.toasts().collect();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, b);
    }

    #[test]
    fn two_pending_dialogs_resolve_independently() {
        let mut overlays = Overlays::new();
        let first = overlays.confirm("Quit", "Really quit?", PendingAction::Quit);
        let second = overlays.confirm(
            "Clear",
            "Discard input?",
            PendingAction::ClearPanel(Panel::Json),
        );
        assert_eq!(overlays.dialog_count(), 2);

        // Resolve the second (frontmost) first; the first stays pending.
        assert_eq!(
            overlays.resolve(second, false),
            Some((PendingAction::ClearPanel(Panel::Json), false))
        );
        assert_eq!(overlays.dialog_count(), 1);
        assert_eq!(overlays.front_dialog().unwrap().id, first);

        assert_eq!(overlays.resolve(first, true), Some((PendingAction::Quit, true)));
        assert_eq!(overlays.dialog_count(), 0);
    }

    #[test]
    fn dialog_cannot_resolve_twice() {
        let mut overlays = Overlays::new();
        let id = overlays.confirm("Quit", "Really?", PendingAction::Quit);
        assert!(overlays.resolve(id, true).is_some());
        assert!(overlays.resolve(id, true).is_none());
        assert!(overlays.resolve(id, false).is_none());
    }

    #[test]
    fn history_keeps_dismissed_toasts() {
        let mut overlays = Overlays::new();
        let id = overlays.warning("transient");
        overlays.dismiss(id);
        assert_eq!(overlays.toast_count(), 0);
        assert_eq!(overlays.history().len(), 1);
    }

    #[test]
    fn history_is_bounded() {
        let mut overlays = Overlays::new();
        for i in 0..(HISTORY_CAP + 10) {
            overlays.info(format!("toast {i}"));
        }
        assert_eq!(overlays.history().len(), HISTORY_CAP);
        assert_eq!(overlays.history().front().unwrap().message, "toast 10");
    }
}
