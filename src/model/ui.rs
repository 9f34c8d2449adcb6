//! UI Model
//!
//! This sub-model contains all state related to the user interface:
//! the active tab, dialogs, the notification and pending timers.

use std::time::Instant;

use super::types::{ConfirmAction, Notification, Severity, Tab, TemplatePrompt};

/// UI preferences and popups
#[derive(Clone, Debug)]
pub struct UiModel {
    // ============================================
    // NAVIGATION
    // ============================================
    /// The one active tab
    pub active_tab: Tab,

    /// Whether vim keybindings are enabled
    pub vim_mode: bool,

    // ============================================
    // DIALOGS & POPUPS
    // ============================================
    /// Yes/no confirmation dialog
    pub confirm: Option<ConfirmAction>,

    /// New-name prompt for applying a template
    pub prompt: Option<TemplatePrompt>,

    /// Notification toast
    pub notification: Option<Notification>,

    // ============================================
    // TIMERS
    // ============================================
    /// Tab switch scheduled after a successful create (tab, scheduled at)
    pub pending_tab_switch: Option<(Tab, Instant)>,

    /// Whether app should quit
    pub should_quit: bool,
}

impl UiModel {
    pub fn new(vim_mode: bool) -> Self {
        Self {
            active_tab: Tab::Configs,
            vim_mode,
            confirm: None,
            prompt: None,
            notification: None,
            pending_tab_switch: None,
            should_quit: false,
        }
    }

    /// Check if any modal dialog is currently showing
    pub fn has_modal(&self) -> bool {
        self.confirm.is_some() || self.prompt.is_some()
    }

    /// Close all modal dialogs
    pub fn close_all_modals(&mut self) {
        self.confirm = None;
        self.prompt = None;
    }

    /// Replace the notification on screen (last write wins, no queue)
    pub fn notify(&mut self, message: impl Into<String>, severity: Severity) {
        self.notification = Some(Notification {
            message: message.into(),
            severity,
            shown_at: Instant::now(),
        });
    }

    /// Check if the notification on screen has outlived its display time
    pub fn should_dismiss_notification(&self) -> bool {
        if let Some(notification) = &self.notification {
            crate::logic::ui::should_dismiss_notification(
                notification.shown_at.elapsed().as_millis(),
            )
        } else {
            false
        }
    }

    pub fn dismiss_notification(&mut self) {
        self.notification = None;
    }

    /// Take the scheduled tab switch if its delay has passed
    pub fn take_due_tab_switch(&mut self) -> Option<Tab> {
        let (tab, scheduled_at) = self.pending_tab_switch?;
        if crate::logic::ui::is_tab_switch_due(scheduled_at.elapsed().as_millis()) {
            self.pending_tab_switch = None;
            Some(tab)
        } else {
            None
        }
    }
}
