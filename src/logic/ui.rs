//! UI state transition logic
//!
//! Pure functions for tab cycling and the two UI timers.

use crate::model::Tab;

/// How long a notification stays on screen
pub const NOTIFICATION_DISMISS_MS: u128 = 3000;

/// Delay between a successful create and the switch back to the list
pub const POST_CREATE_SWITCH_MS: u128 = 1500;

/// Check if a notification shown `elapsed_ms` ago should be dismissed
///
/// The elapsed time is always measured from the notification currently on
/// screen, so an older message's timer can never hide a newer one.
///
/// # Examples
/// ```
/// use sandtui::logic::ui::should_dismiss_notification;
///
/// assert!(!should_dismiss_notification(2999));
/// assert!(should_dismiss_notification(3000));
/// ```
pub fn should_dismiss_notification(elapsed_ms: u128) -> bool {
    elapsed_ms >= NOTIFICATION_DISMISS_MS
}

/// Check if a scheduled post-create tab switch is due
pub fn is_tab_switch_due(elapsed_ms: u128) -> bool {
    elapsed_ms >= POST_CREATE_SWITCH_MS
}

/// Cycle to the next tab: Configs → Create → Templates → Configs
///
/// # Examples
/// ```
/// use sandtui::model::Tab;
/// use sandtui::logic::ui::next_tab;
///
/// assert_eq!(next_tab(Tab::Configs), Tab::Create);
/// assert_eq!(next_tab(Tab::Templates), Tab::Configs);
/// ```
pub fn next_tab(current: Tab) -> Tab {
    match current {
        Tab::Configs => Tab::Create,
        Tab::Create => Tab::Templates,
        Tab::Templates => Tab::Configs,
    }
}

/// Cycle to the previous tab
pub fn prev_tab(current: Tab) -> Tab {
    match current {
        Tab::Configs => Tab::Templates,
        Tab::Create => Tab::Configs,
        Tab::Templates => Tab::Create,
    }
}

/// Move a list selection by `delta`, clamped to the list bounds
pub fn move_selection(current: Option<usize>, len: usize, delta: isize) -> Option<usize> {
    if len == 0 {
        return None;
    }

    let current = current.unwrap_or(0) as isize;
    let next = (current + delta).clamp(0, len as isize - 1);
    Some(next as usize)
}
