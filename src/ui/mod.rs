// UI module - handles all TUI rendering using Ratatui
//
// Architecture:
// - layout: Calculates screen layout (tab bar, panel, legend, status bar)
// - render: Main orchestration function that coordinates all rendering
// - tabs: Renders the top tab bar
// - config_list: Renders the saved configurations panel
// - create_form: Renders the create/edit form
// - template_list: Renders the templates panel
// - legend: Renders hotkey legend
// - status_bar: Renders bottom status bar with backend state
// - dialogs: Renders modal dialogs (delete, view summary, template name)
// - toast: Renders toast notifications (brief pop-up messages)

pub mod config_list;
pub mod create_form;
pub mod dialogs;
pub mod layout;
pub mod legend;
pub mod render;
pub mod status_bar;
pub mod tabs;
pub mod template_list;
pub mod toast;

// Re-export main render function for convenience
pub use render::render;
