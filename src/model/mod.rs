//! Pure Application Model - Elm Architecture
//!
//! This module defines the pure, cloneable state for the application.
//! The Model is organized into focused sub-models:
//!
//! - **UiModel**: active tab, dialogs, notification, timers
//! - **ConfigsModel / TemplatesModel**: the last fetched listings
//! - **CreateFormModel**: create/edit form including mapped-folder rows
//! - **BackendModel**: backend URL and connection state
//!
//! No services live here: all I/O goes through the App's request channel.

pub mod backend;
pub mod configs;
pub mod form;
pub mod types;
pub mod ui;

pub use backend::BackendModel;
pub use configs::{ConfigsModel, TemplatesModel};
pub use form::CreateFormModel;
pub use types::*;
pub use ui::UiModel;

/// Root application model composed of focused sub-models
#[derive(Clone, Debug)]
pub struct Model {
    pub ui: UiModel,
    pub configs: ConfigsModel,
    pub templates: TemplatesModel,
    pub form: CreateFormModel,
    pub backend: BackendModel,
}

impl Model {
    pub fn new(base_url: String, vim_mode: bool) -> Self {
        Self {
            ui: UiModel::new(vim_mode),
            configs: ConfigsModel::new(),
            templates: TemplatesModel::new(),
            form: CreateFormModel::new(),
            backend: BackendModel::new(base_url),
        }
    }

    /// Check if any modal dialog is showing
    pub fn has_modal(&self) -> bool {
        self.ui.has_modal()
    }

    /// Show a notification
    pub fn notify(&mut self, message: impl Into<String>, severity: Severity) {
        self.ui.notify(message, severity);
    }
}
