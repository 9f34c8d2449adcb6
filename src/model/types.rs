//! Shared types for the Model
//!
//! These types are used across multiple sub-models and represent
//! fundamental domain concepts.

use std::time::Instant;

/// The fixed set of tabs; exactly one is active at any time
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tab {
    Configs,
    Create,
    Templates,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Configs, Tab::Create, Tab::Templates];

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Configs => "Configurations",
            Tab::Create => "Create",
            Tab::Templates => "Templates",
        }
    }
}

/// Notification severity (drives toast colour and icon)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Info,
    Success,
    Error,
}

/// The single notification on screen
#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
    pub shown_at: Instant,
}

/// Blocking yes/no dialogs
#[derive(Clone, Debug, PartialEq)]
pub enum ConfirmAction {
    /// Irreversible delete of a configuration
    DeleteConfig { name: String },

    /// Configuration summary; confirming downloads it
    DownloadAfterView { name: String, summary: Vec<String> },
}

/// Text prompt for the name of a configuration created from a template
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TemplatePrompt {
    pub template: String,
    pub input: String,
}
