//! Business Logic
//!
//! This module contains pure business logic functions that can be unit tested:
//! - errors: Error classification and display text
//! - form: Create-form parsing (memory, mapped folders, choice options)
//! - formatting: Byte sizes and timestamps
//! - summary: Configuration summary lines for the view dialog
//! - templates: Template icon lookup
//! - ui: Tab cycling, selection movement and UI timers

pub mod errors;
pub mod form;
pub mod formatting;
pub mod summary;
pub mod templates;
pub mod ui;
