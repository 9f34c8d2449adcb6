//! API Response Handler
//!
//! Applies responses from the background API service to the model.

use crate::logic::errors::{classify_error, format_error_message, ErrorType};
use crate::logic::summary::summarize_config;
use crate::model::{ConfirmAction, Severity, Tab};
use crate::services::ApiResponse;
use crate::App;

/// Record the connection outcome and build the user-facing failure text
fn failure(app: &mut App, prefix: &str, error: &anyhow::Error) -> String {
    app.model.backend.record_failure(error);
    tracing::warn!("{}: {:#}", prefix, error);
    format!("{}: {}", prefix, format_error_message(error))
}

/// Handle API response from background service
///
/// Responses are applied in arrival order; a late answer overwrites an
/// earlier one for the same view.
pub fn handle_api_response(app: &mut App, response: ApiResponse) {
    match response {
        ApiResponse::ConfigsResult { files } => match files {
            Ok(files) => {
                app.model.backend.record_success();
                tracing::debug!(count = files.len(), "configurations loaded");
                app.model.configs.set_files(files);
            }
            Err(e) => {
                // Prior listing stays on screen
                let msg = failure(app, "Failed to load configurations", &e);
                app.model.notify(msg, Severity::Error);
            }
        },

        ApiResponse::ConfigResult { name, config } => match config {
            Ok(config) => {
                app.model.backend.record_success();
                let summary = summarize_config(&name, &config);
                app.model.ui.confirm = Some(ConfirmAction::DownloadAfterView { name, summary });
            }
            Err(e) => {
                // The backend refusing differs from never getting an answer
                let prefix = if classify_error(&e) == ErrorType::Rejected {
                    "Failed to load configuration"
                } else {
                    "Failed to view configuration"
                };
                let msg = failure(app, prefix, &e);
                app.model.notify(msg, Severity::Error);
            }
        },

        ApiResponse::EditConfigResult { name, config } => match config {
            Ok(config) => {
                app.model.backend.record_success();
                app.model.form.load_for_edit(&name, &config);
                app.model.ui.active_tab = Tab::Create;
                app.model
                    .notify(format!("Editing '{}'", name), Severity::Info);
            }
            Err(e) => {
                let msg = failure(app, "Failed to load configuration", &e);
                app.model.notify(msg, Severity::Error);
            }
        },

        ApiResponse::DownloadResult { name, path } => match path {
            Ok(path) => {
                app.model.backend.record_success();
                tracing::info!(%name, path = %path.display(), "configuration downloaded");
                app.model
                    .notify(format!("Saved {}", path.display()), Severity::Success);
            }
            Err(e) => {
                let msg = failure(app, "Failed to download", &e);
                app.model.notify(msg, Severity::Error);
            }
        },

        ApiResponse::DeleteResult { name, message } => match message {
            Ok(message) => {
                app.model.backend.record_success();
                tracing::info!(%name, "configuration deleted");
                app.model.notify(message, Severity::Success);
                app.load_configs();
            }
            Err(e) => {
                let msg = failure(app, "Failed to delete", &e);
                app.model.notify(msg, Severity::Error);
            }
        },

        ApiResponse::CreateResult { name, message } => match message {
            Ok(message) => {
                app.model.backend.record_success();
                tracing::info!(%name, "configuration created");
                finish_submit(app, message);
            }
            Err(e) => {
                // Form keeps its values for correction
                let msg = failure(app, "Failed to create", &e);
                app.model.notify(msg, Severity::Error);
            }
        },

        ApiResponse::UpdateResult { name, message } => match message {
            Ok(message) => {
                app.model.backend.record_success();
                tracing::info!(%name, "configuration updated");
                finish_submit(app, message);
            }
            Err(e) => {
                let msg = failure(app, "Failed to update", &e);
                app.model.notify(msg, Severity::Error);
            }
        },

        ApiResponse::TemplatesResult { templates } => match templates {
            Ok(templates) => {
                app.model.backend.record_success();
                tracing::debug!(count = templates.len(), "templates loaded");
                app.model.templates.set_templates(templates);
            }
            Err(e) => {
                let msg = failure(app, "Failed to load templates", &e);
                app.model.notify(msg, Severity::Error);
            }
        },

        ApiResponse::ApplyTemplateResult {
            template,
            new_name,
            message,
        } => match message {
            Ok(message) => {
                app.model.backend.record_success();
                tracing::info!(%template, %new_name, "template applied");
                app.model.notify(message, Severity::Success);
                app.switch_tab(Tab::Configs);
            }
            Err(e) => {
                let msg = failure(app, "Failed to apply template", &e);
                app.model.notify(msg, Severity::Error);
            }
        },
    }
}

/// Successful create/update: clear the form and go back to the list shortly
fn finish_submit(app: &mut App, message: String) {
    app.model.notify(message, Severity::Success);
    app.model.form.reset();
    app.model.ui.pending_tab_switch = Some((Tab::Configs, std::time::Instant::now()));
}
