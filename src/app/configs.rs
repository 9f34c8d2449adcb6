use crate::model::{ConfirmAction, Severity, Tab};
use crate::services::ApiRequest;
use crate::App;

impl App {
    /// Fetch the configuration list; the view updates when the answer arrives
    pub fn load_configs(&mut self) {
        self.send(ApiRequest::ListConfigs);
    }

    pub fn refresh_configs(&mut self) {
        self.model.notify("Refreshing...", Severity::Info);
        self.load_configs();
    }

    /// Fetch one configuration and present its summary for download
    pub fn view_config(&mut self, name: &str) {
        self.send(ApiRequest::GetConfig {
            name: name.to_string(),
        });
    }

    /// Start a download and report success right away
    ///
    /// Completion or failure is reported again when the worker answers.
    pub fn download_config(&mut self, name: &str) {
        self.send(ApiRequest::DownloadConfig {
            name: name.to_string(),
            dest_dir: self.download_dir.clone(),
        });
        self.model
            .notify("Downloading configuration...", Severity::Success);
    }

    /// Ask for confirmation; nothing is sent until the user answers yes
    pub fn delete_config(&mut self, name: &str) {
        self.model.ui.confirm = Some(ConfirmAction::DeleteConfig {
            name: name.to_string(),
        });
    }

    /// Fetch a configuration into the form for editing
    pub fn edit_config(&mut self, name: &str) {
        self.send(ApiRequest::LoadForEdit {
            name: name.to_string(),
        });
    }

    /// Resolve the open confirmation dialog
    pub fn answer_confirm(&mut self, accepted: bool) {
        let Some(action) = self.model.ui.confirm.take() else {
            return;
        };

        if !accepted {
            tracing::debug!(?action, "confirmation declined");
            return;
        }

        match action {
            ConfirmAction::DeleteConfig { name } => {
                self.send(ApiRequest::DeleteConfig { name });
            }
            ConfirmAction::DownloadAfterView { name, .. } => {
                self.download_config(&name);
            }
        }
    }

    /// Name of the highlighted configuration, when the configs tab is showing
    pub fn selected_config_name(&self) -> Option<String> {
        if self.model.ui.active_tab != Tab::Configs {
            return None;
        }
        self.model.configs.selected_file().map(|f| f.name.clone())
    }
}
