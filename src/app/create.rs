use crate::model::form::{FormField, FormMode};
use crate::model::Severity;
use crate::services::ApiRequest;
use crate::App;

impl App {
    pub fn add_mapped_folder(&mut self) {
        self.model.form.add_mapped_folder();
    }

    /// Remove the row whose path input has focus
    pub fn remove_focused_folder(&mut self) {
        if let FormField::FolderPath(idx) = self.model.form.focused_field() {
            self.model.form.remove_mapped_folder(idx);
        }
    }

    pub fn toggle_focused_readonly(&mut self) {
        if let FormField::FolderPath(idx) = self.model.form.focused_field() {
            self.model.form.toggle_readonly(idx);
        }
    }

    /// Serialize the form and send it (POST for create, PUT for edit)
    ///
    /// An empty name is refused locally. The form keeps its values until the
    /// backend confirms.
    pub fn submit_form(&mut self) {
        let payload = self.model.form.to_payload();
        if payload.name.is_empty() {
            self.model
                .notify("Configuration name is required", Severity::Error);
            return;
        }

        let request = match &self.model.form.mode {
            FormMode::Create => ApiRequest::CreateConfig { payload },
            FormMode::Edit { original_name } => ApiRequest::UpdateConfig {
                name: original_name.clone(),
                payload,
            },
        };
        self.send(request);
    }

    /// Leave edit mode and start over with an empty form
    pub fn reset_form(&mut self) {
        self.model.form.reset();
    }
}
