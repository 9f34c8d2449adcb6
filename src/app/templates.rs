use crate::model::{Tab, TemplatePrompt};
use crate::services::ApiRequest;
use crate::App;

impl App {
    pub fn load_templates(&mut self) {
        self.send(ApiRequest::ListTemplates);
    }

    /// Ask for the new configuration's name
    pub fn apply_template(&mut self, template: &str) {
        self.model.ui.prompt = Some(TemplatePrompt {
            template: template.to_string(),
            input: String::new(),
        });
    }

    pub fn prompt_insert_char(&mut self, c: char) {
        if let Some(prompt) = &mut self.model.ui.prompt {
            prompt.input.push(c);
        }
    }

    pub fn prompt_backspace(&mut self) {
        if let Some(prompt) = &mut self.model.ui.prompt {
            prompt.input.pop();
        }
    }

    pub fn cancel_prompt(&mut self) {
        self.model.ui.prompt = None;
    }

    /// Close the prompt and apply the template under the entered name
    ///
    /// Blank or whitespace-only input aborts without a request.
    pub fn submit_prompt(&mut self) {
        let Some(prompt) = self.model.ui.prompt.take() else {
            return;
        };

        let new_name = prompt.input.trim();
        if new_name.is_empty() {
            tracing::debug!(template = %prompt.template, "apply aborted, no name given");
            return;
        }

        self.send(ApiRequest::ApplyTemplate {
            template: prompt.template.clone(),
            new_name: new_name.to_string(),
        });
    }

    pub fn selected_template_name(&self) -> Option<String> {
        if self.model.ui.active_tab != Tab::Templates {
            return None;
        }
        self.model
            .templates
            .selected_template()
            .map(|t| t.name.clone())
    }
}
