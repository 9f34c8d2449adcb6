//! List Models
//!
//! Backend listings for the Configurations and Templates tabs. `None` means
//! nothing has been loaded yet; a loaded empty list renders the empty state.

use crate::api::{ConfigFile, TemplateInfo};
use crate::logic::ui::move_selection;

#[derive(Clone, Debug, Default)]
pub struct ConfigsModel {
    pub files: Option<Vec<ConfigFile>>,
    pub selected: Option<usize>,
}

impl ConfigsModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the listing, keeping the selection in range
    pub fn set_files(&mut self, files: Vec<ConfigFile>) {
        self.selected = clamp_selection(self.selected, files.len());
        self.files = Some(files);
    }

    pub fn selected_file(&self) -> Option<&ConfigFile> {
        let files = self.files.as_ref()?;
        self.selected.and_then(|idx| files.get(idx))
    }

    pub fn move_selection(&mut self, delta: isize) {
        let len = self.files.as_ref().map_or(0, Vec::len);
        self.selected = move_selection(self.selected, len, delta);
    }
}

#[derive(Clone, Debug, Default)]
pub struct TemplatesModel {
    pub templates: Option<Vec<TemplateInfo>>,
    pub selected: Option<usize>,
}

impl TemplatesModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_templates(&mut self, templates: Vec<TemplateInfo>) {
        self.selected = clamp_selection(self.selected, templates.len());
        self.templates = Some(templates);
    }

    pub fn selected_template(&self) -> Option<&TemplateInfo> {
        let templates = self.templates.as_ref()?;
        self.selected.and_then(|idx| templates.get(idx))
    }

    pub fn move_selection(&mut self, delta: isize) {
        let len = self.templates.as_ref().map_or(0, Vec::len);
        self.selected = move_selection(self.selected, len, delta);
    }
}

fn clamp_selection(selected: Option<usize>, len: usize) -> Option<usize> {
    if len == 0 {
        None
    } else {
        Some(selected.unwrap_or(0).min(len - 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str) -> ConfigFile {
        ConfigFile {
            name: name.to_string(),
            filename: None,
            modified: String::new(),
            size: 0,
        }
    }

    #[test]
    fn test_initial_state_is_unloaded() {
        let model = ConfigsModel::new();
        assert!(model.files.is_none());
        assert!(model.selected_file().is_none());
    }

    #[test]
    fn test_set_files_selects_first() {
        let mut model = ConfigsModel::new();
        model.set_files(vec![file("a"), file("b")]);
        assert_eq!(model.selected_file().unwrap().name, "a");
    }

    #[test]
    fn test_set_files_clamps_selection_after_shrink() {
        let mut model = ConfigsModel::new();
        model.set_files(vec![file("a"), file("b"), file("c")]);
        model.move_selection(2);
        assert_eq!(model.selected_file().unwrap().name, "c");

        model.set_files(vec![file("a")]);
        assert_eq!(model.selected, Some(0));
    }

    #[test]
    fn test_empty_listing_clears_selection() {
        let mut model = ConfigsModel::new();
        model.set_files(vec![file("a")]);
        model.set_files(vec![]);
        assert_eq!(model.files.as_deref(), Some(&[][..]));
        assert!(model.selected.is_none());
    }

    #[test]
    fn test_template_selection() {
        let mut model = TemplatesModel::new();
        model.set_templates(vec![
            TemplateInfo {
                name: "minimal".to_string(),
                filename: None,
            },
            TemplateInfo {
                name: "secure".to_string(),
                filename: None,
            },
        ]);
        model.move_selection(1);
        assert_eq!(model.selected_template().unwrap().name, "secure");
    }
}
