//! Create Form Model
//!
//! State of the create/edit form. The mapped-folder row counter lives here,
//! owned by the form, and is reset together with the form.

use crate::api::{ConfigDetails, ConfigPayload};
use crate::logic::form::{
    collect_mapped_folders, cycle_option, option_index, parse_memory, AUDIO_INPUT_VALUES,
    DEFAULT_MEMORY_MB, NETWORKING_VALUES, REDIRECTION_VALUES, VGPU_VALUES, VIDEO_INPUT_VALUES,
};

/// Whether the form creates a new configuration or rewrites an existing one
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit { original_name: String },
}

/// A field restricted to a fixed set of values
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChoiceField {
    pub options: &'static [&'static str],
    pub index: usize,
}

impl ChoiceField {
    pub fn new(options: &'static [&'static str], default: &str) -> Self {
        Self {
            options,
            index: option_index(options, default),
        }
    }

    pub fn value(&self) -> &'static str {
        self.options.get(self.index).copied().unwrap_or_default()
    }

    pub fn cycle(&mut self, forward: bool) {
        self.index = cycle_option(self.options.len(), self.index, forward);
    }

    pub fn set(&mut self, value: &str) {
        self.index = option_index(self.options, value);
    }
}

/// One mapped-folder row: a path input and a read-only checkbox
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MappedFolderRow {
    pub path: String,
    pub readonly: bool,
}

/// Focusable widgets of the form, in tab order
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
    Name,
    Memory,
    Networking,
    VGpu,
    AudioInput,
    VideoInput,
    ClipboardRedirection,
    PrinterRedirection,
    ProtectedClient,
    FolderPath(usize),
    Submit,
}

impl FormField {
    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Memory => "Memory (MB)",
            FormField::Networking => "Networking",
            FormField::VGpu => "vGPU",
            FormField::AudioInput => "Audio Input",
            FormField::VideoInput => "Video Input",
            FormField::ClipboardRedirection => "Clipboard",
            FormField::PrinterRedirection => "Printer",
            FormField::ProtectedClient => "Protected Mode",
            FormField::FolderPath(_) => "Folder",
            FormField::Submit => "Submit",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CreateFormModel {
    pub mode: FormMode,
    pub name: String,
    pub memory_mb: String,
    pub networking: ChoiceField,
    pub vgpu: ChoiceField,
    pub audio_input: ChoiceField,
    pub video_input: ChoiceField,
    pub clipboard_redirection: ChoiceField,
    pub printer_redirection: ChoiceField,
    pub protected_client: ChoiceField,
    pub mapped_folders: Vec<MappedFolderRow>,

    /// Rows added since the last reset; never decremented by removal
    pub mapped_folder_count: usize,

    /// Index into `fields()`
    pub focus: usize,
}

impl Default for CreateFormModel {
    fn default() -> Self {
        Self::new()
    }
}

impl CreateFormModel {
    pub fn new() -> Self {
        Self {
            mode: FormMode::Create,
            name: String::new(),
            memory_mb: DEFAULT_MEMORY_MB.to_string(),
            networking: ChoiceField::new(NETWORKING_VALUES, "Default"),
            vgpu: ChoiceField::new(VGPU_VALUES, "Default"),
            audio_input: ChoiceField::new(AUDIO_INPUT_VALUES, "Default"),
            video_input: ChoiceField::new(VIDEO_INPUT_VALUES, "Default"),
            clipboard_redirection: ChoiceField::new(REDIRECTION_VALUES, "Enable"),
            printer_redirection: ChoiceField::new(REDIRECTION_VALUES, "Enable"),
            protected_client: ChoiceField::new(REDIRECTION_VALUES, "Enable"),
            mapped_folders: Vec::new(),
            mapped_folder_count: 0,
            focus: 0,
        }
    }

    /// Restore defaults, drop every row and zero the row counter
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn is_edit(&self) -> bool {
        matches!(self.mode, FormMode::Edit { .. })
    }

    /// Load an existing configuration for editing; the name is locked
    pub fn load_for_edit(&mut self, name: &str, config: &ConfigDetails) {
        self.reset();
        self.mode = FormMode::Edit {
            original_name: name.to_string(),
        };
        self.name = name.to_string();
        self.memory_mb = config.memory_mb.to_string();
        self.networking.set(&config.networking);
        self.vgpu.set(&config.vgpu);
        self.audio_input.set(&config.audio_input);
        self.video_input.set(&config.video_input);
        self.clipboard_redirection.set(&config.clipboard_redirection);
        self.printer_redirection.set(&config.printer_redirection);
        self.protected_client.set(&config.protected_client);
        self.mapped_folders = config
            .mapped_folders
            .iter()
            .map(|f| MappedFolderRow {
                path: f.path.clone(),
                readonly: f.readonly,
            })
            .collect();
    }

    /// All focusable fields in order (rows sit between the choices and Submit)
    pub fn fields(&self) -> Vec<FormField> {
        let mut fields = vec![
            FormField::Name,
            FormField::Memory,
            FormField::Networking,
            FormField::VGpu,
            FormField::AudioInput,
            FormField::VideoInput,
            FormField::ClipboardRedirection,
            FormField::PrinterRedirection,
            FormField::ProtectedClient,
        ];
        fields.extend((0..self.mapped_folders.len()).map(FormField::FolderPath));
        fields.push(FormField::Submit);
        fields
    }

    pub fn focused_field(&self) -> FormField {
        let fields = self.fields();
        fields
            .get(self.focus)
            .copied()
            .unwrap_or(FormField::Submit)
    }

    pub fn focus_next(&mut self) {
        let len = self.fields().len();
        self.focus = (self.focus + 1) % len;
    }

    pub fn focus_prev(&mut self) {
        let len = self.fields().len();
        self.focus = (self.focus + len - 1) % len;
    }

    fn focus_field(&mut self, field: FormField) {
        if let Some(idx) = self.fields().iter().position(|f| *f == field) {
            self.focus = idx;
        }
    }

    /// Append an empty row (read-only checked) and focus its path input
    pub fn add_mapped_folder(&mut self) {
        self.mapped_folder_count += 1;
        self.mapped_folders.push(MappedFolderRow {
            path: String::new(),
            readonly: true,
        });
        self.focus_field(FormField::FolderPath(self.mapped_folders.len() - 1));
    }

    /// Detach one row; the others keep their relative order
    pub fn remove_mapped_folder(&mut self, index: usize) {
        if index >= self.mapped_folders.len() {
            return;
        }
        self.mapped_folders.remove(index);
        let len = self.fields().len();
        if self.focus >= len {
            self.focus = len - 1;
        }
    }

    pub fn toggle_readonly(&mut self, index: usize) {
        if let Some(row) = self.mapped_folders.get_mut(index) {
            row.readonly = !row.readonly;
        }
    }

    fn focused_choice(&mut self) -> Option<&mut ChoiceField> {
        match self.focused_field() {
            FormField::Networking => Some(&mut self.networking),
            FormField::VGpu => Some(&mut self.vgpu),
            FormField::AudioInput => Some(&mut self.audio_input),
            FormField::VideoInput => Some(&mut self.video_input),
            FormField::ClipboardRedirection => Some(&mut self.clipboard_redirection),
            FormField::PrinterRedirection => Some(&mut self.printer_redirection),
            FormField::ProtectedClient => Some(&mut self.protected_client),
            _ => None,
        }
    }

    fn focused_text(&mut self) -> Option<&mut String> {
        match self.focused_field() {
            FormField::Name if !self.is_edit() => Some(&mut self.name),
            FormField::Memory => Some(&mut self.memory_mb),
            FormField::FolderPath(i) => self.mapped_folders.get_mut(i).map(|r| &mut r.path),
            _ => None,
        }
    }

    /// Cycle the focused choice field; no-op on other fields
    pub fn cycle_choice(&mut self, forward: bool) {
        if let Some(choice) = self.focused_choice() {
            choice.cycle(forward);
        }
    }

    pub fn insert_char(&mut self, c: char) {
        if let Some(text) = self.focused_text() {
            text.push(c);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(text) = self.focused_text() {
            text.pop();
        }
    }

    /// Serialize the form into the request body
    pub fn to_payload(&self) -> ConfigPayload {
        ConfigPayload {
            name: self.name.trim().to_string(),
            memory_mb: parse_memory(&self.memory_mb),
            networking: self.networking.value().to_string(),
            vgpu: self.vgpu.value().to_string(),
            audio_input: self.audio_input.value().to_string(),
            video_input: self.video_input.value().to_string(),
            clipboard_redirection: self.clipboard_redirection.value().to_string(),
            printer_redirection: self.printer_redirection.value().to_string(),
            protected_client: self.protected_client.value().to_string(),
            mapped_folders: collect_mapped_folders(
                self.mapped_folders
                    .iter()
                    .map(|row| (row.path.as_str(), row.readonly)),
            ),
        }
    }
}
