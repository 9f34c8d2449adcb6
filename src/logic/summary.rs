//! Configuration summary shown by the view dialog

use crate::api::{ConfigDetails, MappedFolder};

fn access_label(folder: &MappedFolder) -> &'static str {
    if folder.readonly {
        "Read-Only"
    } else {
        "Read-Write"
    }
}

/// Empty values come from empty elements in the stored file
fn shown(value: &str) -> &str {
    if value.is_empty() {
        "(none)"
    } else {
        value
    }
}

/// Build the human-readable summary lines for a configuration
///
/// The mapped folder section is omitted entirely when there are none.
pub fn summarize_config(name: &str, config: &ConfigDetails) -> Vec<String> {
    let mut lines = vec![
        format!("Configuration: {}", name),
        String::new(),
        format!("💾 Memory: {} MB", config.memory_mb),
        format!("🌐 Networking: {}", shown(&config.networking)),
        format!("🎮 vGPU: {}", shown(&config.vgpu)),
        format!("🔐 Protected Mode: {}", shown(&config.protected_client)),
        format!("📋 Clipboard: {}", shown(&config.clipboard_redirection)),
        format!("🖨️ Printer: {}", shown(&config.printer_redirection)),
        format!("🎤 Audio Input: {}", shown(&config.audio_input)),
        format!("📹 Video Input: {}", shown(&config.video_input)),
    ];

    if !config.mapped_folders.is_empty() {
        lines.push(String::new());
        lines.push("Mapped Folders:".to_string());
        lines.extend(
            config
                .mapped_folders
                .iter()
                .map(|f| format!("📁 {} ({})", shown(&f.path), access_label(f))),
        );
    }

    lines
}
