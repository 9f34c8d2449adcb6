use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::logic::errors::ErrorType;
use crate::model::backend::ConnectionState;
use crate::model::{Model, Tab};

fn connection_span(state: &ConnectionState) -> Span<'static> {
    match state {
        ConnectionState::Unknown => Span::styled("Connecting...", Style::default().fg(Color::Gray)),
        ConnectionState::Connected => Span::styled("Connected", Style::default().fg(Color::Green)),
        ConnectionState::Disconnected { error_type, .. } => {
            let label = match error_type {
                ErrorType::ConnectionRefused => "Offline (refused)",
                ErrorType::Timeout => "Offline (timeout)",
                _ => "Offline",
            };
            Span::styled(label, Style::default().fg(Color::Red))
        }
    }
}

/// Build the status fields as `label: value` pairs (extracted for testability)
fn build_status_parts(model: &Model) -> Vec<(&'static str, String)> {
    let mut parts = vec![("Backend:", model.backend.base_url.clone())];

    match model.ui.active_tab {
        Tab::Configs => {
            if let Some(files) = &model.configs.files {
                parts.push(("Configs:", files.len().to_string()));
            }
            if let Some(file) = model.configs.selected_file() {
                parts.push(("Selected:", file.name.clone()));
            }
        }
        Tab::Templates => {
            if let Some(templates) = &model.templates.templates {
                parts.push(("Templates:", templates.len().to_string()));
            }
            if let Some(template) = model.templates.selected_template() {
                parts.push(("Selected:", template.name.clone()));
            }
        }
        Tab::Create => {
            let mode = match &model.form.mode {
                crate::model::form::FormMode::Create => "New".to_string(),
                crate::model::form::FormMode::Edit { original_name } => format!("Editing {}", original_name),
            };
            parts.push(("Form:", mode));
            parts.push(("Folders:", model.form.mapped_folders.len().to_string()));
        }
    }

    parts
}

/// Render the bottom status bar
pub fn render_status_bar(f: &mut Frame, area: Rect, model: &Model) {
    let mut spans = vec![connection_span(&model.backend.connection_state)];

    for (label, value) in build_status_parts(model) {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(label, Style::default().fg(Color::Yellow)));
        spans.push(Span::raw(format!(" {}", value)));
    }

    let status_bar = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(Style::default().fg(Color::Gray));

    f.render_widget(status_bar, area);
}
