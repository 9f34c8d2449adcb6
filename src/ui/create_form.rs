use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::form::{ChoiceField, CreateFormModel, FormField, FormMode};

const LABEL_WIDTH: usize = 16;

fn field_style(focused: bool) -> Style {
    if focused {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    }
}

fn label_span(label: &str, focused: bool) -> Span<'static> {
    let marker = if focused { "► " } else { "  " };
    Span::styled(
        format!("{}{:<width$}", marker, label, width = LABEL_WIDTH),
        field_style(focused),
    )
}

fn text_line(label: &str, value: &str, focused: bool, locked: bool) -> Line<'static> {
    let cursor = if focused && !locked { "█" } else { "" };
    let value_style = if locked {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().add_modifier(Modifier::UNDERLINED)
    };
    Line::from(vec![
        label_span(label, focused),
        Span::styled(format!("{}{}", value, cursor), value_style),
    ])
}

fn choice_line(label: &str, choice: &ChoiceField, focused: bool) -> Line<'static> {
    let value = if focused {
        format!("◀ {} ▶", choice.value())
    } else {
        format!("  {}  ", choice.value())
    };
    Line::from(vec![
        label_span(label, focused),
        Span::styled(value, field_style(focused)),
    ])
}

/// Build every line of the form (extracted for testability)
pub fn build_form_lines(form: &CreateFormModel) -> Vec<Line<'static>> {
    let focused = form.focused_field();
    let mut lines = Vec::new();

    for field in form.fields() {
        let is_focused = field == focused;
        match field {
            FormField::Name => {
                lines.push(text_line(field.label(), &form.name, is_focused, form.is_edit()))
            }
            FormField::Memory => {
                lines.push(text_line(field.label(), &form.memory_mb, is_focused, false))
            }
            FormField::Networking => lines.push(choice_line(field.label(), &form.networking, is_focused)),
            FormField::VGpu => lines.push(choice_line(field.label(), &form.vgpu, is_focused)),
            FormField::AudioInput => lines.push(choice_line(field.label(), &form.audio_input, is_focused)),
            FormField::VideoInput => lines.push(choice_line(field.label(), &form.video_input, is_focused)),
            FormField::ClipboardRedirection => {
                lines.push(choice_line(field.label(), &form.clipboard_redirection, is_focused))
            }
            FormField::PrinterRedirection => {
                lines.push(choice_line(field.label(), &form.printer_redirection, is_focused))
            }
            FormField::ProtectedClient => {
                lines.push(choice_line(field.label(), &form.protected_client, is_focused));
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(
                    format!("  Mapped Folders ({})", form.mapped_folders.len()),
                    Style::default().add_modifier(Modifier::BOLD),
                )));
                if form.mapped_folders.is_empty() {
                    lines.push(Line::from(Span::styled(
                        "  (none, ^N to add)",
                        Style::default().fg(Color::DarkGray),
                    )));
                }
            }
            FormField::FolderPath(idx) => {
                let Some(row) = form.mapped_folders.get(idx) else {
                    continue;
                };
                let checkbox = if row.readonly { "[x] Read-Only " } else { "[ ] Read-Only " };
                let mut line = text_line(
                    &format!("📁 {}", idx + 1),
                    &row.path,
                    is_focused,
                    false,
                );
                line.spans.insert(
                    1,
                    Span::styled(checkbox, Style::default().fg(Color::Cyan)),
                );
                lines.push(line);
            }
            FormField::Submit => {
                let caption = match &form.mode {
                    FormMode::Create => "[ ✨ Create Configuration ]",
                    FormMode::Edit { .. } => "[ 💾 Save Changes ]",
                };
                lines.push(Line::from(""));
                lines.push(Line::from(vec![
                    Span::raw("  "),
                    Span::styled(
                        caption,
                        if is_focused {
                            Style::default()
                                .fg(Color::Black)
                                .bg(Color::Green)
                                .add_modifier(Modifier::BOLD)
                        } else {
                            Style::default().fg(Color::Green)
                        },
                    ),
                ]));
            }
        }
    }

    lines
}

/// Render the create/edit form panel
pub fn render_create_form(f: &mut Frame, area: Rect, form: &CreateFormModel) {
    let title = match &form.mode {
        FormMode::Create => "Create Configuration".to_string(),
        FormMode::Edit { original_name } => format!("Edit Configuration: {}", original_name),
    };

    let lines = build_form_lines(form);

    // Keep the focused line visible on short terminals
    let focus_line = lines
        .iter()
        .position(|l| l.spans.first().is_some_and(|s| s.content.starts_with('►')))
        .unwrap_or(0);
    let visible = area.height.saturating_sub(2) as usize;
    let scroll = focus_line.saturating_sub(visible.saturating_sub(1)) as u16;

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(title))
        .scroll((scroll, 0));

    f.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_focused_field_is_marked() {
        let form = CreateFormModel::new();
        let lines = build_form_lines(&form);
        assert!(line_text(&lines[0]).starts_with("► Name"));
        assert!(line_text(&lines[1]).starts_with("  Memory (MB)"));
    }

    #[test]
    fn test_rows_show_checkbox_state() {
        let mut form = CreateFormModel::new();
        form.add_mapped_folder();
        form.add_mapped_folder();
        form.toggle_readonly(1);
        let text: Vec<String> = build_form_lines(&form).iter().map(line_text).collect();
        assert!(text.iter().any(|l| l.contains("[x] Read-Only")));
        assert!(text.iter().any(|l| l.contains("[ ] Read-Only")));
        assert!(text.iter().any(|l| l.contains("Mapped Folders (2)")));
    }

    #[test]
    fn test_submit_caption_follows_mode() {
        let mut form = CreateFormModel::new();
        let text: Vec<String> = build_form_lines(&form).iter().map(line_text).collect();
        assert!(text.iter().any(|l| l.contains("Create Configuration")));

        form.mode = FormMode::Edit {
            original_name: "dev".to_string(),
        };
        let text: Vec<String> = build_form_lines(&form).iter().map(line_text).collect();
        assert!(text.iter().any(|l| l.contains("Save Changes")));
    }
}
