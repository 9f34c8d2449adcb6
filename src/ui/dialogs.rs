use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::layout::centered_rect;
use crate::model::TemplatePrompt;

/// Render the delete confirmation dialog
pub fn render_delete_confirmation(f: &mut Frame, name: &str) {
    let prompt_text = format!(
        "Are you sure you want to delete \"{}\"?\n\n\
        WARNING: This action cannot be undone!\n\n\
        Continue? (y/n)",
        name
    );

    let prompt_area = centered_rect(f.area(), 50, 9);

    let prompt = Paragraph::new(prompt_text)
        .block(Block::default()
            .borders(Borders::ALL)
            .title("Confirm Delete")
            .border_style(Style::default().fg(Color::Red)))
        .style(Style::default().fg(Color::White).bg(Color::Black))
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, prompt_area);
    f.render_widget(prompt, prompt_area);
}

/// Render a configuration summary with the download question
pub fn render_view_confirmation(f: &mut Frame, summary: &[String]) {
    let mut lines: Vec<Line> = summary
        .iter()
        .enumerate()
        .map(|(idx, l)| {
            if idx == 0 || l == "Mapped Folders:" {
                Line::from(Span::styled(l.clone(), Style::default().add_modifier(Modifier::BOLD)))
            } else {
                Line::from(l.clone())
            }
        })
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Would you like to download this configuration? (y/n)",
        Style::default().fg(Color::Yellow),
    )));

    let height = lines.len() as u16 + 2;
    let dialog_area = centered_rect(f.area(), 64, height);

    let dialog = Paragraph::new(lines)
        .block(Block::default()
            .borders(Borders::ALL)
            .title("Configuration")
            .border_style(Style::default().fg(Color::Cyan)))
        .style(Style::default().fg(Color::White).bg(Color::Black))
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, dialog_area);
    f.render_widget(dialog, dialog_area);
}

/// Render the new-name prompt for applying a template
pub fn render_template_prompt(f: &mut Frame, prompt: &TemplatePrompt) {
    let lines = vec![
        Line::from(format!(
            "Enter name for new configuration based on \"{}\":",
            prompt.template
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("> ", Style::default().fg(Color::Yellow)),
            Span::raw(format!("{}█", prompt.input)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Enter to apply, Esc to cancel",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let prompt_area = centered_rect(f.area(), 60, 7);

    let dialog = Paragraph::new(lines)
        .block(Block::default()
            .borders(Borders::ALL)
            .title("Use Template")
            .border_style(Style::default().fg(Color::Yellow)))
        .style(Style::default().fg(Color::White).bg(Color::Black))
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, prompt_area);
    f.render_widget(dialog, prompt_area);
}
