use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::api::ConfigFile;
use crate::logic::formatting::{format_bytes, format_modified};

/// Build the two-line card for one configuration
fn config_card(file: &ConfigFile) -> ListItem<'static> {
    ListItem::new(vec![
        Line::from(Span::styled(
            format!("📋 {}", file.name),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled("   📅 Modified: ", Style::default().fg(Color::DarkGray)),
            Span::raw(format_modified(&file.modified)),
            Span::styled("   📊 Size: ", Style::default().fg(Color::DarkGray)),
            Span::raw(format_bytes(file.size)),
        ]),
    ])
}

pub(crate) fn render_placeholder(f: &mut Frame, area: Rect, title: &str, lines: Vec<Line<'static>>) {
    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(title.to_string()))
        .alignment(ratatui::layout::Alignment::Center)
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

/// Render the configurations panel
///
/// `files` is `None` until the first listing arrives.
pub fn render_config_list(
    f: &mut Frame,
    area: Rect,
    files: Option<&[ConfigFile]>,
    selected: Option<usize>,
) {
    let title = "Configurations";

    let Some(files) = files else {
        render_placeholder(f, area, title, vec![Line::from(""), Line::from("Loading...")]);
        return;
    };

    if files.is_empty() {
        render_placeholder(
            f,
            area,
            title,
            vec![
                Line::from(""),
                Line::from(Span::styled(
                    "No configurations yet",
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from("Create your first sandbox configuration to get started!"),
                Line::from(""),
                Line::from(vec![
                    Span::raw("Press "),
                    Span::styled("n", Style::default().fg(Color::Yellow)),
                    Span::raw(" to create a new configuration"),
                ]),
            ],
        );
        return;
    }

    let items: Vec<ListItem> = files.iter().map(config_card).collect();
    let mut state = ListState::default();
    state.select(selected);

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("{} ({})", title, files.len())),
        )
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("► ");

    f.render_stateful_widget(list, area, &mut state);
}
