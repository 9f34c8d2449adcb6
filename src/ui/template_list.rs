use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use super::config_list::render_placeholder;
use crate::api::TemplateInfo;
use crate::logic::templates::template_icon;

/// Render the templates panel
pub fn render_template_list(
    f: &mut Frame,
    area: Rect,
    templates: Option<&[TemplateInfo]>,
    selected: Option<usize>,
) {
    let title = "Templates";

    let Some(templates) = templates else {
        render_placeholder(f, area, title, vec![Line::from(""), Line::from("Loading...")]);
        return;
    };

    if templates.is_empty() {
        render_placeholder(
            f,
            area,
            title,
            vec![
                Line::from(""),
                Line::from(Span::styled(
                    "No templates found",
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from("Templates should be in the templates/ directory"),
            ],
        );
        return;
    }

    let items: Vec<ListItem> = templates
        .iter()
        .map(|t| {
            ListItem::new(Line::from(vec![
                Span::raw(format!("{} ", template_icon(&t.name))),
                Span::styled(t.name.clone(), Style::default().add_modifier(Modifier::BOLD)),
            ]))
        })
        .collect();

    let mut state = ListState::default();
    state.select(selected);

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("{} ({})", title, templates.len())),
        )
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("► ");

    f.render_stateful_widget(list, area, &mut state);
}
