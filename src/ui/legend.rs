use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::Tab;

fn key(k: &'static str, action: &'static str) -> [Span<'static>; 2] {
    [
        Span::styled(k, Style::default().fg(Color::Yellow)),
        Span::raw(action),
    ]
}

/// Build hotkey spans (extracted for testability)
fn build_hotkey_spans(tab: Tab, vim_mode: bool, editing: bool) -> Vec<Span<'static>> {
    let mut hotkey_spans = vec![];

    match tab {
        Tab::Create => {
            hotkey_spans.extend(key("Tab/↑↓", ":Field  "));
            hotkey_spans.extend(key("←/→", ":Option  "));
            hotkey_spans.extend(key("^N", ":Add Folder  "));
            hotkey_spans.extend(key("^D", ":Remove Folder  "));
            hotkey_spans.extend(key("^R", ":Read-Only  "));
            hotkey_spans.extend(key("^L", if editing { ":New Form  " } else { ":Clear  " }));
            hotkey_spans.extend(key("Enter", if editing { ":Save  " } else { ":Create  " }));
            hotkey_spans.extend(key("Esc", ":Back  "));
        }
        Tab::Configs | Tab::Templates => {
            if vim_mode {
                hotkey_spans.extend(key("j/k", ":Nav  "));
                hotkey_spans.extend(key("g/G", ":First/Last  "));
            } else {
                hotkey_spans.extend(key("↑/↓", ":Nav  "));
            }
            hotkey_spans.extend(key("Tab/1-3", ":Switch Tab  "));

            if tab == Tab::Configs {
                hotkey_spans.extend(key("Enter/v", ":View  "));
                hotkey_spans.extend(key("s", ":Download  "));
                hotkey_spans.extend(key("e", ":Edit  "));
                hotkey_spans.extend(key("d", ":Delete  "));
                hotkey_spans.extend(key("n", ":New  "));
                hotkey_spans.extend(key("r", ":Refresh  "));
            } else {
                hotkey_spans.extend(key("Enter/a", ":Use Template  "));
                hotkey_spans.extend(key("r", ":Reload  "));
            }
            hotkey_spans.extend(key("q", ":Quit  "));
        }
    }

    hotkey_spans.extend(key("F1-F3", ":Tabs  "));
    hotkey_spans.extend(key("^C", ":Quit"));

    hotkey_spans
}

/// Build the legend paragraph (reusable for both rendering and height calculation)
pub fn build_legend_paragraph(tab: Tab, vim_mode: bool, editing: bool) -> Paragraph<'static> {
    let hotkey_line = Line::from(build_hotkey_spans(tab, vim_mode, editing));

    Paragraph::new(vec![hotkey_line])
        .block(Block::default().borders(Borders::ALL).title("Hotkeys"))
        .style(Style::default().fg(Color::Gray))
        .wrap(ratatui::widgets::Wrap { trim: false })
}

/// Render the hotkey legend for the active tab
pub fn render_legend(f: &mut Frame, area: Rect, tab: Tab, vim_mode: bool, editing: bool) {
    f.render_widget(build_legend_paragraph(tab, vim_mode, editing), area);
}

/// Calculate required height for legend based on terminal width and content
pub fn calculate_legend_height(terminal_width: u16, tab: Tab, vim_mode: bool, editing: bool) -> u16 {
    // Count wrapped lines WITHOUT block borders, then add them back
    let paragraph = Paragraph::new(vec![Line::from(build_hotkey_spans(tab, vim_mode, editing))])
        .wrap(ratatui::widgets::Wrap { trim: false });
    let inner_width = terminal_width.saturating_sub(2).max(1);
    let lines = paragraph.line_count(inner_width) as u16;

    lines.max(1) + 2
}
