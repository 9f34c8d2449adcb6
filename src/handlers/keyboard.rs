//! Keyboard Input Handler
//!
//! Maps key presses to App operations. Modal dialogs take every key while
//! they are open; otherwise dispatch depends on the active tab.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::model::Tab;
use crate::App;

/// Handle keyboard input
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Some terminals report releases as well
    if key.kind == KeyEventKind::Release {
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.model.ui.should_quit = true;
        return;
    }

    // Handle confirmation prompts first
    if app.model.ui.confirm.is_some() {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => app.answer_confirm(true),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.answer_confirm(false),
            _ => {} // Ignore other keys while prompt is showing
        }
        return;
    }

    // Template name prompt
    if app.model.ui.prompt.is_some() {
        match key.code {
            KeyCode::Enter => app.submit_prompt(),
            KeyCode::Esc => app.cancel_prompt(),
            KeyCode::Backspace => app.prompt_backspace(),
            KeyCode::Char(c) => app.prompt_insert_char(c),
            _ => {}
        }
        return;
    }

    // Function keys switch tabs from anywhere, including the form
    match key.code {
        KeyCode::F(1) => return app.switch_tab(Tab::Configs),
        KeyCode::F(2) => return app.switch_tab(Tab::Create),
        KeyCode::F(3) => return app.switch_tab(Tab::Templates),
        _ => {}
    }

    match app.model.ui.active_tab {
        Tab::Create => handle_form_key(app, key),
        Tab::Configs | Tab::Templates => handle_list_key(app, key),
    }
}

fn handle_form_key(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('n') => app.add_mapped_folder(),
            KeyCode::Char('d') => app.remove_focused_folder(),
            KeyCode::Char('r') => app.toggle_focused_readonly(),
            KeyCode::Char('l') => app.reset_form(),
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Enter => return app.submit_form(),
        KeyCode::Esc => return app.switch_tab(Tab::Configs),
        _ => {}
    }

    let form = &mut app.model.form;
    match key.code {
        KeyCode::Tab | KeyCode::Down => form.focus_next(),
        KeyCode::BackTab | KeyCode::Up => form.focus_prev(),
        KeyCode::Left => form.cycle_choice(false),
        KeyCode::Right => form.cycle_choice(true),
        KeyCode::Backspace => form.backspace(),
        KeyCode::Char(c) => form.insert_char(c),
        _ => {}
    }
}

fn handle_list_key(app: &mut App, key: KeyEvent) {
    let vim_mode = app.model.ui.vim_mode;
    let on_configs = app.model.ui.active_tab == Tab::Configs;

    let delta: Option<isize> = match key.code {
        KeyCode::Up => Some(-1),
        KeyCode::Down => Some(1),
        KeyCode::Char('k') if vim_mode => Some(-1),
        KeyCode::Char('j') if vim_mode => Some(1),
        KeyCode::Char('g') | KeyCode::Home => Some(isize::MIN / 2),
        KeyCode::Char('G') | KeyCode::End => Some(isize::MAX / 2),
        _ => None,
    };
    if let Some(delta) = delta {
        if on_configs {
            app.model.configs.move_selection(delta);
        } else {
            app.model.templates.move_selection(delta);
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.model.ui.should_quit = true,
        KeyCode::Char('1') => app.switch_tab(Tab::Configs),
        KeyCode::Char('2') => app.switch_tab(Tab::Create),
        KeyCode::Char('3') => app.switch_tab(Tab::Templates),
        KeyCode::Tab => app.next_tab(),
        KeyCode::BackTab => app.prev_tab(),
        _ if on_configs => handle_configs_key(app, key),
        _ => handle_templates_key(app, key),
    }
}

fn handle_configs_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('r') => app.refresh_configs(),
        KeyCode::Char('n') => {
            if app.model.form.is_edit() {
                app.reset_form();
            }
            app.switch_tab(Tab::Create);
        }
        _ => {
            let Some(name) = app.selected_config_name() else {
                return;
            };
            match key.code {
                KeyCode::Enter | KeyCode::Char('v') => app.view_config(&name),
                KeyCode::Char('s') => app.download_config(&name),
                KeyCode::Char('d') | KeyCode::Delete => app.delete_config(&name),
                KeyCode::Char('e') => app.edit_config(&name),
                _ => {}
            }
        }
    }
}

fn handle_templates_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('r') => app.load_templates(),
        KeyCode::Enter | KeyCode::Char('a') => {
            if let Some(name) = app.selected_template_name() {
                app.apply_template(&name);
            }
        }
        _ => {}
    }
}
