use crate::App;
use ratatui::Frame;

use super::{
    config_list, create_form, dialogs, layout, legend, status_bar, tabs, template_list, toast,
};
use crate::model::{ConfirmAction, Tab};

/// Main render function - orchestrates all UI rendering
pub fn render(f: &mut Frame, app: &App) {
    let model = &app.model;
    let size = f.area();
    let active_tab = model.ui.active_tab;
    let editing = model.form.is_edit();

    let legend_height =
        legend::calculate_legend_height(size.width, active_tab, model.ui.vim_mode, editing);
    let layout_info = layout::calculate_layout(size, legend_height);

    tabs::render_tab_bar(f, layout_info.tabs_area, active_tab);

    match active_tab {
        Tab::Configs => config_list::render_config_list(
            f,
            layout_info.content_area,
            model.configs.files.as_deref(),
            model.configs.selected,
        ),
        Tab::Create => {
            create_form::render_create_form(f, layout_info.content_area, &model.form)
        }
        Tab::Templates => template_list::render_template_list(
            f,
            layout_info.content_area,
            model.templates.templates.as_deref(),
            model.templates.selected,
        ),
    }

    legend::render_legend(
        f,
        layout_info.legend_area,
        active_tab,
        model.ui.vim_mode,
        editing,
    );
    status_bar::render_status_bar(f, layout_info.status_area, model);

    // Modal dialogs sit above the panels
    match &model.ui.confirm {
        Some(ConfirmAction::DeleteConfig { name }) => dialogs::render_delete_confirmation(f, name),
        Some(ConfirmAction::DownloadAfterView { summary, .. }) => {
            dialogs::render_view_confirmation(f, summary)
        }
        None => {}
    }

    if let Some(prompt) = &model.ui.prompt {
        dialogs::render_template_prompt(f, prompt);
    }

    // Toast last so it is never hidden
    if let Some(notification) = &model.ui.notification {
        toast::render_toast(f, size, notification);
    }
}
