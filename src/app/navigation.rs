use crate::logic;
use crate::model::Tab;
use crate::App;

impl App {
    /// Activate `tab`, deactivating every other one
    ///
    /// Configs and Templates always refetch on activation, even when the
    /// tab was already active.
    pub fn switch_tab(&mut self, tab: Tab) {
        tracing::debug!(?tab, "switching tab");
        self.model.ui.close_all_modals();
        self.model.ui.active_tab = tab;

        match tab {
            Tab::Configs => self.load_configs(),
            Tab::Templates => self.load_templates(),
            Tab::Create => {}
        }
    }

    pub fn next_tab(&mut self) {
        self.switch_tab(logic::ui::next_tab(self.model.ui.active_tab));
    }

    pub fn prev_tab(&mut self) {
        self.switch_tab(logic::ui::prev_tab(self.model.ui.active_tab));
    }

    /// Run the UI timers; called once per frame
    pub fn tick(&mut self) {
        if self.model.ui.should_dismiss_notification() {
            self.model.ui.dismiss_notification();
        }

        if let Some(tab) = self.model.ui.take_due_tab_switch() {
            self.switch_tab(tab);
        }
    }
}
