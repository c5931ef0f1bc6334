// Tab controller - which panel group is visible

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toggle {
    pub key: String,
    pub active: bool,
}

/// Fixed set of tabs and panels with exactly one active tab.
///
/// A panel belongs to the tab with the same key. A tab may have no panel.
#[derive(Debug, Clone)]
pub struct TabController {
    tabs: Vec<Toggle>,
    panels: Vec<Toggle>,
}

impl TabController {
    /// Build the controller with `initial` active, or the first tab when
    /// `initial` names no tab.
    pub fn new<I, S>(tabs: I, panels: I, initial: &str) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let toggles = |keys: I| -> Vec<Toggle> {
            keys.into_iter()
                .map(|k| Toggle {
                    key: k.into(),
                    active: false,
                })
                .collect()
        };
        let mut controller = Self {
            tabs: toggles(tabs),
            panels: toggles(panels),
        };

        if !controller.activate(initial) {
            if let Some(first) = controller.tabs.first().map(|t| t.key.clone()) {
                controller.activate(&first);
            }
        }
        controller
    }

    /// Deactivate every tab and panel, then activate `key` and its panel.
    /// Returns false and changes nothing when no tab has that key.
    pub fn activate(&mut self, key: &str) -> bool {
        if !self.tabs.iter().any(|t| t.key == key) {
            return false;
        }

        for toggle in self.tabs.iter_mut().chain(self.panels.iter_mut()) {
            toggle.active = toggle.key == key;
        }
        true
    }

    pub fn active(&self) -> Option<&str> {
        self.tabs.iter().find(|t| t.active).map(|t| t.key.as_str())
    }

    pub fn tabs(&self) -> &[Toggle] {
        &self.tabs
    }

    pub fn panels(&self) -> &[Toggle] {
        &self.panels
    }

    pub fn is_panel_active(&self, key: &str) -> bool {
        self.panels.iter().any(|p| p.key == key && p.active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller(initial: &str) -> TabController {
        TabController::new(
            vec!["system", "pipeline", "finance"],
            vec!["system", "pipeline", "finance"],
            initial,
        )
    }

    #[test]
    fn test_initial_tab() {
        let tabs = controller("pipeline");
        assert_eq!(tabs.active(), Some("pipeline"));
        assert!(tabs.is_panel_active("pipeline"));
        assert!(!tabs.is_panel_active("system"));
    }

    #[test]
    fn test_unknown_initial_falls_back_to_first() {
        let tabs = controller("weather");
        assert_eq!(tabs.active(), Some("system"));
    }

    #[test]
    fn test_activate_switches_exactly_one() {
        let mut tabs = controller("system");
        assert!(tabs.activate("finance"));

        let active_tabs: Vec<_> = tabs.tabs().iter().filter(|t| t.active).collect();
        let active_panels: Vec<_> = tabs.panels().iter().filter(|p| p.active).collect();
        assert_eq!(active_tabs.len(), 1);
        assert_eq!(active_tabs[0].key, "finance");
        assert_eq!(active_panels.len(), 1);
        assert_eq!(active_panels[0].key, "finance");
    }

    #[test]
    fn test_activate_unknown_keeps_state() {
        let mut tabs = controller("pipeline");
        assert!(!tabs.activate("weather"));
        assert_eq!(tabs.active(), Some("pipeline"));
        assert!(tabs.is_panel_active("pipeline"));
    }

    #[test]
    fn test_tab_without_panel() {
        let mut tabs = TabController::new(vec!["a", "b"], vec!["a"], "a");
        assert!(tabs.activate("b"));
        assert_eq!(tabs.active(), Some("b"));
        assert!(tabs.panels().iter().all(|p| !p.active));
    }
}
