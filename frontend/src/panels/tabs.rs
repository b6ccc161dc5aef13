#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tab {
    Video,
    Comments,
    Channel,
    Search,
    Shorts,
}

impl Tab {
    pub fn all_variants() -> [Self; 5] {
        [
            Tab::Video,
            Tab::Comments,
            Tab::Channel,
            Tab::Search,
            Tab::Shorts,
        ]
    }

    pub fn key(&self) -> &'static str {
        match self {
            Tab::Video => "video",
            Tab::Comments => "comments",
            Tab::Channel => "channel",
            Tab::Search => "search",
            Tab::Shorts => "shorts",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Tab::Video => "Video Info",
            Tab::Comments => "Comments",
            Tab::Channel => "Channel",
            Tab::Search => "Search",
            Tab::Shorts => "Shorts",
        }
    }

    /// Position of the tab's selector button in the tab bar.
    pub fn position(&self) -> usize {
        match self {
            Tab::Video => 0,
            Tab::Comments => 1,
            Tab::Channel => 2,
            Tab::Search => 3,
            Tab::Shorts => 4,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabState {
    active: Tab,
}

impl Default for TabState {
    fn default() -> Self {
        Self { active: Tab::Video }
    }
}

impl TabState {
    pub fn active(&self) -> Tab {
        self.active
    }

    pub fn activate(&mut self, tab: Tab) {
        self.active = tab;
    }

    pub fn is_active(&self, tab: Tab) -> bool {
        self.active == tab
    }

    pub fn panel_class(&self, tab: Tab) -> &'static str {
        if self.is_active(tab) {
            "tab-content active"
        } else {
            "tab-content"
        }
    }

    /// Index of the active selector button.
    pub fn selector_position(&self) -> usize {
        self.active.position()
    }

    pub fn button_class(&self, position: usize) -> &'static str {
        if self.selector_position() == position {
            "tab-button active"
        } else {
            "tab-button"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn video_tab_is_active_initially() {
        let state = TabState::default();
        assert_eq!(state.active(), Tab::Video);
        assert_eq!(state.panel_class(Tab::Video), "tab-content active");
    }

    #[test]
    fn activating_comments_deactivates_everything_else() {
        let mut state = TabState::default();
        state.activate(Tab::Comments);

        let active_panels: Vec<_> = Tab::all_variants()
            .into_iter()
            .filter(|tab| state.panel_class(*tab).ends_with("active"))
            .collect();
        assert_eq!(active_panels, [Tab::Comments]);

        let active_buttons: Vec<_> = (0..Tab::all_variants().len())
            .filter(|position| state.button_class(*position) == "tab-button active")
            .collect();
        assert_eq!(active_buttons, [1]);
    }

    #[test]
    fn positions_follow_selector_order() {
        let positions: Vec<_> = Tab::all_variants().iter().map(Tab::position).collect();
        assert_eq!(positions, [0, 1, 2, 3, 4]);
        assert_eq!(Tab::Shorts.key(), "shorts");
    }
}
