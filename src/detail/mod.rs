//! Detail feature - the festival overlay.
//!
//! Opening the overlay selects a festival; closing it only hides the overlay,
//! the selection stays until another festival is opened.

pub mod ui;

use crate::data::Festival;

/// State for the detail overlay.
#[derive(Debug, Clone, Default)]
pub struct DetailState {
    selected: Option<Festival>,
    open: bool,
    /// Scroll offset of the overlay body.
    pub scroll: u16,
}

impl DetailState {
    /// Create a closed detail state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Select `festival` and show the overlay.
    pub fn open(&mut self, festival: Festival) {
        self.selected = Some(festival);
        self.open = true;
        self.scroll = 0;
    }

    /// Hide the overlay.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Check if the overlay is shown.
    pub fn is_visible(&self) -> bool {
        self.open && self.selected.is_some()
    }

    /// The selected festival, whether or not the overlay is shown.
    pub fn selected(&self) -> Option<&Festival> {
        self.selected.as_ref()
    }

    /// Scroll the body down.
    pub fn scroll_down(&mut self, step: u16) {
        self.scroll = self.scroll.saturating_add(step);
    }

    /// Scroll the body up.
    pub fn scroll_up(&mut self, step: u16) {
        self.scroll = self.scroll.saturating_sub(step);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_until_opened() {
        let state = DetailState::new();
        assert!(!state.is_visible());
        assert!(state.selected().is_none());
    }

    #[test]
    fn close_keeps_selection() {
        let mut state = DetailState::new();
        state.open(Festival {
            id: "1".into(),
            ..Festival::default()
        });
        assert!(state.is_visible());

        state.scroll_down(3);
        state.close();

        assert!(!state.is_visible());
        assert_eq!(state.selected().map(|f| f.id.as_str()), Some("1"));
    }

    #[test]
    fn reopening_resets_scroll() {
        let mut state = DetailState::new();
        state.open(Festival::default());
        state.scroll_down(6);
        state.scroll_up(2);
        assert_eq!(state.scroll, 4);

        state.open(Festival::default());
        assert_eq!(state.scroll, 0);
    }
}
