//! Hover and selection state for the rendered map.

use crate::types::CountryCode;

/// Outcome of a click, handed to the page-level selection callback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionChange {
    Selected(CountryCode),
    Cleared,
}

/// Tracks the hovered and selected country.
///
/// At most one of each at a time; they are independent, so hovering another
/// country never clears the selection. All transitions are synchronous and
/// processed in event order, the last event wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InteractionState {
    hovered: Option<CountryCode>,
    selected: Option<CountryCode>,
}

impl InteractionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hovered(&self) -> Option<&CountryCode> {
        self.hovered.as_ref()
    }

    pub fn selected(&self) -> Option<&CountryCode> {
        self.selected.as_ref()
    }

    pub fn is_hovered(&self, code: &CountryCode) -> bool {
        self.hovered.as_ref() == Some(code)
    }

    pub fn is_selected(&self, code: &CountryCode) -> bool {
        self.selected.as_ref() == Some(code)
    }

    /// Pointer entered a feature. Touch-start is routed here too, since
    /// touch devices have no separate hover.
    pub fn pointer_enter(&mut self, code: CountryCode) {
        self.hovered = Some(code);
    }

    pub fn pointer_leave(&mut self) {
        self.hovered = None;
    }

    /// If the clicked country is already selected, it will be deselected.
    /// Otherwise, it will be selected.
    pub fn click(&mut self, code: CountryCode) -> SelectionChange {
        if self.selected.as_ref() == Some(&code) {
            self.selected = None;
            SelectionChange::Cleared
        } else {
            self.selected = Some(code.clone());
            SelectionChange::Selected(code)
        }
    }

    /// Resets both states, as on unmount.
    pub fn clear(&mut self) {
        self.hovered = None;
        self.selected = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(raw: &str) -> CountryCode {
        CountryCode::parse(raw).expect("valid code")
    }

    #[test]
    fn test_click_is_a_true_toggle() {
        let mut state = InteractionState::new();
        assert_eq!(state.click(code("POL")), SelectionChange::Selected(code("POL")));
        assert!(state.is_selected(&code("POL")));

        assert_eq!(state.click(code("POL")), SelectionChange::Cleared);
        assert!(state.selected().is_none());

        // Not a one-way latch: a third click selects again.
        assert_eq!(state.click(code("POL")), SelectionChange::Selected(code("POL")));
    }

    #[test]
    fn test_clicking_another_country_moves_selection() {
        let mut state = InteractionState::new();
        state.click(code("POL"));
        assert_eq!(state.click(code("DEU")), SelectionChange::Selected(code("DEU")));
        assert!(state.is_selected(&code("DEU")));
        assert!(!state.is_selected(&code("POL")));
    }

    #[test]
    fn test_hover_and_selection_are_independent() {
        let mut state = InteractionState::new();
        state.pointer_enter(code("FRA"));
        state.click(code("DEU"));
        // Hover stays on A while B is selected; both overrides can apply
        // to their respective features at once.
        assert!(state.is_hovered(&code("FRA")));
        assert!(state.is_selected(&code("DEU")));

        state.pointer_leave();
        assert!(state.hovered().is_none());
        assert!(state.is_selected(&code("DEU")));
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut state = InteractionState::new();
        state.pointer_enter(code("FRA"));
        state.click(code("DEU"));
        state.clear();
        assert_eq!(state, InteractionState::new());
    }
}
