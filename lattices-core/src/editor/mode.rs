//! Radio group for choosing the lattice mode.

use crate::settings::Mode;
use log::warn;

/// Three mutually exclusive mode toggles.
///
/// Only the selected mode is stored, so exactly one toggle is ever on.
#[derive(Debug, Clone)]
pub struct ModeSelector {
    selected: Mode,
    pub mode_changed: bool,
}

impl ModeSelector {
    /// Builds the selector from the processor's mode index. Unknown indices
    /// fall back to Duodene.
    pub fn new(index: usize) -> Self {
        let selected = Mode::from_index(index).unwrap_or_else(|| {
            warn!("[EDITOR] Unknown mode index {}, selecting {}", index, Mode::default());
            Mode::default()
        });
        Self {
            selected,
            mode_changed: false,
        }
    }

    /// Handles a click on one of the toggles. Clicking the active toggle
    /// still counts as a change.
    pub fn select(&mut self, mode: Mode) {
        self.selected = mode;
        self.mode_changed = true;
    }

    pub fn which_mode(&self) -> Mode {
        self.selected
    }

    /// On/off state of the Pythagorean, Syntonic and Duodene toggles.
    pub fn toggle_states(&self) -> [bool; 3] {
        Mode::ALL.map(|mode| mode == self.selected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active_count(selector: &ModeSelector) -> usize {
        selector.toggle_states().iter().filter(|on| **on).count()
    }

    #[test]
    fn test_exactly_one_toggle_active() {
        let mut selector = ModeSelector::new(0);
        assert_eq!(selector.toggle_states(), [true, false, false]);
        for mode in [Mode::Duodene, Mode::Syntonic, Mode::Syntonic, Mode::Pythagorean] {
            selector.select(mode);
            assert_eq!(active_count(&selector), 1);
            assert_eq!(selector.which_mode(), mode);
        }
    }

    #[test]
    fn test_unknown_index_falls_back_to_duodene() {
        let selector = ModeSelector::new(7);
        assert_eq!(selector.which_mode(), Mode::Duodene);
        assert_eq!(selector.toggle_states(), [false, false, true]);
        assert!(!selector.mode_changed);
    }

    #[test]
    fn test_reselecting_counts_as_change() {
        let mut selector = ModeSelector::new(1);
        selector.select(Mode::Syntonic);
        assert!(selector.mode_changed);
    }
}
