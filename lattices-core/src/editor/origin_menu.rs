//! Root note and reference frequency controls.

use crate::error::SettingsError;
use crate::settings::{self, Origin, RootNote};
use log::warn;

#[derive(Debug, Clone)]
pub struct OriginMenu {
    root: RootNote,
    freq: f64,
    freq_text: String,
    pub root_changed: bool,
    pub freq_changed: bool,
}

fn format_freq(freq: f64) -> String {
    format!("{:.3}", freq)
}

impl OriginMenu {
    pub fn new(origin: Origin) -> Self {
        Self {
            root: origin.root,
            freq: origin.reference_hz,
            freq_text: format_freq(origin.reference_hz),
            root_changed: false,
            freq_changed: false,
        }
    }

    pub fn which_note(&self) -> RootNote {
        self.root
    }

    pub fn what_freq(&self) -> f64 {
        self.freq
    }

    pub fn freq_text(&self) -> &str {
        &self.freq_text
    }

    pub fn select_root(&mut self, root: RootNote) {
        self.root = root;
        self.root_changed = true;
    }

    pub fn edit_freq(&mut self, text: String) {
        self.freq_text = text;
    }

    /// Accepts the typed frequency, or restores the field if it is not a
    /// usable reference.
    pub fn commit_freq(&mut self) -> Result<(), SettingsError> {
        match settings::parse_frequency(&self.freq_text) {
            Ok(freq) => {
                self.freq = freq;
                self.freq_text = format_freq(freq);
                self.freq_changed = true;
                Ok(())
            }
            Err(e) => {
                warn!("[EDITOR] Rejected reference frequency: {}", e);
                self.freq_text = format_freq(self.freq);
                Err(e)
            }
        }
    }

    /// Takes the frequency the processor chose for the new root. This is the
    /// only place `root_changed` is cleared.
    pub fn reset_freq_on_root_change(&mut self, freq: f64) {
        self.freq = freq;
        self.freq_text = format_freq(freq);
        self.root_changed = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_are_independent() {
        let mut menu = OriginMenu::new(Origin::default());
        menu.select_root(RootNote::from_index(2).unwrap());
        assert!(menu.root_changed);
        assert!(!menu.freq_changed);

        menu.edit_freq("300".to_string());
        menu.commit_freq().unwrap();
        assert!(menu.freq_changed);
        assert_eq!(menu.what_freq(), 300.0);
        assert_eq!(menu.freq_text(), "300.000");
    }

    #[test]
    fn test_bad_frequency_restores_text() {
        let mut menu = OriginMenu::new(Origin::default());
        menu.edit_freq("loud".to_string());
        assert!(menu.commit_freq().is_err());
        assert_eq!(menu.freq_text(), "261.626");
        assert!(!menu.freq_changed);
    }

    #[test]
    fn test_reset_on_root_change() {
        let mut menu = OriginMenu::new(Origin::default());
        menu.select_root(RootNote::from_index(9).unwrap());
        menu.reset_freq_on_root_change(440.0);
        assert!(!menu.root_changed);
        assert_eq!(menu.freq_text(), "440.000");
        assert_eq!(menu.which_note().name(), "A");
    }
}
