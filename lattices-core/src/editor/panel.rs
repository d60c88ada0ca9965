//! Buttons that show and hide the settings panels.

/// A toggle button tied to the visibility of one or more panels.
#[derive(Debug, Clone)]
pub struct PanelToggle {
    label: &'static str,
    toggled: bool,
}

impl PanelToggle {
    /// New toggles start off, with their panels hidden.
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            toggled: false,
        }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Flips the toggle and returns the new visibility.
    pub fn click(&mut self) -> bool {
        self.toggled = !self.toggled;
        self.toggled
    }

    pub fn is_toggled(&self) -> bool {
        self.toggled
    }

    pub fn is_visible(&self) -> bool {
        self.toggled
    }
}
