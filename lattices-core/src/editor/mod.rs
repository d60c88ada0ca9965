//! # Editor State Module
//!
//! Headless state behind the editor window: the lattice snapshot, the three
//! settings panels and the two buttons that show them. Widget callbacks only
//! raise flags here; [`Editor::poll`] runs on a timer, hands flagged changes
//! to the processor and clears each flag once it has been acted on.

pub mod lattice_view;
pub mod midi_menu;
pub mod mode;
pub mod origin_menu;
pub mod panel;

use crate::processor::LatticeProcessor;
use lattice_view::LatticeView;
use log::debug;
use midi_menu::MidiMenu;
use mode::ModeSelector;
use origin_menu::OriginMenu;
use panel::PanelToggle;

/// Which branches of a poll did any work.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PollReport {
    pub lattice_redrawn: bool,
    pub mode_sent: bool,
    pub midi_sent: bool,
    pub freq_sent: bool,
    pub root_sent: bool,
}

impl PollReport {
    pub fn is_idle(&self) -> bool {
        *self == PollReport::default()
    }
}

#[derive(Debug, Clone)]
pub struct Editor {
    pub lattice: LatticeView,
    pub mode: ModeSelector,
    pub midi: MidiMenu,
    pub origin: OriginMenu,
    pub midi_button: PanelToggle,
    pub tuning_button: PanelToggle,
}

impl Editor {
    /// Builds every widget from the processor's current state. All panels
    /// start hidden.
    pub fn new<P: LatticeProcessor + ?Sized>(processor: &P) -> Self {
        Self {
            lattice: LatticeView::new(processor.coords()),
            mode: ModeSelector::new(processor.mode().index()),
            midi: MidiMenu::new(processor.midi_settings()),
            origin: OriginMenu::new(processor.origin()),
            midi_button: PanelToggle::new("MIDI Settings"),
            tuning_button: PanelToggle::new("Tuning Settings"),
        }
    }

    pub fn show_midi_menu(&self) -> bool {
        self.midi_button.is_visible()
    }

    /// The tuning button shows the mode selector and origin menu together.
    pub fn show_tuning_menu(&self) -> bool {
        self.tuning_button.is_visible()
    }

    /// Timer callback: moves pending changes between the widgets and the
    /// processor.
    pub fn poll<P: LatticeProcessor + ?Sized>(&mut self, processor: &mut P) -> PollReport {
        let mut report = PollReport::default();

        if processor.changed() {
            self.lattice.update(processor.coords());
            processor.clear_changed();
            report.lattice_redrawn = true;
        }

        if self.mode.mode_changed {
            processor.mode_switch(self.mode.which_mode());
            self.mode.mode_changed = false;
            report.mode_sent = true;
        }

        if self.midi.setting_changed {
            processor.update_midi(self.midi.settings());
            self.midi.setting_changed = false;
            report.midi_sent = true;
        }

        if self.origin.freq_changed {
            processor.update_freq(self.origin.what_freq());
            self.origin.freq_changed = false;
            report.freq_sent = true;
        }

        if self.origin.root_changed {
            let freq = processor.update_root(self.origin.which_note());
            self.origin.reset_freq_on_root_change(freq);
            report.root_sent = true;
        }

        if !report.is_idle() {
            debug!("[EDITOR] Poll: {:?}", report);
        }
        report
    }
}
