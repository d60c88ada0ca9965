//! # Processor Contract Module
//!
//! The editor never owns the tuning state. It talks to whatever owns it
//! through [`LatticeProcessor`]: it reads the coordinates and current
//! settings, and it asks for changes. The processor raises a `changed` flag
//! whenever its coordinates need to be redrawn.
//!
//! [`StandaloneProcessor`] is a self-contained implementation used by the
//! desktop binary and by tests. It only builds the lattice layout for the
//! current mode and tracks the settings. It does not retune anything.

use crate::lattice::{self, Coord};
use crate::settings::{self, MidiSettings, Mode, Origin, RootNote};
use log::{debug, info, warn};

/// The boundary between the editor and the object that owns the tuning state.
pub trait LatticeProcessor {
    /// Coordinates currently on the lattice.
    fn coords(&self) -> &[Coord];
    fn mode(&self) -> Mode;
    fn midi_settings(&self) -> MidiSettings;
    fn origin(&self) -> Origin;

    /// True when the coordinates changed since the editor last looked.
    fn changed(&self) -> bool;
    fn clear_changed(&mut self);

    fn mode_switch(&mut self, mode: Mode);
    fn update_midi(&mut self, settings: MidiSettings);
    fn update_freq(&mut self, reference_hz: f64);
    /// Moves the origin to a new root and returns the reference frequency
    /// the processor settled on.
    fn update_root(&mut self, root: RootNote) -> f64;
}

/// A processor that lives inside the editor's process.
#[derive(Debug, Clone)]
pub struct StandaloneProcessor {
    coords: Vec<Coord>,
    mode: Mode,
    midi: MidiSettings,
    origin: Origin,
    changed: bool,
}

impl Default for StandaloneProcessor {
    fn default() -> Self {
        Self::new(Mode::default(), MidiSettings::default(), Origin::default())
    }
}

impl StandaloneProcessor {
    pub fn new(mode: Mode, midi: MidiSettings, origin: Origin) -> Self {
        info!("[PROCESSOR] Starting in {} mode at {} = {:.3} Hz", mode, origin.root, origin.reference_hz);
        Self {
            coords: lattice::lattice_for_mode(mode),
            mode,
            midi,
            origin,
            changed: false,
        }
    }
}

impl LatticeProcessor for StandaloneProcessor {
    fn coords(&self) -> &[Coord] {
        &self.coords
    }

    fn mode(&self) -> Mode {
        self.mode
    }

    fn midi_settings(&self) -> MidiSettings {
        self.midi
    }

    fn origin(&self) -> Origin {
        self.origin
    }

    fn changed(&self) -> bool {
        self.changed
    }

    fn clear_changed(&mut self) {
        self.changed = false;
    }

    fn mode_switch(&mut self, mode: Mode) {
        info!("[PROCESSOR] Mode switch: {} -> {}", self.mode, mode);
        self.mode = mode;
        self.coords = lattice::lattice_for_mode(mode);
        self.changed = true;
    }

    fn update_midi(&mut self, settings: MidiSettings) {
        debug!("[PROCESSOR] MIDI settings: {:?}", settings);
        self.midi = settings;
    }

    fn update_freq(&mut self, reference_hz: f64) {
        match settings::check_frequency(reference_hz) {
            Ok(hz) => {
                info!("[PROCESSOR] Reference frequency: {:.3} Hz", hz);
                self.origin.reference_hz = hz;
                self.changed = true;
            }
            Err(e) => warn!("[PROCESSOR] Ignoring frequency update: {}", e),
        }
    }

    fn update_root(&mut self, root: RootNote) -> f64 {
        let reference_hz = self.origin.retarget_root(root);
        info!("[PROCESSOR] Root: {} -> {} ({:.3} Hz)", self.origin.root, root, reference_hz);
        self.origin = Origin { root, reference_hz };
        self.changed = true;
        reference_hz
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_clean_with_mode_layout() {
        let processor = StandaloneProcessor::new(Mode::Pythagorean, MidiSettings::default(), Origin::default());
        assert!(!processor.changed());
        assert_eq!(processor.coords(), lattice::lattice_for_mode(Mode::Pythagorean).as_slice());
    }

    #[test]
    fn test_mode_switch_raises_changed() {
        let mut processor = StandaloneProcessor::default();
        processor.mode_switch(Mode::Syntonic);
        assert!(processor.changed());
        assert_eq!(processor.mode(), Mode::Syntonic);
        assert_eq!(processor.coords(), lattice::lattice_for_mode(Mode::Syntonic).as_slice());
        processor.clear_changed();
        assert!(!processor.changed());
    }

    #[test]
    fn test_midi_update_leaves_lattice_alone() {
        let mut processor = StandaloneProcessor::default();
        let settings = MidiSettings::new([20, 21, 22, 23, 24], 0).unwrap();
        processor.update_midi(settings);
        assert_eq!(processor.midi_settings(), settings);
        assert!(!processor.changed());
    }

    #[test]
    fn test_rejects_out_of_range_frequency() {
        let mut processor = StandaloneProcessor::default();
        let before = processor.origin();
        processor.update_freq(5.0);
        assert_eq!(processor.origin(), before);
        assert!(!processor.changed());

        processor.update_freq(256.0);
        assert_eq!(processor.origin().reference_hz, 256.0);
        assert!(processor.changed());
    }

    #[test]
    fn test_update_root_returns_new_reference() {
        let mut processor = StandaloneProcessor::default();
        let a = RootNote::from_index(9).unwrap();
        let hz = processor.update_root(a);
        assert!((hz - 440.0).abs() < 1e-9);
        assert_eq!(processor.origin().root, a);
        assert!(processor.changed());
        assert!((processor.origin().frequency_of(Coord::new(1, 0)) - 660.0).abs() < 1e-9);
    }
}
