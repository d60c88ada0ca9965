//! Drives the editor's poll loop against processors and checks that every
//! widget change reaches the processor exactly once.

use lattices_core::editor::midi_menu::MidiField;
use lattices_core::editor::Editor;
use lattices_core::lattice::{self, Coord};
use lattices_core::{LatticeProcessor, MidiSettings, Mode, Origin, RootNote, StandaloneProcessor};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A processor that records every request it receives.
#[derive(Default)]
struct RecordingProcessor {
    coords: Vec<Coord>,
    mode: Mode,
    midi: MidiSettings,
    origin: Origin,
    changed: bool,
    mode_calls: Vec<Mode>,
    midi_calls: Vec<MidiSettings>,
    freq_calls: Vec<f64>,
    root_calls: Vec<RootNote>,
    clear_calls: usize,
}

impl LatticeProcessor for RecordingProcessor {
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
        self.clear_calls += 1;
        self.changed = false;
    }
    fn mode_switch(&mut self, mode: Mode) {
        self.mode_calls.push(mode);
    }
    fn update_midi(&mut self, settings: MidiSettings) {
        self.midi_calls.push(settings);
    }
    fn update_freq(&mut self, reference_hz: f64) {
        self.freq_calls.push(reference_hz);
    }
    fn update_root(&mut self, root: RootNote) -> f64 {
        self.root_calls.push(root);
        123.0
    }
}

#[test]
fn idle_poll_does_nothing() {
    init_logging();
    let mut processor = RecordingProcessor::default();
    let mut editor = Editor::new(&processor);
    let report = editor.poll(&mut processor);
    assert!(report.is_idle());
    assert_eq!(processor.clear_calls, 0);
    assert_eq!(editor.lattice.generation(), 0);
}

#[test]
fn processor_change_is_consumed_once() {
    init_logging();
    let mut processor = RecordingProcessor::default();
    let mut editor = Editor::new(&processor);

    processor.coords = vec![Coord::new(0, 0), Coord::new(1, 0)];
    processor.changed = true;

    assert!(editor.poll(&mut processor).lattice_redrawn);
    assert!(!editor.poll(&mut processor).lattice_redrawn);
    assert_eq!(processor.clear_calls, 1);
    assert_eq!(editor.lattice.coords(), processor.coords.as_slice());
    assert_eq!(editor.lattice.generation(), 1);
}

#[test]
fn every_widget_flag_is_sent_once() {
    init_logging();
    let mut processor = RecordingProcessor::default();
    let mut editor = Editor::new(&processor);

    editor.mode.select(Mode::Pythagorean);
    editor.midi.edit(MidiField::Cc(4), "100".to_string());
    editor.midi.commit(MidiField::Cc(4)).unwrap();
    editor.origin.edit_freq("432".to_string());
    editor.origin.commit_freq().unwrap();
    editor.origin.select_root(RootNote::from_index(4).unwrap());

    let report = editor.poll(&mut processor);
    assert!(report.mode_sent && report.midi_sent && report.freq_sent && report.root_sent);
    assert!(editor.poll(&mut processor).is_idle());

    assert_eq!(processor.mode_calls, vec![Mode::Pythagorean]);
    assert_eq!(processor.midi_calls.len(), 1);
    assert_eq!(processor.midi_calls[0].shift_ccs[4], 100);
    assert_eq!(processor.freq_calls, vec![432.0]);
    assert_eq!(processor.root_calls, vec![RootNote::from_index(4).unwrap()]);

    assert!(!editor.mode.mode_changed);
    assert!(!editor.midi.setting_changed);
    assert!(!editor.origin.freq_changed);
    assert!(!editor.origin.root_changed);
    // The root reply overwrites the frequency field.
    assert_eq!(editor.origin.what_freq(), 123.0);
}

#[test]
fn panels_start_hidden_and_toggle() {
    let processor = StandaloneProcessor::default();
    let mut editor = Editor::new(&processor);
    assert!(!editor.show_midi_menu());
    assert!(!editor.show_tuning_menu());

    editor.tuning_button.click();
    assert!(editor.show_tuning_menu());
    assert!(!editor.show_midi_menu());
    editor.tuning_button.click();
    assert!(!editor.tuning_button.is_visible());
}

#[test]
fn mode_change_round_trips_through_standalone_processor() {
    init_logging();
    let mut processor = StandaloneProcessor::default();
    let mut editor = Editor::new(&processor);
    assert_eq!(editor.mode.which_mode(), Mode::Duodene);

    editor.mode.select(Mode::Syntonic);
    let first = editor.poll(&mut processor);
    assert!(first.mode_sent);
    // The processor raised its flag during this poll; the redraw follows on the next tick.
    assert!(!first.lattice_redrawn);
    assert!(processor.changed());

    let second = editor.poll(&mut processor);
    assert!(second.lattice_redrawn);
    assert!(!processor.changed());
    assert_eq!(editor.lattice.coords(), lattice::lattice_for_mode(Mode::Syntonic).as_slice());
}

#[test]
fn root_change_updates_frequency_field() {
    init_logging();
    let mut processor = StandaloneProcessor::default();
    let mut editor = Editor::new(&processor);

    editor.origin.select_root(RootNote::from_index(9).unwrap());
    editor.poll(&mut processor);

    assert_eq!(editor.origin.freq_text(), "440.000");
    assert_eq!(processor.origin().root.name(), "A");
    assert!(editor.poll(&mut processor).lattice_redrawn);
}
