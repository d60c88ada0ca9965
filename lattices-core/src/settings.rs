//! # Tuning Settings Module
//!
//! Value types for everything the editor can change on the processor:
//! the tuning mode, the MIDI shift mapping, and the origin (root note
//! plus reference frequency).
//!
//! ## Features
//! - Three just-intonation lattice modes
//! - Five shift CCs and a listen channel with range checking
//! - 12-TET reference frequencies for every root note (A4 = 440 Hz)
//! - Parsing of user-typed text into validated settings

use crate::error::SettingsError;
use crate::lattice::Coord;
use once_cell::sync::Lazy;
use std::fmt;

/// Lowest reference frequency the origin accepts, in Hz.
pub const MIN_REFERENCE_HZ: f64 = 20.0;
/// Highest reference frequency the origin accepts, in Hz.
pub const MAX_REFERENCE_HZ: f64 = 20000.0;

/// The way the twelve pitch classes are laid out on the lattice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// A single chain of fifths.
    Pythagorean,
    /// Fifths folded back by major thirds around the origin.
    Syntonic,
    /// Euler's 4x3 block of fifths and thirds.
    #[default]
    Duodene,
}

impl Mode {
    pub const ALL: [Mode; 3] = [Mode::Pythagorean, Mode::Syntonic, Mode::Duodene];

    pub fn index(self) -> usize {
        match self {
            Mode::Pythagorean => 0,
            Mode::Syntonic => 1,
            Mode::Duodene => 2,
        }
    }

    /// Looks up a mode by index. Unknown indices give `None`.
    pub fn from_index(index: usize) -> Option<Mode> {
        Mode::ALL.get(index).copied()
    }

    pub fn label(self) -> &'static str {
        match self {
            Mode::Pythagorean => "Pythagorean",
            Mode::Syntonic => "Syntonic",
            Mode::Duodene => "Duodene",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Number of CCs used to shift the lattice.
pub const SHIFT_CC_COUNT: usize = 5;

/// MIDI mapping: the CCs that shift the lattice and the channel to listen on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MidiSettings {
    pub shift_ccs: [u8; SHIFT_CC_COUNT],
    /// 1-16, or 0 for omni.
    pub channel: u8,
}

impl MidiSettings {
    pub fn new(shift_ccs: [u8; SHIFT_CC_COUNT], channel: u8) -> Result<Self, SettingsError> {
        for &cc in &shift_ccs {
            check_cc(cc as i64)?;
        }
        check_channel(channel as i64)?;
        Ok(Self { shift_ccs, channel })
    }
}

impl Default for MidiSettings {
    fn default() -> Self {
        Self {
            shift_ccs: [5, 6, 7, 8, 9],
            channel: 1,
        }
    }
}

fn check_cc(value: i64) -> Result<u8, SettingsError> {
    if (0..=127).contains(&value) {
        Ok(value as u8)
    } else {
        Err(SettingsError::InvalidCc(value))
    }
}

fn check_channel(value: i64) -> Result<u8, SettingsError> {
    if (0..=16).contains(&value) {
        Ok(value as u8)
    } else {
        Err(SettingsError::InvalidChannel(value))
    }
}

fn parse_integer(text: &str) -> Result<i64, SettingsError> {
    text.trim().parse::<i64>().map_err(|_| SettingsError::Parse {
        text: text.to_string(),
    })
}

/// Parses a CC number typed into a menu field.
pub fn parse_cc(text: &str) -> Result<u8, SettingsError> {
    check_cc(parse_integer(text)?)
}

/// Parses a MIDI channel typed into a menu field.
pub fn parse_channel(text: &str) -> Result<u8, SettingsError> {
    check_channel(parse_integer(text)?)
}

/// Parses a reference frequency in Hz typed into a menu field.
pub fn parse_frequency(text: &str) -> Result<f64, SettingsError> {
    let value = text.trim().parse::<f64>().map_err(|_| SettingsError::Parse {
        text: text.to_string(),
    })?;
    check_frequency(value)
}

pub fn check_frequency(value: f64) -> Result<f64, SettingsError> {
    if value.is_finite() && (MIN_REFERENCE_HZ..=MAX_REFERENCE_HZ).contains(&value) {
        Ok(value)
    } else {
        Err(SettingsError::InvalidFrequency(value))
    }
}

const NOTE_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// 12-TET frequencies of C4..B4 with A4 = 440 Hz.
///
/// Computed once and used to pick a sensible reference frequency when the
/// root note changes.
static ROOT_FREQUENCIES: Lazy<[f64; 12]> = Lazy::new(|| {
    let mut freqs = [0.0; 12];
    for (i, freq) in freqs.iter_mut().enumerate() {
        // MIDI note 60 is C4, 69 is A4.
        let midi_note = 60 + i as i32;
        *freq = 440.0 * 2.0_f64.powf((midi_note - 69) as f64 / 12.0);
    }
    freqs
});

/// One of the twelve pitch classes, C = 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RootNote(u8);

impl RootNote {
    pub const ALL: [RootNote; 12] = [
        RootNote(0),
        RootNote(1),
        RootNote(2),
        RootNote(3),
        RootNote(4),
        RootNote(5),
        RootNote(6),
        RootNote(7),
        RootNote(8),
        RootNote(9),
        RootNote(10),
        RootNote(11),
    ];

    pub fn from_index(index: usize) -> Result<Self, SettingsError> {
        if index < 12 {
            Ok(RootNote(index as u8))
        } else {
            Err(SettingsError::UnknownRoot(index))
        }
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn name(self) -> &'static str {
        NOTE_NAMES[self.index()]
    }

    /// The 12-TET frequency of this note in the fourth octave.
    pub fn equal_tempered_frequency(self) -> f64 {
        ROOT_FREQUENCIES[self.index()]
    }

    /// The pitch class `steps` semitones above this one.
    pub fn transpose(self, steps: i32) -> RootNote {
        RootNote((self.0 as i32 + steps).rem_euclid(12) as u8)
    }
}

impl fmt::Display for RootNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The pitch the lattice is built from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Origin {
    pub root: RootNote,
    /// Frequency of the root in Hz.
    pub reference_hz: f64,
}

impl Origin {
    pub fn new(root: RootNote, reference_hz: f64) -> Result<Self, SettingsError> {
        Ok(Self {
            root,
            reference_hz: check_frequency(reference_hz)?,
        })
    }

    /// Moves the reference to a new root, staying in the octave the current
    /// reference sits in.
    pub fn retarget_root(&self, root: RootNote) -> f64 {
        let current_base = self.root.equal_tempered_frequency();
        let octave = (self.reference_hz / current_base).log2().round();
        let retargeted = root.equal_tempered_frequency() * 2.0_f64.powf(octave);
        retargeted.clamp(MIN_REFERENCE_HZ, MAX_REFERENCE_HZ)
    }

    /// Frequency in Hz of a lattice point above this origin.
    pub fn frequency_of(&self, coord: Coord) -> f64 {
        self.reference_hz * coord.reduced_ratio()
    }
}

impl Default for Origin {
    fn default() -> Self {
        let root = RootNote::default();
        Self {
            root,
            reference_hz: root.equal_tempered_frequency(),
        }
    }
}
