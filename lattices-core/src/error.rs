//! Errors raised when a user-entered setting cannot be accepted.

use thiserror::Error;

/// A value from one of the editor's menus was rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SettingsError {
    #[error("CC number {0} is out of range (0-127)")]
    InvalidCc(i64),

    #[error("MIDI channel {0} is out of range (0-16, 0 = omni)")]
    InvalidChannel(i64),

    #[error("reference frequency {0} Hz is outside 20-20000 Hz")]
    InvalidFrequency(f64),

    #[error("no root note with index {0}")]
    UnknownRoot(usize),

    #[error("could not read '{text}' as a number")]
    Parse { text: String },
}
