// lattices-core/src/lib.rs

//! The core logic for the Lattices just-intonation editor.
//! This crate holds the pitch lattice model, the contract with the
//! processor that owns the tuning state, and the headless editor state
//! that the GUI drives. It is completely headless and contains no GUI code.

pub mod config;
pub mod editor;
pub mod error;
pub mod lattice;
pub mod processor;
pub mod settings;

pub use error::SettingsError;
pub use lattice::{Coord, Ratio};
pub use processor::{LatticeProcessor, StandaloneProcessor};
pub use settings::{MidiSettings, Mode, Origin, RootNote};
