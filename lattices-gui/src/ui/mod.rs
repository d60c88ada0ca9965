//! # UI Module
//!
//! This module contains all UI components for the Lattices editor.

pub mod lattice_canvas;
pub mod main_display;
pub mod midi_panel;
pub mod mode_panel;
pub mod origin_panel;
