//! # Lattices - Just-Intonation Lattice Editor
//!
//! This module contains the main GUI application. It shows the pitch lattice
//! of the current tuning and the panels for changing the tuning mode, the
//! MIDI shift mapping and the origin.
//!
//! ## Architecture
//! - **Processor**: owns the tuning state; the GUI only reads it and sends requests
//! - **Editor**: headless widget state from `lattices-core`
//! - **Updates**: a timer subscription polls the editor, which moves changes
//!   between the widgets and the processor

mod ui;

use iced::widget::canvas;
use iced::{self, Element, Subscription, Task, Theme};
use lattices_core::config::EditorConfig;
use lattices_core::editor::Editor;
use lattices_core::editor::midi_menu::MidiField;
use lattices_core::{LatticeProcessor, Mode, RootNote, StandaloneProcessor};
use log::{debug, info};
use ui::main_display::create_main_view;

/// Main entry point for the Lattices application.
///
/// Sets up logging, reads the editor config and opens the window.
pub fn main() -> iced::Result {
    // Set RUST_LOG=debug to see every poll that did work
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    info!("[MAIN] Starting Lattices...");
    let config = EditorConfig::load_or_default();
    let window_size = iced::Size::new(config.window_width, config.window_height);

    let result = iced::application("Lattices", LatticesApp::update, LatticesApp::view)
        .subscription(LatticesApp::subscription)
        .theme(LatticesApp::theme)
        .window_size(window_size)
        .run_with(move || (LatticesApp::new(config), Task::none()));
    info!("[MAIN] Application finished with result: {:?}", result);
    result
}

/// Application message types.
///
/// Widget messages only change editor state and raise flags; the processor
/// is touched on `Tick`.
#[derive(Debug, Clone)]
pub enum Message {
    // Panel toggles
    ToggleMidiMenu,
    ToggleTuningMenu,

    // Mode selector
    ModeSelected(Mode),

    // MIDI menu
    MidiFieldEdited(MidiField, String),
    MidiFieldSubmitted(MidiField),

    // Origin menu
    RootSelected(RootNote),
    FreqEdited(String),
    FreqSubmitted,

    // Poll timer
    Tick,
}

struct LatticesApp {
    processor: StandaloneProcessor,
    editor: Editor,
    config: EditorConfig,

    // Lattice drawing is cached until the editor's snapshot changes
    lattice_cache: canvas::Cache,
    drawn_generation: u64,
}

impl LatticesApp {
    fn new(config: EditorConfig) -> Self {
        let processor = StandaloneProcessor::default();
        let editor = Editor::new(&processor);
        info!(
            "[MAIN] Editor ready, polling every {:?}",
            config.poll_interval()
        );
        Self {
            drawn_generation: editor.lattice.generation(),
            processor,
            editor,
            config,
            lattice_cache: canvas::Cache::new(),
        }
    }

    fn update(&mut self, message: Message) {
        match message {
            Message::ToggleMidiMenu => {
                let shown = self.editor.midi_button.click();
                debug!("[MAIN] MIDI menu visible: {}", shown);
            }
            Message::ToggleTuningMenu => {
                let shown = self.editor.tuning_button.click();
                debug!("[MAIN] Tuning menu visible: {}", shown);
            }
            Message::ModeSelected(mode) => self.editor.mode.select(mode),
            Message::MidiFieldEdited(field, value) => self.editor.midi.edit(field, value),
            Message::MidiFieldSubmitted(field) => {
                // Rejected values are logged and the field is restored
                let _ = self.editor.midi.commit(field);
            }
            Message::RootSelected(root) => self.editor.origin.select_root(root),
            Message::FreqEdited(value) => self.editor.origin.edit_freq(value),
            Message::FreqSubmitted => {
                let _ = self.editor.origin.commit_freq();
            }
            Message::Tick => {
                self.editor.poll(&mut self.processor);
                let generation = self.editor.lattice.generation();
                if generation != self.drawn_generation {
                    self.lattice_cache.clear();
                    self.drawn_generation = generation;
                }
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let lattice = ui::lattice_canvas::LatticeCanvas::new(
            self.editor.lattice.coords(),
            self.processor.origin(),
            self.config.lattice_spacing,
            &self.lattice_cache,
        )
        .view();
        create_main_view(&self.editor, lattice)
    }

    /// Fires the poll timer at the configured interval.
    fn subscription(&self) -> Subscription<Message> {
        iced::time::every(self.config.poll_interval()).map(|_| Message::Tick)
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }
}
