//! # Main Display Module
//!
//! This module contains the main window layout: the lattice fills the
//! window and the settings panels float over its bottom corners.

use iced::widget::{button, column, container, horizontal_space, row, stack, text, vertical_space};
use iced::{Alignment, Background, Border, Color, Element, Length, Theme};
use lattices_core::editor::panel::PanelToggle;
use lattices_core::editor::Editor;

use super::{midi_panel, mode_panel, origin_panel};
use crate::Message;

/// Width of the MIDI column (bottom left).
const MIDI_COLUMN_WIDTH: f32 = 170.0;
/// Width of the tuning column (bottom right).
const TUNING_COLUMN_WIDTH: f32 = 216.0;

const PANEL_BACKGROUND: Color = Color { r: 0.16, g: 0.16, b: 0.18, a: 0.95 };
const TOGGLE_ON: Color = Color { r: 0.85, g: 0.75, b: 0.85, a: 1.0 };
const TOGGLE_OFF: Color = Color { r: 0.25, g: 0.25, b: 0.28, a: 1.0 };

/// Creates the complete editor view around an already built lattice canvas.
pub fn create_main_view<'a>(editor: &'a Editor, lattice: Element<'a, Message>) -> Element<'a, Message> {
    // MIDI column: panel above its toggle button
    let mut midi_column = column![].spacing(6).width(Length::Fixed(MIDI_COLUMN_WIDTH));
    if editor.show_midi_menu() {
        midi_column = midi_column.push(midi_panel::view(&editor.midi));
    }
    midi_column = midi_column.push(make_toggle_button(&editor.midi_button, Message::ToggleMidiMenu));

    // Tuning column: mode selector and origin menu share one toggle
    let mut tuning_column = column![].spacing(6).width(Length::Fixed(TUNING_COLUMN_WIDTH));
    if editor.show_tuning_menu() {
        tuning_column = tuning_column
            .push(mode_panel::view(&editor.mode))
            .push(origin_panel::view(&editor.origin));
    }
    tuning_column = tuning_column.push(make_toggle_button(&editor.tuning_button, Message::ToggleTuningMenu));

    let overlay = column![
        vertical_space(),
        row![midi_column, horizontal_space(), tuning_column].align_y(Alignment::End),
    ]
    .width(Length::Fill)
    .height(Length::Fill)
    .padding(10);

    stack![lattice, overlay].into()
}

/// Creates a show/hide button that stays highlighted while its panel is open.
fn make_toggle_button(toggle: &PanelToggle, message: Message) -> Element<'static, Message> {
    let active = toggle.is_toggled();
    button(text(toggle.label()).size(14).width(Length::Fill))
        .width(Length::Fill)
        .padding([6, 10])
        .style(move |theme, status| toggle_style(theme, status, active))
        .on_press(message)
        .into()
}

/// Button style shared by the panel toggles and the mode selector.
pub fn toggle_style(_theme: &Theme, status: button::Status, active: bool) -> button::Style {
    let base = if active { TOGGLE_ON } else { TOGGLE_OFF };
    let background = match status {
        button::Status::Hovered => Color { a: 0.85, ..base },
        _ => base,
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: if active { Color::BLACK } else { Color::WHITE },
        border: Border {
            radius: 4.0.into(),
            ..Border::default()
        },
        ..button::Style::default()
    }
}

/// Wraps panel content in the shared dark rounded box.
pub fn panel<'a>(content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    container(content)
        .width(Length::Fill)
        .padding(8)
        .style(|_theme| container::Style {
            background: Some(Background::Color(PANEL_BACKGROUND)),
            border: Border {
                radius: 6.0.into(),
                ..Border::default()
            },
            ..container::Style::default()
        })
        .into()
}
