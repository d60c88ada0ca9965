//! MIDI settings panel: one numeric field per shift CC plus the channel.
//! Values are applied when Enter is pressed in a field.

use iced::widget::{column, row, text, text_input};
use iced::{Alignment, Element, Length};
use lattices_core::editor::midi_menu::{MidiField, MidiMenu};

use super::main_display::panel;
use crate::Message;

pub fn view(menu: &MidiMenu) -> Element<'static, Message> {
    let fields = MidiField::all().fold(column![].spacing(4), |col, field| {
        col.push(
            row![
                text(field.label()).size(13).width(Length::Fill),
                text_input("", menu.text(field))
                    .on_input(move |value| Message::MidiFieldEdited(field, value))
                    .on_submit(Message::MidiFieldSubmitted(field))
                    .size(13)
                    .padding(4)
                    .width(Length::Fixed(52.0)),
            ]
            .spacing(6)
            .align_y(Alignment::Center),
        )
    });

    panel(column![text("CC / Channel").size(14), fields].spacing(8))
}
