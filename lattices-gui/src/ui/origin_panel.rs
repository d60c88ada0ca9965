//! Origin panel: root note picker and reference frequency field.

use iced::widget::{column, pick_list, row, text, text_input};
use iced::{Alignment, Element, Length};
use lattices_core::editor::origin_menu::OriginMenu;
use lattices_core::RootNote;

use super::main_display::panel;
use crate::Message;

pub fn view(menu: &OriginMenu) -> Element<'static, Message> {
    let root = row![
        text("Root").size(14).width(Length::Fill),
        pick_list(RootNote::ALL, Some(menu.which_note()), Message::RootSelected)
            .text_size(14)
            .width(Length::Fixed(90.0)),
    ]
    .spacing(6)
    .align_y(Alignment::Center);

    let freq = row![
        text("Frequency (Hz)").size(14).width(Length::Fill),
        text_input("Hz", menu.freq_text())
            .on_input(Message::FreqEdited)
            .on_submit(Message::FreqSubmitted)
            .size(14)
            .padding(4)
            .width(Length::Fixed(90.0)),
    ]
    .spacing(6)
    .align_y(Alignment::Center);

    panel(column![root, freq].spacing(8))
}
