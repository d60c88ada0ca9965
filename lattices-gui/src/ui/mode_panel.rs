//! Mode selector panel: three radio-style buttons, one per lattice mode.

use iced::widget::{button, column, text};
use iced::{Element, Length};
use lattices_core::editor::mode::ModeSelector;
use lattices_core::Mode;

use super::main_display::{panel, toggle_style};
use crate::Message;

pub fn view(selector: &ModeSelector) -> Element<'static, Message> {
    let buttons = Mode::ALL
        .into_iter()
        .zip(selector.toggle_states())
        .fold(column![].spacing(5), |col, (mode, active)| {
            col.push(
                button(text(mode.label()).size(14).width(Length::Fill))
                    .width(Length::Fill)
                    .padding([6, 10])
                    .style(move |theme, status| toggle_style(theme, status, active))
                    .on_press(Message::ModeSelected(mode)),
            )
        });

    panel(buttons)
}
