// SPDX-License-Identifier: MPL-2.0
//! Upload card: a dashed drop zone that opens the file dialog on click.

use super::component::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::{button, Column, Container, Row, Text};
use iced::{alignment, Element, Length};

pub fn view(i18n: &I18n) -> Element<'_, Message> {
    let icon = icons::tinted(icons::sized(icons::upload(), sizing::ICON_LG), palette::GRAY_400);

    let call_to_action = Row::new()
        .spacing(spacing::XXS)
        .push(
            Text::new(i18n.tr("upload-click"))
                .size(typography::BODY)
                .color(palette::PRIMARY_500),
        )
        .push(Text::new(i18n.tr("upload-drag-drop")).size(typography::BODY));

    let hint = Text::new(i18n.tr("upload-formats-hint"))
        .size(typography::CAPTION)
        .color(palette::GRAY_500);

    let zone_content = Column::new()
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Center)
        .push(icon)
        .push(call_to_action)
        .push(hint);

    let zone = button(
        Container::new(zone_content)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center),
    )
    .width(Length::Fill)
    .height(Length::Fixed(sizing::DROP_ZONE_HEIGHT))
    .style(styles::button::drop_zone)
    .on_press(Message::OpenFileRequested);

    Container::new(
        Column::new()
            .spacing(spacing::SM)
            .push(Text::new(i18n.tr("upload-title")).size(typography::TITLE_SM))
            .push(zone),
    )
    .width(Length::Fill)
    .padding(spacing::MD)
    .style(styles::container::card)
    .into()
}
