// SPDX-License-Identifier: MPL-2.0
//! Root layout: header, viewer, toast overlay.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::notifications::{self, Toast};
use crate::ui::viewer::component;
use iced::widget::{scrollable, Column, Container, Row, Stack, Text};
use iced::{alignment, Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub viewer: &'a component::State,
    pub notifications: &'a notifications::Manager,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let header = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(icons::themed(icons::sized(icons::cube(), sizing::ICON_LG)))
        .push(Text::new(ctx.i18n.tr("header-title")).size(typography::TITLE_LG));

    let page = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::LG)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .push(header)
        .push(ctx.viewer.view(ctx.i18n).map(Message::Viewer));

    let content = Container::new(scrollable(
        Container::new(page)
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center),
    ))
    .width(Length::Fill)
    .height(Length::Fill);

    let toasts = Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    Stack::new().push(content).push(toasts).into()
}
