// SPDX-License-Identifier: MPL-2.0
//! Status card.

use super::capabilities::{ModelStatus, StatusIndicator};
use super::component::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::{Column, Container, Row, Text};
use iced::{alignment, Element, Length};

pub fn view<'a>(i18n: &'a I18n, indicator: &dyn StatusIndicator) -> Element<'a, Message> {
    let status = indicator.model_status();
    let (icon, color) = match status {
        ModelStatus::Loaded => (icons::check_circle(), palette::SUCCESS_500),
        ModelStatus::NotLoaded => (icons::alert_circle(), palette::WARNING_500),
    };

    let line = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(icons::tinted(icons::sized(icon, sizing::ICON_SM), color))
        .push(Text::new(i18n.tr(status.i18n_key())).size(typography::BODY));

    Container::new(
        Column::new()
            .spacing(spacing::SM)
            .push(Text::new(i18n.tr("status-title")).size(typography::TITLE_SM))
            .push(line),
    )
    .width(Length::Fill)
    .padding(spacing::MD)
    .style(styles::container::card)
    .into()
}
