// SPDX-License-Identifier: MPL-2.0
//! Preview card.
//!
//! An error takes precedence over a loaded model; with neither, the card
//! shows an empty state with an upload button. The loaded state is a
//! placeholder until a renderer exists.

use super::component::Message;
use super::subcomponents::error_state;
use crate::i18n::fluent::I18n;
use crate::ui::components::error_display::{ErrorDisplay, ErrorSeverity};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::{button, Column, Container, Row, Text};
use iced::{alignment, Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub error: Option<&'a error_state::State>,
    /// File name of the loaded model.
    pub loaded: Option<&'a str>,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let body: Element<'_, Message> = if let Some(error) = ctx.error {
        error_view(ctx.i18n, error)
    } else if let Some(name) = ctx.loaded {
        loaded_view(ctx.i18n, name)
    } else {
        empty_view(ctx.i18n)
    };

    Container::new(
        Column::new()
            .spacing(spacing::SM)
            .push(Text::new(ctx.i18n.tr("preview-title")).size(typography::TITLE_SM))
            .push(
                Container::new(body)
                    .width(Length::Fill)
                    .height(Length::Fixed(sizing::PREVIEW_HEIGHT))
                    .padding(spacing::MD)
                    .align_x(alignment::Horizontal::Center)
                    .align_y(alignment::Vertical::Center)
                    .style(styles::container::preview_surface),
            ),
    )
    .width(Length::Fill)
    .padding(spacing::MD)
    .style(styles::container::card)
    .into()
}

fn error_view<'a>(i18n: &'a I18n, error: &'a error_state::State) -> Element<'a, Message> {
    ErrorDisplay::new(ErrorSeverity::Error)
        .title(i18n.tr("error-title"))
        .message(error.friendly_text(i18n))
        .details(error.details())
        .details_visible(error.show_details())
        .details_labels(
            i18n.tr("error-details-show"),
            i18n.tr("error-details-hide"),
            i18n.tr("error-details-heading"),
        )
        .on_toggle_details(Message::ToggleErrorDetails)
        .action(i18n.tr("preview-upload-button"), Message::OpenFileRequested)
        .view()
}

fn loaded_view<'a>(i18n: &'a I18n, name: &'a str) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(icons::themed(icons::sized(icons::cube(), sizing::ICON_XL)))
        .push(Text::new(i18n.tr("preview-placeholder")).size(typography::BODY))
        .push(
            Text::new(name)
                .size(typography::CAPTION)
                .color(palette::GRAY_500),
        )
        .into()
}

fn empty_view(i18n: &I18n) -> Element<'_, Message> {
    let upload_button = button(
        Row::new()
            .spacing(spacing::XS)
            .align_y(alignment::Vertical::Center)
            .push(icons::tinted(
                icons::sized(icons::upload(), sizing::ICON_SM),
                palette::WHITE,
            ))
            .push(Text::new(i18n.tr("preview-upload-button"))),
    )
    .padding([spacing::XS, spacing::MD])
    .style(styles::button::primary)
    .on_press(Message::OpenFileRequested);

    Container::new(
        Column::new()
            .spacing(spacing::MD)
            .align_x(alignment::Horizontal::Center)
            .push(
                Text::new(i18n.tr("preview-empty"))
                    .size(typography::BODY)
                    .color(palette::GRAY_500),
            )
            .push(upload_button),
    )
    .style(styles::container::empty_preview)
    .padding(spacing::LG)
    .into()
}
