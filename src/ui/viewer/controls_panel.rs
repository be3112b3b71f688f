// SPDX-License-Identifier: MPL-2.0
//! Controls card: play/pause, reset, auto-rotate, model reference field.

use super::capabilities::PlaybackControls;
use super::component::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::{button, text_input, toggler, Column, Container, Row, Space, Text};
use iced::{alignment, Element, Length};

pub fn view<'a>(i18n: &'a I18n, controls: &'a dyn PlaybackControls) -> Element<'a, Message> {
    let enabled = controls.controls_enabled();

    let (play_icon, play_label) = if controls.is_playing() {
        (icons::pause(), i18n.tr("controls-pause"))
    } else {
        (icons::play(), i18n.tr("controls-play"))
    };

    let play_button = button(
        Row::new()
            .spacing(spacing::XS)
            .align_y(alignment::Vertical::Center)
            .push(icons::themed(icons::sized(play_icon, sizing::ICON_SM)))
            .push(Text::new(play_label).size(typography::BODY)),
    )
    .width(Length::Fill)
    .padding([spacing::XS, spacing::SM])
    .style(styles::button::outline)
    .on_press_maybe(enabled.then_some(Message::TogglePlayback));

    let reset_button = button(
        Row::new()
            .spacing(spacing::XS)
            .align_y(alignment::Vertical::Center)
            .push(icons::themed(icons::sized(icons::rotate_ccw(), sizing::ICON_SM)))
            .push(Text::new(i18n.tr("controls-reset")).size(typography::BODY)),
    )
    .width(Length::Fill)
    .padding([spacing::XS, spacing::SM])
    .style(styles::button::outline)
    .on_press_maybe(enabled.then_some(Message::Reset));

    let mut rotate_toggle = toggler(controls.auto_rotate()).size(20.0);
    if enabled {
        rotate_toggle = rotate_toggle.on_toggle(|_| Message::ToggleAutoRotate);
    }

    let rotate_row = Row::new()
        .align_y(alignment::Vertical::Center)
        .push(Text::new(i18n.tr("controls-auto-rotate")).size(typography::BODY))
        .push(Space::new().width(Length::Fill))
        .push(rotate_toggle);

    let reference = controls
        .model_reference()
        .map(ToString::to_string)
        .unwrap_or_default();
    let reference_field = text_input(&i18n.tr("controls-model-url-placeholder"), &reference)
        .size(typography::BODY_SM)
        .padding(spacing::XS);

    let load_button = button(Text::new(i18n.tr("controls-load-model")).size(typography::BODY))
        .width(Length::Fill)
        .padding([spacing::XS, spacing::SM])
        .style(styles::button::primary)
        .on_press(Message::OpenFileRequested);

    Container::new(
        Column::new()
            .spacing(spacing::SM)
            .push(Text::new(i18n.tr("controls-title")).size(typography::TITLE_SM))
            .push(
                Row::new()
                    .spacing(spacing::XS)
                    .push(play_button)
                    .push(reset_button),
            )
            .push(rotate_row)
            .push(Text::new(i18n.tr("controls-model-url")).size(typography::BODY_SM))
            .push(reference_field)
            .push(load_button),
    )
    .width(Length::Fill)
    .padding(spacing::MD)
    .style(styles::container::card)
    .into()
}
