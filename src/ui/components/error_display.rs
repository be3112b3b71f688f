// SPDX-License-Identifier: MPL-2.0
//! Inline error card.
//!
//! Shows a severity icon, a localized title and message, an optional
//! action button, and technical details the user can expand.
//!
//! ```ignore
//! ErrorDisplay::new(ErrorSeverity::Error)
//!     .title(i18n.tr("error-title"))
//!     .message(i18n.tr("error-unsupported-file-type"))
//!     .details(error.details())
//!     .details_visible(show_details)
//!     .on_toggle_details(Message::ToggleErrorDetails)
//!     .view()
//! ```

use crate::ui::design_tokens::{border, palette, radius, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::svg::Svg;
use iced::widget::{button, container, rule, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorSeverity {
    #[default]
    Error,
    Warning,
    Info,
}

impl ErrorSeverity {
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            ErrorSeverity::Error => palette::ERROR_500,
            ErrorSeverity::Warning => palette::WARNING_500,
            ErrorSeverity::Info => palette::INFO_500,
        }
    }

    #[must_use]
    pub fn icon(self) -> Svg<'static> {
        match self {
            ErrorSeverity::Error => icons::alert_circle(),
            ErrorSeverity::Warning => icons::warning(),
            ErrorSeverity::Info => icons::info(),
        }
    }
}

/// Builder for the error card. Labels default to English; pass localized
/// ones with [`ErrorDisplay::details_labels`].
#[derive(Debug, Clone)]
pub struct ErrorDisplay<Message> {
    severity: ErrorSeverity,
    title: Option<String>,
    message: Option<String>,
    details: Option<String>,
    show_details: bool,
    action: Option<(String, Message)>,
    toggle_details_message: Option<Message>,
    show_details_label: String,
    hide_details_label: String,
    details_heading_label: String,
}

impl<Message> Default for ErrorDisplay<Message> {
    fn default() -> Self {
        Self {
            severity: ErrorSeverity::default(),
            title: None,
            message: None,
            details: None,
            show_details: false,
            action: None,
            toggle_details_message: None,
            show_details_label: "Show details".to_string(),
            hide_details_label: "Hide details".to_string(),
            details_heading_label: "Technical details".to_string(),
        }
    }
}

impl<Message: Clone + 'static> ErrorDisplay<Message> {
    #[must_use]
    pub fn new(severity: ErrorSeverity) -> Self {
        Self {
            severity,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    #[must_use]
    pub fn details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    #[must_use]
    pub fn details_visible(mut self, visible: bool) -> Self {
        self.show_details = visible;
        self
    }

    /// Adds a primary button below the message.
    #[must_use]
    pub fn action(mut self, label: impl Into<String>, message: Message) -> Self {
        self.action = Some((label.into(), message));
        self
    }

    /// Without this the details toggle is not rendered.
    #[must_use]
    pub fn on_toggle_details(mut self, message: Message) -> Self {
        self.toggle_details_message = Some(message);
        self
    }

    #[must_use]
    pub fn details_labels(
        mut self,
        show_label: impl Into<String>,
        hide_label: impl Into<String>,
        heading_label: impl Into<String>,
    ) -> Self {
        self.show_details_label = show_label.into();
        self.hide_details_label = hide_label.into();
        self.details_heading_label = heading_label.into();
        self
    }

    pub fn view(self) -> Element<'static, Message> {
        let accent_color = self.severity.color();
        let icon = icons::tinted(icons::sized(self.severity.icon(), sizing::ICON_LG), accent_color);

        let mut content = Column::new().spacing(spacing::XS).width(Length::Fill);

        if let Some(title) = self.title {
            content = content.push(Text::new(title).size(typography::TITLE_SM).style(
                move |_theme: &Theme| text::Style {
                    color: Some(accent_color),
                },
            ));
        }

        if let Some(message) = self.message {
            content = content.push(Text::new(message).size(typography::BODY));
        }

        if let Some((label, msg)) = self.action {
            content = content.push(
                button(Text::new(label).size(typography::BODY))
                    .on_press(msg)
                    .padding([spacing::XS, spacing::MD])
                    .style(styles::button::primary),
            );
        }

        if let (Some(details), Some(toggle_msg)) = (self.details, self.toggle_details_message) {
            let toggle_label = if self.show_details {
                self.hide_details_label
            } else {
                self.show_details_label
            };
            content = content.push(
                button(Text::new(toggle_label).size(typography::BODY_SM))
                    .on_press(toggle_msg)
                    .padding(spacing::XXS)
                    .style(styles::button::ghost),
            );

            if self.show_details {
                let muted = |theme: &Theme| text::Style {
                    color: Some(theme.extended_palette().secondary.base.text),
                };
                content = content.push(
                    Column::new()
                        .spacing(spacing::XXS)
                        .push(rule::horizontal(1))
                        .push(
                            Text::new(self.details_heading_label)
                                .size(typography::BODY_SM)
                                .style(muted),
                        )
                        .push(Text::new(details).size(typography::CAPTION).style(muted)),
                );
            }
        }

        let row = Row::new()
            .spacing(spacing::MD)
            .align_y(alignment::Vertical::Top)
            .push(icon)
            .push(content);

        Container::new(row)
            .width(Length::Fill)
            .padding(spacing::MD)
            .style(move |theme: &Theme| error_container_style(theme, accent_color))
            .into()
    }
}

fn error_container_style(theme: &Theme, accent_color: Color) -> container::Style {
    container::Style {
        background: Some(theme.extended_palette().background.weak.color.into()),
        border: iced::Border {
            color: accent_color,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}
