// SPDX-License-Identifier: MPL-2.0
//! Rejected-upload error with collapsible technical details.

use crate::error::UploadError;
use crate::i18n::fluent::I18n;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    error: UploadError,
    show_details: bool,
}

#[derive(Debug, Clone)]
pub enum Message {
    ToggleDetails,
}

impl State {
    #[must_use]
    pub fn new(error: UploadError) -> Self {
        Self {
            error,
            show_details: false,
        }
    }

    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, msg: Message) {
        match msg {
            Message::ToggleDetails => self.show_details = !self.show_details,
        }
    }

    #[must_use]
    pub fn error(&self) -> &UploadError {
        &self.error
    }

    /// Localized message; falls back to the fixed English text when the
    /// key is missing from the active bundle.
    #[must_use]
    pub fn friendly_text(&self, i18n: &I18n) -> String {
        let text = i18n.tr(self.error.i18n_key());
        if text.starts_with("MISSING:") {
            self.error.to_string()
        } else {
            text
        }
    }

    #[must_use]
    pub fn details(&self) -> String {
        self.error.details()
    }

    #[must_use]
    pub fn show_details(&self) -> bool {
        self.show_details
    }
}
