// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use crate::ui::viewer::component;
use iced::{event, time, window, Subscription};
use std::time::Duration;

/// Routes window events to the app and keyboard events to the viewer.
///
/// Keyboard events a widget already captured (e.g. typing in a text field)
/// are not forwarded.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, window_id| match &event {
        event::Event::Window(window::Event::CloseRequested) => {
            Some(Message::WindowCloseRequested(window_id))
        }
        event::Event::Window(window::Event::FileDropped(path)) => {
            Some(Message::FileDropped(path.clone()))
        }
        event::Event::Keyboard(..) => match status {
            event::Status::Ignored => Some(Message::Viewer(component::Message::RawEvent {
                window: window_id,
                event: event.clone(),
            })),
            event::Status::Captured => None,
        },
        _ => None,
    })
}

/// Ticks every 100 ms while toasts are on screen.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(Duration::from_millis(100)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
