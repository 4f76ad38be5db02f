// SPDX-License-Identifier: MPL-2.0
//! Subscriptions: Escape handling for the open sheet, the toast tick and
//! power-mode polling.

use super::Message;
use crate::ui::overlay_panel::{self, DismissReason};
use crate::ui::quick_controls;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, time, Subscription};
use std::time::Duration;

const TOAST_TICK: Duration = Duration::from_millis(100);

/// Routes Escape to the sheet while it is open. Keys already captured by a
/// widget are left alone.
pub fn create_event_subscription(panel_open: bool) -> Subscription<Message> {
    if !panel_open {
        return Subscription::none();
    }

    event::listen_with(|event, status, _window_id| match (event, status) {
        (
            event::Event::Keyboard(keyboard::Event::KeyPressed {
                key: Key::Named(Named::Escape),
                ..
            }),
            event::Status::Ignored,
        ) => Some(Message::QuickControls(quick_controls::Message::Panel(
            overlay_panel::Message::Dismiss(DismissReason::EscapeKey),
        ))),
        _ => None,
    })
}

/// Ticks only while notifications are showing or queued.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(TOAST_TICK).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

pub fn create_poll_subscription(wants_polling: bool, interval: Duration) -> Subscription<Message> {
    if wants_polling {
        time::every(interval).map(|_| Message::QuickControls(quick_controls::Message::PollTick))
    } else {
        Subscription::none()
    }
}
