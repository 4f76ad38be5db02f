// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::notifications;
use crate::ui::quick_controls;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. Component messages are
/// forwarded unchanged.
#[derive(Debug, Clone)]
pub enum Message {
    QuickControls(quick_controls::Message),
    Notification(notifications::NotificationMessage),
    /// Periodic tick for toast auto-dismiss.
    Tick(Instant),
}

/// Runtime flags passed in from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Optional locale override (e.g. `fr`).
    pub lang: Option<String>,
    /// Optional settings directory override.
    pub config_dir: Option<String>,
    /// Optional TV address, takes precedence over `ROKU_IP` and the config.
    pub roku_ip: Option<String>,
}
