// SPDX-License-Identifier: MPL-2.0
//! Toast notifications for command outcomes and startup warnings.
//!
//! - [`notification`] - `Notification` with severity and i18n key
//! - [`manager`] - `Manager` for queuing and auto-dismiss
//! - [`toast`] - rendering of the visible toasts
//!
//! ```ignore
//! let mut manager = Manager::new();
//! manager.push(Notification::success("notification-command-sent").with_arg("command", "Mute"));
//! let overlay = Toast::view_overlay(&manager, &i18n).map(Message::Notification);
//! ```
//!
//! Success and info toasts last 3s, warnings 5s, errors stay until
//! dismissed. At most three are visible; the rest wait in a queue.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
