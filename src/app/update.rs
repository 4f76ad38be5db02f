// SPDX-License-Identifier: MPL-2.0
//! Message handling for the application root.
//!
//! Component events that need I/O are turned into `Task`s here; their
//! results come back as messages.

use super::Message;
use crate::i18n::I18n;
use crate::roku::{RemoteCommand, RokuClient};
use crate::ui::notifications::{self, Notification};
use crate::ui::quick_controls::{self, Event, QuickControls, RequestId};
use iced::Task;

/// Mutable view of the application state needed by the handlers.
pub struct UpdateContext<'a> {
    pub i18n: &'a I18n,
    pub quick_controls: &'a mut QuickControls,
    pub notifications: &'a mut notifications::Manager,
    pub roku: Option<&'a RokuClient>,
    pub volume_steps: u32,
}

pub fn handle_quick_controls(
    ctx: &mut UpdateContext<'_>,
    message: quick_controls::Message,
) -> Task<Message> {
    match ctx.quick_controls.update(message) {
        Event::None | Event::Opened | Event::Closed(_) => Task::none(),
        Event::FetchPowerMode(request) => fetch_power_mode(ctx.roku, request),
        Event::SendCommand(request, command) => {
            send_command(ctx.roku, request, command, ctx.volume_steps)
        }
        Event::CommandSucceeded(command) => {
            tracing::info!(?command, "remote command sent");
            ctx.notifications.clear_command_errors();
            ctx.notifications.push(
                Notification::success("notification-command-sent")
                    .with_arg("command", ctx.i18n.tr(command.i18n_key())),
            );
            if RemoteCommand::POWER.contains(&command) {
                let request = ctx.quick_controls.next_request();
                fetch_power_mode(ctx.roku, request)
            } else {
                Task::none()
            }
        }
        Event::CommandFailed(command, err) => {
            tracing::warn!(?command, error = %err, "remote command failed");
            ctx.notifications.push(
                Notification::error("notification-command-failed")
                    .with_arg("command", ctx.i18n.tr(command.i18n_key()))
                    .with_arg("reason", ctx.i18n.tr(err.i18n_key())),
            );
            Task::none()
        }
    }
}

pub fn handle_notification(
    ctx: &mut UpdateContext<'_>,
    message: &notifications::NotificationMessage,
) -> Task<Message> {
    ctx.notifications.handle_message(message);
    Task::none()
}

pub fn handle_tick(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    ctx.notifications.tick();
    Task::none()
}

fn fetch_power_mode(roku: Option<&RokuClient>, request: RequestId) -> Task<Message> {
    let Some(client) = roku.cloned() else {
        return Task::none();
    };
    Task::perform(async move { client.power_mode().await }, move |mode| {
        Message::QuickControls(quick_controls::Message::PowerModeLoaded(request, mode))
    })
}

fn send_command(
    roku: Option<&RokuClient>,
    request: RequestId,
    command: RemoteCommand,
    volume_steps: u32,
) -> Task<Message> {
    let Some(client) = roku.cloned() else {
        return Task::none();
    };
    tracing::debug!(?command, url = client.base_url(), "dispatching remote command");
    Task::perform(
        async move { client.send(command, volume_steps).await },
        move |result| {
            Message::QuickControls(quick_controls::Message::CommandFinished {
                request,
                command,
                result,
            })
        },
    )
}
