// SPDX-License-Identifier: MPL-2.0
//! "Quick Controls" sheet: TV power and volume buttons hosted in an
//! [`OverlayPanel`].
//!
//! The component never touches the network itself. It reports what it needs
//! through [`Event`] and receives results back as [`Message`]s, so all state
//! changes still happen in `update`.

use crate::error::RokuError;
use crate::i18n::I18n;
use crate::roku::{PowerMode, RemoteCommand};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::overlay_panel::{self, DismissReason, OverlayPanel};
use crate::ui::styles;
use chrono::{DateTime, Local};
use iced::widget::{button, Column, Row, Text};
use iced::{Element, Length};

const TIME_FORMAT: &str = "%H:%M:%S";

/// Tags one outgoing request so late answers can be told apart from current
/// ones. Issued in increasing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct RequestId(u64);

#[derive(Debug, Clone)]
pub enum Message {
    Panel(overlay_panel::Message),
    Send(RemoteCommand),
    /// Periodic power-mode refresh while open.
    PollTick,
    PowerModeLoaded(RequestId, PowerMode),
    CommandFinished {
        request: RequestId,
        command: RemoteCommand,
        result: Result<(), RokuError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    /// Panel opened without a TV to query.
    Opened,
    Closed(DismissReason),
    SendCommand(RequestId, RemoteCommand),
    /// Read the power mode and answer with `PowerModeLoaded(id, _)`.
    FetchPowerMode(RequestId),
    CommandSucceeded(RemoteCommand),
    CommandFailed(RemoteCommand, RokuError),
}

#[derive(Debug, Default)]
pub struct QuickControls {
    panel: OverlayPanel,
    has_device: bool,
    power_mode: PowerMode,
    last_checked: Option<DateTime<Local>>,
    pending: Option<(RequestId, RemoteCommand)>,
    last_request: RequestId,
    /// Newest power-mode request whose answer has been applied.
    applied_reading: RequestId,
}

impl QuickControls {
    #[must_use]
    pub fn new(has_device: bool) -> Self {
        Self {
            has_device,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.panel.is_open()
    }

    #[must_use]
    pub fn panel(&self) -> &OverlayPanel {
        &self.panel
    }

    #[must_use]
    pub fn has_device(&self) -> bool {
        self.has_device
    }

    #[must_use]
    pub fn power_mode(&self) -> PowerMode {
        self.power_mode
    }

    #[must_use]
    pub fn last_checked(&self) -> Option<DateTime<Local>> {
        self.last_checked
    }

    /// Command currently in flight, if any.
    #[must_use]
    pub fn pending(&self) -> Option<RemoteCommand> {
        self.pending.map(|(_, command)| command)
    }

    /// Whether the power mode should be polled right now.
    #[must_use]
    pub fn wants_polling(&self) -> bool {
        self.has_device && self.is_open()
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::Panel(panel_message) => match self.panel.update(panel_message) {
                overlay_panel::Event::Opened => {
                    tracing::info!("quick controls opened");
                    if self.has_device {
                        Event::FetchPowerMode(self.next_request())
                    } else {
                        Event::Opened
                    }
                }
                overlay_panel::Event::Closed(reason) => {
                    tracing::info!(?reason, "quick controls dismissed");
                    Event::Closed(reason)
                }
                overlay_panel::Event::None => Event::None,
            },
            Message::Send(command) => {
                if !self.has_device {
                    tracing::warn!(?command, "no TV address configured, command ignored");
                    return Event::None;
                }
                let request = self.next_request();
                self.pending = Some((request, command));
                Event::SendCommand(request, command)
            }
            Message::PollTick => {
                if self.wants_polling() {
                    Event::FetchPowerMode(self.next_request())
                } else {
                    Event::None
                }
            }
            Message::PowerModeLoaded(request, mode) => {
                if request <= self.applied_reading {
                    tracing::debug!(?request, "dropping stale power-mode reading");
                    return Event::None;
                }
                self.applied_reading = request;
                self.record_power_mode(mode, Local::now());
                Event::None
            }
            Message::CommandFinished {
                request,
                command,
                result,
            } => {
                if self.pending.is_some_and(|(pending, _)| pending == request) {
                    self.pending = None;
                }
                match result {
                    Ok(()) => Event::CommandSucceeded(command),
                    Err(err) => Event::CommandFailed(command, err),
                }
            }
        }
    }

    /// Issues a new request id, e.g. for a re-read after a power command.
    pub fn next_request(&mut self) -> RequestId {
        self.last_request = RequestId(self.last_request.0 + 1);
        self.last_request
    }

    /// Stores a power-mode reading. Returns `true` if the mode changed.
    pub fn record_power_mode(&mut self, mode: PowerMode, at: DateTime<Local>) -> bool {
        self.last_checked = Some(at);
        if mode == self.power_mode {
            return false;
        }
        tracing::info!(from = ?self.power_mode, to = ?mode, "TV power mode changed");
        self.power_mode = mode;
        true
    }

    /// Sheet title, present only while the sheet is mounted.
    #[must_use]
    pub fn title(&self, i18n: &I18n) -> Option<String> {
        self.is_open().then(|| i18n.tr("quick-controls-title"))
    }

    #[must_use]
    pub fn status_line(&self, i18n: &I18n) -> String {
        let mode = i18n.tr(self.power_mode.i18n_key());
        match self.last_checked {
            Some(at) => {
                let time = at.format(TIME_FORMAT).to_string();
                i18n.tr_with_args(
                    "quick-controls-status-checked",
                    &[("mode", mode.as_str()), ("time", time.as_str())],
                )
            }
            None => i18n.tr_with_args("quick-controls-status", &[("mode", mode.as_str())]),
        }
    }

    /// Renders `base` with the sheet stacked on top while open.
    pub fn view<'a>(&'a self, base: Element<'a, Message>, i18n: &'a I18n) -> Element<'a, Message> {
        if !self.is_open() {
            return base;
        }

        self.panel.view(
            base,
            i18n.tr("quick-controls-title"),
            i18n.tr("quick-controls-close"),
            self.content(i18n),
            Message::Panel,
        )
    }

    fn content<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        if !self.has_device {
            return Text::new(i18n.tr("quick-controls-no-device"))
                .size(typography::BODY)
                .into();
        }

        let mut column = Column::new()
            .spacing(spacing::MD)
            .push(Text::new(self.status_line(i18n)).size(typography::BODY))
            .push(self.section(i18n, "quick-controls-power-section", &RemoteCommand::POWER))
            .push(self.section(i18n, "quick-controls-volume-section", &RemoteCommand::VOLUME));

        if let Some(command) = self.pending() {
            let label = i18n.tr(command.i18n_key());
            column = column.push(
                Text::new(i18n.tr_with_args("quick-controls-sending", &[("command", &label)]))
                    .size(typography::CAPTION),
            );
        }

        column.into()
    }

    fn section<'a>(
        &'a self,
        i18n: &'a I18n,
        title_key: &str,
        commands: &[RemoteCommand],
    ) -> Element<'a, Message> {
        let buttons = commands.iter().fold(Row::new().spacing(spacing::XS), |row, &command| {
            row.push(
                button(Text::new(i18n.tr(command.i18n_key())).size(typography::BODY))
                    .on_press(Message::Send(command))
                    .width(Length::Fill)
                    .padding(spacing::XS)
                    .style(styles::button::control(self.pending() == Some(command))),
            )
        });

        Column::new()
            .spacing(spacing::XS)
            .push(Text::new(i18n.tr(title_key)).size(typography::TITLE_SM))
            .push(buttons)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn opened(has_device: bool) -> QuickControls {
        let mut controls = QuickControls::new(has_device);
        controls.update(Message::Panel(overlay_panel::Message::Open));
        controls
    }

    fn send(controls: &mut QuickControls, command: RemoteCommand) -> RequestId {
        match controls.update(Message::Send(command)) {
            Event::SendCommand(request, sent) => {
                assert_eq!(sent, command);
                request
            }
            other => panic!("expected SendCommand, got {other:?}"),
        }
    }

    fn finished(request: RequestId, command: RemoteCommand) -> Message {
        Message::CommandFinished {
            request,
            command,
            result: Ok(()),
        }
    }

    fn fetch(controls: &mut QuickControls) -> RequestId {
        match controls.update(Message::PollTick) {
            Event::FetchPowerMode(request) => request,
            other => panic!("expected FetchPowerMode, got {other:?}"),
        }
    }

    #[test]
    fn opening_with_device_fetches_power_mode() {
        let mut controls = QuickControls::new(true);
        assert!(matches!(
            controls.update(Message::Panel(overlay_panel::Message::Open)),
            Event::FetchPowerMode(_)
        ));
        assert!(controls.wants_polling());
    }

    #[test]
    fn opening_without_device_only_reports_open() {
        let mut controls = QuickControls::new(false);
        assert_eq!(
            controls.update(Message::Panel(overlay_panel::Message::Open)),
            Event::Opened
        );
    }

    #[test]
    fn poll_tick_only_fetches_while_open_with_device() {
        let mut closed = QuickControls::new(true);
        assert_eq!(closed.update(Message::PollTick), Event::None);

        let mut no_device = opened(false);
        assert_eq!(no_device.update(Message::PollTick), Event::None);

        let mut ready = opened(true);
        assert!(matches!(ready.update(Message::PollTick), Event::FetchPowerMode(_)));
    }

    #[test]
    fn send_marks_command_pending_until_finished() {
        let mut controls = opened(true);
        let request = send(&mut controls, RemoteCommand::VolumeMute);
        assert_eq!(controls.pending(), Some(RemoteCommand::VolumeMute));

        let event = controls.update(finished(request, RemoteCommand::VolumeMute));
        assert_eq!(event, Event::CommandSucceeded(RemoteCommand::VolumeMute));
        assert_eq!(controls.pending(), None);
    }

    #[test]
    fn repeated_command_stays_pending_until_last_send_finishes() {
        let mut controls = opened(true);
        let first = send(&mut controls, RemoteCommand::VolumeUp);
        let second = send(&mut controls, RemoteCommand::VolumeUp);
        assert_ne!(first, second);

        controls.update(finished(first, RemoteCommand::VolumeUp));
        assert_eq!(controls.pending(), Some(RemoteCommand::VolumeUp));

        controls.update(finished(second, RemoteCommand::VolumeUp));
        assert_eq!(controls.pending(), None);
    }

    #[test]
    fn older_completion_keeps_newer_pending_command() {
        let mut controls = opened(true);
        let up = send(&mut controls, RemoteCommand::VolumeUp);
        send(&mut controls, RemoteCommand::VolumeDown);

        controls.update(finished(up, RemoteCommand::VolumeUp));
        assert_eq!(controls.pending(), Some(RemoteCommand::VolumeDown));
    }

    #[test]
    fn failed_command_is_reported_and_panel_stays_open() {
        let mut controls = opened(true);
        let request = send(&mut controls, RemoteCommand::PowerOff);
        let event = controls.update(Message::CommandFinished {
            request,
            command: RemoteCommand::PowerOff,
            result: Err(RokuError::Request("timed out".into())),
        });
        assert_eq!(
            event,
            Event::CommandFailed(RemoteCommand::PowerOff, RokuError::Request("timed out".into()))
        );
        assert!(controls.is_open());
        assert_eq!(controls.pending(), None);
    }

    #[test]
    fn send_without_device_is_ignored() {
        let mut controls = opened(false);
        assert_eq!(controls.update(Message::Send(RemoteCommand::PowerOn)), Event::None);
        assert_eq!(controls.pending(), None);
    }

    #[test]
    fn late_reading_does_not_overwrite_newer_one() {
        let mut controls = opened(true);
        let poll = fetch(&mut controls);
        let reread = controls.next_request();

        controls.update(Message::PowerModeLoaded(reread, PowerMode::PowerOn));
        controls.update(Message::PowerModeLoaded(poll, PowerMode::PowerStandby));

        assert_eq!(controls.power_mode(), PowerMode::PowerOn);
    }

    #[test]
    fn readings_in_order_are_applied() {
        let mut controls = opened(true);
        let first = fetch(&mut controls);
        let second = fetch(&mut controls);

        controls.update(Message::PowerModeLoaded(first, PowerMode::PowerStandby));
        controls.update(Message::PowerModeLoaded(second, PowerMode::DisplayOff));

        assert_eq!(controls.power_mode(), PowerMode::DisplayOff);
        assert!(controls.last_checked().is_some());
    }

    #[test]
    fn identical_readings_do_not_count_as_change() {
        let mut controls = QuickControls::new(true);
        let at = Local.with_ymd_and_hms(2026, 3, 1, 20, 15, 0).unwrap();

        assert!(controls.record_power_mode(PowerMode::PowerOn, at));
        assert!(!controls.record_power_mode(PowerMode::PowerOn, at));
        assert!(controls.record_power_mode(PowerMode::Offline, at));
        assert_eq!(controls.power_mode(), PowerMode::Offline);
        assert_eq!(controls.last_checked(), Some(at));
    }

    #[test]
    fn dismiss_reports_reason() {
        let mut controls = opened(true);
        assert_eq!(
            controls.update(Message::Panel(overlay_panel::Message::Dismiss(
                DismissReason::EscapeKey
            ))),
            Event::Closed(DismissReason::EscapeKey)
        );
        assert!(!controls.wants_polling());
    }
}
