// SPDX-License-Identifier: MPL-2.0
//! Remote buttons exposed by the Quick Controls panel.

/// A button on the Quick Controls panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RemoteCommand {
    PowerOn,
    PowerOff,
    PowerToggle,
    VolumeUp,
    VolumeDown,
    VolumeMute,
}

impl RemoteCommand {
    /// Power buttons in display order.
    pub const POWER: [RemoteCommand; 3] = [
        RemoteCommand::PowerOn,
        RemoteCommand::PowerOff,
        RemoteCommand::PowerToggle,
    ];

    /// Volume buttons in display order.
    pub const VOLUME: [RemoteCommand; 3] = [
        RemoteCommand::VolumeDown,
        RemoteCommand::VolumeMute,
        RemoteCommand::VolumeUp,
    ];

    /// ECP key name sent to `/keypress/{key}`.
    #[must_use]
    pub fn ecp_key(self) -> &'static str {
        match self {
            RemoteCommand::PowerOn => "PowerOn",
            RemoteCommand::PowerOff => "PowerOff",
            RemoteCommand::PowerToggle => "Power",
            RemoteCommand::VolumeUp => "VolumeUp",
            RemoteCommand::VolumeDown => "VolumeDown",
            RemoteCommand::VolumeMute => "VolumeMute",
        }
    }

    /// Whether the command repeats once per configured volume step.
    #[must_use]
    pub fn is_stepped(self) -> bool {
        matches!(self, RemoteCommand::VolumeUp | RemoteCommand::VolumeDown)
    }

    /// Button label key.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            RemoteCommand::PowerOn => "quick-controls-power-on",
            RemoteCommand::PowerOff => "quick-controls-power-off",
            RemoteCommand::PowerToggle => "quick-controls-power-toggle",
            RemoteCommand::VolumeUp => "quick-controls-volume-up",
            RemoteCommand::VolumeDown => "quick-controls-volume-down",
            RemoteCommand::VolumeMute => "quick-controls-volume-mute",
        }
    }
}
