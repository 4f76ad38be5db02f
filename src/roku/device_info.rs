// SPDX-License-Identifier: MPL-2.0
//! Power state reported by `/query/device-info`.

use quick_xml::events::Event;
use quick_xml::Reader;

const POWER_MODE_TAG: &[u8] = b"power-mode";

/// Power mode of the TV as last observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PowerMode {
    PowerOn,
    DisplayOff,
    PowerStandby,
    /// The device could not be reached or answered with an HTTP error.
    Offline,
    /// The device answered but the power mode could not be read.
    #[default]
    Unknown,
}

impl PowerMode {
    /// Maps an ECP `power-mode` value.
    #[must_use]
    pub fn from_ecp(value: &str) -> Self {
        match value.trim() {
            "PowerOn" => PowerMode::PowerOn,
            "DisplayOff" => PowerMode::DisplayOff,
            "PowerStandby" => PowerMode::PowerStandby,
            other => {
                tracing::debug!(value = other, "unrecognized power-mode");
                PowerMode::Unknown
            }
        }
    }

    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            PowerMode::PowerOn => "power-mode-on",
            PowerMode::DisplayOff => "power-mode-display-off",
            PowerMode::PowerStandby => "power-mode-standby",
            PowerMode::Offline => "power-mode-offline",
            PowerMode::Unknown => "power-mode-unknown",
        }
    }
}

/// Extracts the `<power-mode>` element from a device-info document.
///
/// Malformed XML, a missing element, or an empty element yield
/// [`PowerMode::Unknown`].
#[must_use]
pub fn parse_power_mode(xml: &str) -> PowerMode {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut in_power_mode = false;
    let mut value = String::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) if e.local_name().as_ref() == POWER_MODE_TAG => {
                in_power_mode = true;
            }
            Ok(Event::Text(ref e)) if in_power_mode => match e.unescape() {
                Ok(text) => value.push_str(&text),
                Err(_) => return PowerMode::Unknown,
            },
            Ok(Event::End(ref e)) if e.local_name().as_ref() == POWER_MODE_TAG => {
                if value.trim().is_empty() {
                    return PowerMode::Unknown;
                }
                return PowerMode::from_ecp(&value);
            }
            Ok(Event::Eof) => return PowerMode::Unknown,
            Err(err) => {
                tracing::debug!(%err, "device-info is not valid XML");
                return PowerMode::Unknown;
            }
            Ok(_) => {}
        }
    }
}
