// SPDX-License-Identifier: MPL-2.0
//! Async HTTP client for a single Roku device.

use super::command::RemoteCommand;
use super::device_info::{self, PowerMode};
use crate::config::ROKU_ECP_PORT;
use crate::error::RokuError;
use std::time::Duration;

const USER_AGENT: &str = concat!("HomeDeck/", env!("CARGO_PKG_VERSION"));

/// Client bound to one TV. Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct RokuClient {
    http: reqwest::Client,
    base_url: String,
}

impl RokuClient {
    /// Builds a client for `address`.
    ///
    /// A bare host (`192.168.1.40`) is expanded to `http://{host}:8060`; an
    /// address that already carries a scheme is used as the base URL.
    pub fn new(address: &str, timeout: Duration) -> Result<Self, RokuError> {
        let address = address.trim();
        if address.is_empty() {
            return Err(RokuError::MissingAddress);
        }

        let base_url = if address.starts_with("http://") || address.starts_with("https://") {
            address.trim_end_matches('/').to_string()
        } else {
            format!("http://{address}:{ROKU_ECP_PORT}")
        };

        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self { http, base_url })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Sends a single keypress such as `PowerOn` or `VolumeUp`.
    pub async fn keypress(&self, key: &str) -> Result<(), RokuError> {
        let url = format!("{}/keypress/{key}", self.base_url);
        let response = self.http.post(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RokuError::Status {
                key: key.to_string(),
                status: status.as_u16(),
                body,
            });
        }

        tracing::debug!(key, "keypress accepted");
        Ok(())
    }

    /// Sends `command`. Volume up/down repeat `volume_steps` times; zero steps
    /// sends nothing.
    pub async fn send(&self, command: RemoteCommand, volume_steps: u32) -> Result<(), RokuError> {
        let repeats = if command.is_stepped() { volume_steps } else { 1 };
        for _ in 0..repeats {
            self.keypress(command.ecp_key()).await?;
        }
        Ok(())
    }

    pub async fn power_on(&self) -> Result<(), RokuError> {
        self.send(RemoteCommand::PowerOn, 1).await
    }

    pub async fn power_off(&self) -> Result<(), RokuError> {
        self.send(RemoteCommand::PowerOff, 1).await
    }

    pub async fn power_toggle(&self) -> Result<(), RokuError> {
        self.send(RemoteCommand::PowerToggle, 1).await
    }

    pub async fn volume_up(&self, steps: u32) -> Result<(), RokuError> {
        self.send(RemoteCommand::VolumeUp, steps).await
    }

    pub async fn volume_down(&self, steps: u32) -> Result<(), RokuError> {
        self.send(RemoteCommand::VolumeDown, steps).await
    }

    pub async fn volume_mute(&self) -> Result<(), RokuError> {
        self.send(RemoteCommand::VolumeMute, 1).await
    }

    /// Reads the current power mode. Never fails: unreachable devices and HTTP
    /// errors report [`PowerMode::Offline`], unreadable answers
    /// [`PowerMode::Unknown`].
    pub async fn power_mode(&self) -> PowerMode {
        let url = format!("{}/query/device-info", self.base_url);

        let response = match self.http.get(&url).send().await {
            Ok(response) => response,
            Err(err) => {
                tracing::debug!(%err, "device-info request failed");
                return PowerMode::Offline;
            }
        };

        if !response.status().is_success() {
            return PowerMode::Offline;
        }

        match response.text().await {
            Ok(body) => device_info::parse_power_mode(&body),
            Err(_) => PowerMode::Offline,
        }
    }
}
