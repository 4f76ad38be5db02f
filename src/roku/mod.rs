// SPDX-License-Identifier: MPL-2.0
//! Roku External Control Protocol (ECP) client.
//!
//! ECP is a plain HTTP API served by Roku devices on port 8060. The Quick
//! Controls panel uses two endpoints:
//!
//! - `POST /keypress/{key}` to simulate remote buttons (power, volume)
//! - `GET /query/device-info` to read the current `power-mode`
//!
//! # Components
//!
//! - [`command`] - `RemoteCommand` buttons and their ECP key names
//! - [`device_info`] - `PowerMode` and the device-info XML parser
//! - [`client`] - `RokuClient`, the async HTTP client

pub mod client;
pub mod command;
pub mod device_info;

pub use client::RokuClient;
pub use command::RemoteCommand;
pub use device_info::PowerMode;
