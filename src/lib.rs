// SPDX-License-Identifier: MPL-2.0
//! `home_deck` is a living-room landing page built with the Iced GUI
//! framework.
//!
//! It greets the household, shows brand shortcuts, and opens a Quick
//! Controls sheet that drives a Roku TV through the External Control
//! Protocol. Text is localized with Fluent and preferences live in a TOML
//! settings file.

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod icon;
pub mod logging;
pub mod roku;
pub mod ui;
