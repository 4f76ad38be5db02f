// SPDX-License-Identifier: MPL-2.0
//! Overlay styles for the scrim behind slide-over panels.

use crate::ui::design_tokens::{opacity, palette::BLACK};
use iced::widget::container;
use iced::{Background, Color, Theme};

/// Dimmed backdrop covering the page while a panel is open.
pub fn scrim(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..BLACK
        })),
        ..Default::default()
    }
}
