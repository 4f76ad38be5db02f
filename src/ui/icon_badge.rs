// SPDX-License-Identifier: MPL-2.0
//! Fixed-size square badge used to present icons uniformly.
//!
//! Brand artwork is embedded at build time and looked up by its source path
//! (relative to `assets/`). A source with no embedded file renders a
//! placeholder carrying the icon label instead of the image.

use super::brand_icon::DisplayIcon;
use crate::ui::design_tokens::{border, palette, radius, sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{container, svg, text, tooltip, Container, Svg};
use iced::{Border, Element, Length, Theme};
use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "assets/"]
struct BadgeAssets;

/// Wraps arbitrary content in the badge container, centered.
pub fn view<'a, Message: 'a>(content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    Container::new(content)
        .width(Length::Fixed(sizing::BADGE))
        .height(Length::Fixed(sizing::BADGE))
        .padding(spacing::MD)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::badge)
        .into()
}

/// Looks up the embedded SVG for `source`.
#[must_use]
pub fn resolve(source: &str) -> Option<svg::Handle> {
    BadgeAssets::get(source).map(|file| svg::Handle::from_memory(file.data))
}

/// A single image for `icon`, labelled with the icon's label on hover.
pub fn image<'a, Message: 'a>(icon: &DisplayIcon) -> Element<'a, Message> {
    let content: Element<'a, Message> = match resolve(icon.image_source) {
        Some(handle) => Svg::new(handle)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        None => {
            tracing::warn!(source = icon.image_source, "badge image missing");
            broken_image(icon.label)
        }
    };

    styles::tooltip::labelled(content, icon.label, tooltip::Position::Bottom).into()
}

fn broken_image<'a, Message: 'a>(label: &'static str) -> Element<'a, Message> {
    Container::new(text(label).size(typography::BODY))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(|_theme: &Theme| container::Style {
            text_color: Some(palette::GRAY_400),
            border: Border {
                color: palette::GRAY_400,
                width: border::WIDTH_SM,
                radius: radius::SM.into(),
            },
            ..Default::default()
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_source_does_not_resolve() {
        assert!(resolve("icons/does-not-exist.svg").is_none());
    }

    #[test]
    fn missing_image_still_renders() {
        let icon = DisplayIcon {
            label: "Ghost",
            image_source: "icons/ghost.svg",
        };
        let _element: Element<'_, ()> = view(image(&icon));
    }
}
