// SPDX-License-Identifier: MPL-2.0
//! Label tooltips shown when hovering a badge.
//!
//! The bubble inverts the theme (dark bubble on a light theme and the other
//! way round) so it stays readable over the brand artwork.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow, spacing, typography};
use iced::widget::{container, tooltip, Container, Text};
use iced::{Background, Border, Color, Element, Theme};

pub fn bubble(theme: &Theme) -> container::Style {
    let (background, text) = if theme.extended_palette().is_dark {
        (palette::GRAY_200, palette::GRAY_900)
    } else {
        (palette::GRAY_800, palette::WHITE)
    };

    container::Style {
        background: Some(Background::Color(background)),
        border: Border {
            radius: radius::SM.into(),
            width: border::WIDTH_SM,
            color: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::GRAY_400
            },
        },
        shadow: shadow::SM,
        text_color: Some(text),
        ..Default::default()
    }
}

/// Wraps `content` with a tooltip reading `label`.
pub fn labelled<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    label: impl Into<String>,
    position: tooltip::Position,
) -> tooltip::Tooltip<'a, Message, Theme, iced::Renderer> {
    let tip = Container::new(Text::new(label.into()).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::XS])
        .style(bubble);

    tooltip(content, tip, position).gap(spacing::XXS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn background(theme: &Theme) -> Color {
        match bubble(theme).background {
            Some(Background::Color(color)) => color,
            other => panic!("expected a color background, got {other:?}"),
        }
    }

    #[test]
    fn bubble_inverts_theme() {
        assert!(background(&Theme::Light).r < 0.5);
        assert!(background(&Theme::Dark).r > 0.5);
    }

    #[test]
    fn bubble_sets_text_color() {
        assert!(bubble(&Theme::Light).text_color.is_some());
        assert!(bubble(&Theme::Dark).text_color.is_some());
    }
}
