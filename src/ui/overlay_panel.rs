// SPDX-License-Identifier: MPL-2.0
//! Slide-over panel anchored to the right edge of the window.
//!
//! The panel owns a two-state flag. While closed only the base layer (the
//! page holding the trigger) is rendered; while open a scrim and the sheet are
//! stacked above it. Dismissal follows desktop convention: a click on the
//! scrim, the Escape key, or the close button in the sheet header.

use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, mouse_area, opaque, text, Column, Container, Row, Stack, Text};
use iced::{Element, Length};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlayState {
    #[default]
    Closed,
    Open,
}

/// What closed the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissReason {
    OutsideClick,
    EscapeKey,
    CloseButton,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Open,
    Dismiss(DismissReason),
}

/// Transitions reported to the owner. Repeated opens or dismissals that do
/// not change state report `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    Opened,
    Closed(DismissReason),
}

#[derive(Debug, Default)]
pub struct OverlayPanel {
    state: OverlayState,
}

impl OverlayPanel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> OverlayState {
        self.state
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state == OverlayState::Open
    }

    pub fn update(&mut self, message: Message) -> Event {
        match (message, self.state) {
            (Message::Open, OverlayState::Closed) => {
                self.state = OverlayState::Open;
                Event::Opened
            }
            (Message::Dismiss(reason), OverlayState::Open) => {
                self.state = OverlayState::Closed;
                Event::Closed(reason)
            }
            (Message::Open, OverlayState::Open) | (Message::Dismiss(_), OverlayState::Closed) => {
                Event::None
            }
        }
    }

    /// Renders `base` and, when open, the sheet with `title` and `content`.
    ///
    /// `map` lifts panel messages into the caller's message type so the
    /// scrim and close button can dismiss the panel.
    pub fn view<'a, M: Clone + 'a>(
        &self,
        base: Element<'a, M>,
        title: String,
        close_label: String,
        content: Element<'a, M>,
        map: fn(Message) -> M,
    ) -> Element<'a, M> {
        if !self.is_open() {
            return base;
        }

        let scrim = opaque(
            mouse_area(
                Container::new(text(""))
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .style(styles::overlay::scrim),
            )
            .on_press(map(Message::Dismiss(DismissReason::OutsideClick))),
        );

        let header = Row::new()
            .align_y(Vertical::Center)
            .spacing(spacing::SM)
            .push(
                Container::new(Text::new(title).size(typography::TITLE_MD)).width(Length::Fill),
            )
            .push(
                button(Text::new(close_label).size(typography::BODY))
                    .on_press(map(Message::Dismiss(DismissReason::CloseButton)))
                    .padding([spacing::XXS, spacing::XS])
                    .style(styles::button::close),
            );

        let sheet = Container::new(
            Column::new()
                .spacing(spacing::LG)
                .push(header)
                .push(content),
        )
        .width(Length::Fixed(sizing::SHEET_WIDTH))
        .height(Length::Fill)
        .padding(spacing::LG)
        .style(styles::container::sheet);

        let sheet_layer = Container::new(opaque(sheet))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Right);

        Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(base)
            .push(scrim)
            .push(sheet_layer)
            .into()
    }
}
