// SPDX-License-Identifier: MPL-2.0
//! Landing page: greeting, brand shortcuts and the Quick Controls trigger.

use crate::i18n::I18n;
use crate::ui::brand_icon::BrandIcon;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::overlay_panel;
use crate::ui::quick_controls::{self, QuickControls};
use crate::ui::styles;
use iced::alignment::Horizontal;
use iced::widget::{button, Column, Container, Row, Text};
use iced::{Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub user_name: &'a str,
    pub quick_controls: &'a QuickControls,
}

#[must_use]
pub fn heading(i18n: &I18n, user_name: &str) -> String {
    i18n.tr_with_args("page-greeting", &[("name", user_name)])
}

#[must_use]
pub fn trigger_label(i18n: &I18n) -> String {
    i18n.tr("page-open-quick-controls")
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, quick_controls::Message> {
    let icons = BrandIcon::ALL
        .iter()
        .fold(Row::new().spacing(spacing::LG), |row, brand| row.push(brand.view()));

    let trigger = button(Text::new(trigger_label(ctx.i18n)).size(typography::BODY))
        .on_press(quick_controls::Message::Panel(overlay_panel::Message::Open))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::primary);

    let body = Column::new()
        .spacing(spacing::XL)
        .align_x(Horizontal::Center)
        .max_width(sizing::PAGE_MAX_WIDTH)
        .push(Text::new(heading(ctx.i18n, ctx.user_name)).size(typography::DISPLAY))
        .push(icons)
        .push(trigger);

    let page = Container::new(body)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::XXL)
        .align_x(Horizontal::Center)
        .into();

    ctx.quick_controls.view(page, ctx.i18n)
}
