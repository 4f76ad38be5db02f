// SPDX-License-Identifier: MPL-2.0
//! Root view: the landing page with toasts stacked above it.

use super::Message;
use crate::i18n::I18n;
use crate::ui::notifications::{self, Toast};
use crate::ui::page;
use crate::ui::quick_controls::QuickControls;
use iced::widget::Stack;
use iced::{Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub user_name: &'a str,
    pub quick_controls: &'a QuickControls,
    pub notifications: &'a notifications::Manager,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let page = page::view(page::ViewContext {
        i18n: ctx.i18n,
        user_name: ctx.user_name,
        quick_controls: ctx.quick_controls,
    })
    .map(Message::QuickControls);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(page)
        .push(Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification))
        .into()
}
