// SPDX-License-Identifier: MPL-2.0
//! User interface components, following the Elm-style "state down,
//! messages up" pattern.
//!
//! # Components
//!
//! - [`page`] - Landing page: greeting, brand row, Quick Controls trigger
//! - [`brand_icon`] - Netflix / Disney / Zwift shortcuts
//! - [`icon_badge`] - Fixed-size square badge around a single image
//! - [`overlay_panel`] - Right-anchored slide-over sheet with open/closed state
//! - [`quick_controls`] - TV power and volume controls inside the sheet
//! - [`notifications`] - Toast notifications
//!
//! # Styling
//!
//! - [`design_tokens`] - Colors, spacing, sizing and typography constants
//! - [`styles`] - Style functions for buttons and containers
//! - [`theming`] - Light/Dark/System theme mode

pub mod brand_icon;
pub mod design_tokens;
pub mod icon_badge;
pub mod notifications;
pub mod overlay_panel;
pub mod page;
pub mod quick_controls;
pub mod styles;
pub mod theming;
