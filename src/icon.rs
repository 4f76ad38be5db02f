// SPDX-License-Identifier: MPL-2.0
//! Window icon, rasterized at runtime from the embedded branding SVG.

use iced::window::{icon, Icon};
use resvg::usvg;

const ICON_SIZE: u32 = 128;

/// Renders the logo to a square RGBA icon. `None` if parsing or rendering
/// fails; the window then uses the platform default.
pub fn load_window_icon() -> Option<Icon> {
    const SVG_SOURCE: &str = include_str!("../assets/branding/home_deck.svg");

    let tree = match usvg::Tree::from_data(SVG_SOURCE.as_bytes(), &usvg::Options::default()) {
        Ok(tree) => tree,
        Err(err) => {
            tracing::warn!(error = %err, "window icon could not be parsed");
            return None;
        }
    };

    let size = tree.size();
    let transform = tiny_skia::Transform::from_scale(
        ICON_SIZE as f32 / size.width(),
        ICON_SIZE as f32 / size.height(),
    );
    let mut pixmap = tiny_skia::Pixmap::new(ICON_SIZE, ICON_SIZE)?;
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    icon::from_rgba(pixmap.data().to_vec(), ICON_SIZE, ICON_SIZE).ok()
}
