// SPDX-License-Identifier: MPL-2.0
//! Brand shortcuts shown on the landing page.

use super::icon_badge;
use iced::Element;

/// Static icon description: accessible label plus embedded image path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayIcon {
    pub label: &'static str,
    pub image_source: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrandIcon {
    Netflix,
    Disney,
    Zwift,
}

impl BrandIcon {
    /// Page order.
    pub const ALL: [BrandIcon; 3] = [BrandIcon::Netflix, BrandIcon::Disney, BrandIcon::Zwift];

    #[must_use]
    pub const fn display_icon(self) -> DisplayIcon {
        match self {
            BrandIcon::Netflix => DisplayIcon {
                label: "Netflix",
                image_source: "icons/netflix.svg",
            },
            BrandIcon::Disney => DisplayIcon {
                label: "Disney",
                image_source: "icons/disney.svg",
            },
            BrandIcon::Zwift => DisplayIcon {
                label: "Zwift",
                image_source: "icons/zwift.svg",
            },
        }
    }

    /// The badge with this brand's image.
    pub fn view<'a, Message: 'a>(self) -> Element<'a, Message> {
        icon_badge::view(icon_badge::image(&self.display_icon()))
    }
}

pub fn netflix<'a, Message: 'a>() -> Element<'a, Message> {
    BrandIcon::Netflix.view()
}

pub fn disney<'a, Message: 'a>() -> Element<'a, Message> {
    BrandIcon::Disney.view()
}

pub fn zwift<'a, Message: 'a>() -> Element<'a, Message> {
    BrandIcon::Zwift.view()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brands_carry_expected_labels_and_sources() {
        let icons: Vec<DisplayIcon> = BrandIcon::ALL.iter().map(|b| b.display_icon()).collect();
        assert_eq!(
            icons,
            vec![
                DisplayIcon {
                    label: "Netflix",
                    image_source: "icons/netflix.svg"
                },
                DisplayIcon {
                    label: "Disney",
                    image_source: "icons/disney.svg"
                },
                DisplayIcon {
                    label: "Zwift",
                    image_source: "icons/zwift.svg"
                },
            ]
        );
    }

    #[test]
    fn every_brand_image_is_embedded() {
        for brand in BrandIcon::ALL {
            let icon = brand.display_icon();
            assert!(
                icon_badge::resolve(icon.image_source).is_some(),
                "{} image missing",
                icon.label
            );
        }
    }

    #[test]
    fn zero_argument_constructors_render() {
        let _: Element<'_, ()> = netflix();
        let _: Element<'_, ()> = disney();
        let _: Element<'_, ()> = zwift();
    }
}
