//! Label color palettes.
//!
//! A [`Palette`] turns a [`ColorCategory`] into text classes. `Base` never
//! gets a class; it inherits the surrounding text color.

use mjtile_core::ColorCategory;

use crate::adaptive::AdaptiveClass;
use crate::class::ClassList;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub red: AdaptiveClass,
    pub green: AdaptiveClass,
    pub blue: AdaptiveClass,
}

impl Palette {
    /// Text-only cells.
    pub const COMPACT: Palette = Palette {
        red: AdaptiveClass::new("text-red-600", "text-red-700"),
        green: AdaptiveClass::new("text-green-700", "text-green-800"),
        blue: AdaptiveClass::new("text-blue-800", "text-blue-900"),
    };

    /// Corner labels over artwork. Green is drawn in neutral black/gray.
    pub const OVERLAY: Palette = Palette {
        red: AdaptiveClass::new("text-red-600", "text-red-700"),
        green: AdaptiveClass::new("text-black", "text-gray-100"),
        blue: AdaptiveClass::new("text-blue-800", "text-blue-900"),
    };

    #[must_use]
    pub const fn get(&self, color: ColorCategory) -> Option<AdaptiveClass> {
        match color {
            ColorCategory::Base => None,
            ColorCategory::Red => Some(self.red),
            ColorCategory::Green => Some(self.green),
            ColorCategory::Blue => Some(self.blue),
        }
    }

    #[must_use]
    pub fn classes(&self, color: ColorCategory) -> ClassList {
        self.get(color)
            .map(|class| class.classes())
            .unwrap_or_default()
    }
}

/// Thin outline that keeps overlay text legible on any artwork.
pub const TEXT_STROKE: AdaptiveClass = AdaptiveClass::new(
    "[-webkit-text-stroke:0.25px_white]",
    "[-webkit-text-stroke:0.25px_black]",
);

/// Border color of empty slots.
pub const SLOT_BORDER: AdaptiveClass = AdaptiveClass::new("border-black", "border-white");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_has_no_class() {
        assert!(Palette::COMPACT.classes(ColorCategory::Base).is_empty());
        assert!(Palette::OVERLAY.classes(ColorCategory::Base).is_empty());
    }

    #[test]
    fn overlay_green_is_neutral() {
        assert_eq!(
            Palette::OVERLAY.classes(ColorCategory::Green).to_string(),
            "text-black dark:text-gray-100"
        );
        assert_eq!(
            Palette::COMPACT.classes(ColorCategory::Green).to_string(),
            "text-green-700 dark:text-green-800"
        );
    }

    #[test]
    fn red_and_blue_match_across_palettes() {
        for color in [ColorCategory::Red, ColorCategory::Blue] {
            assert_eq!(Palette::COMPACT.get(color), Palette::OVERLAY.get(color));
        }
    }
}
