//! Text labels for tiles.
//!
//! Two label sets exist. The *short* label fills the whole compact cell and
//! colors numerals by suit. The *overlay* label is the small corner glyph
//! drawn over tile artwork and uses its own color rules:
//!
//! | tile          | short        | overlay      |
//! |---------------|--------------|--------------|
//! | winds         | 東南西北 blue | E S W N blue |
//! | White dragon  | " " base     | Wh red       |
//! | Green dragon  | 發 green      | G red        |
//! | Red dragon    | 中 red        | R green      |
//! | Man numerals  | red          | red          |
//! | Pin numerals  | blue         | red          |
//! | Sou numerals  | green        | red          |
//! | red fives     | by suit      | green        |
//!
//! The dragon and red-five colors differ between the two sets. Both are kept
//! as they are shipped today.

use crate::tile::{Honor, Rank, Suit, Tile};

/// Color slot of a label. Mapped to concrete classes by a palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ColorCategory {
    #[default]
    Base,
    Blue,
    Green,
    Red,
}

impl ColorCategory {
    pub const ALL: [ColorCategory; 4] = [
        ColorCategory::Base,
        ColorCategory::Blue,
        ColorCategory::Green,
        ColorCategory::Red,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Base => "base",
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Red => "red",
        }
    }
}

/// Display text plus its color slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Label {
    pub text: &'static str,
    pub color: ColorCategory,
}

impl Label {
    /// Label for an empty or face-down slot.
    pub const BLANK: Label = Label::new(" ", ColorCategory::Base);

    #[must_use]
    pub const fn new(text: &'static str, color: ColorCategory) -> Self {
        Self { text, color }
    }
}

const FACE_VALUES: [&str; 10] = ["5", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

fn numeral(rank: Rank) -> &'static str {
    FACE_VALUES[usize::from(rank.digit())]
}

/// Label for the compact, text-only rendering.
#[must_use]
pub fn short_label(tile: Tile) -> Label {
    use ColorCategory::*;

    match tile {
        Tile::Honor(honor) => match honor {
            Honor::East => Label::new("東", Blue),
            Honor::South => Label::new("南", Blue),
            Honor::West => Label::new("西", Blue),
            Honor::North => Label::new("北", Blue),
            Honor::White => Label::BLANK,
            Honor::Green => Label::new("發", Green),
            Honor::Red => Label::new("中", Red),
        },
        Tile::Suited { suit, rank } => {
            let color = match suit {
                Suit::Man => Red,
                Suit::Pin => Blue,
                Suit::Sou => Green,
            };
            Label::new(numeral(rank), color)
        }
    }
}

/// Corner label drawn over the tile image.
#[must_use]
pub fn overlay_label(tile: Tile) -> Label {
    use ColorCategory::*;

    match tile {
        Tile::Honor(honor) => match honor {
            Honor::East => Label::new("E", Blue),
            Honor::South => Label::new("S", Blue),
            Honor::West => Label::new("W", Blue),
            Honor::North => Label::new("N", Blue),
            Honor::White => Label::new("Wh", Red),
            Honor::Green => Label::new("G", Red),
            Honor::Red => Label::new("R", Green),
        },
        Tile::Suited { rank, .. } => {
            let color = if rank.is_red_five() { Green } else { Red };
            Label::new(numeral(rank), color)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ColorCategory::*;

    fn tile(s: &str) -> Tile {
        s.parse().expect("valid tile")
    }

    #[test]
    fn short_label_colors_red_five_by_suit() {
        assert_eq!(short_label(tile("0m")), Label::new("5", Red));
        assert_eq!(short_label(tile("0p")), Label::new("5", Blue));
        assert_eq!(short_label(tile("0s")), Label::new("5", Green));
    }

    #[test]
    fn overlay_label_colors_by_red_five_flag() {
        assert_eq!(overlay_label(tile("0m")), Label::new("5", Green));
        assert_eq!(overlay_label(tile("5m")), Label::new("5", Red));
        assert_eq!(overlay_label(tile("5p")), Label::new("5", Red));
        assert_eq!(overlay_label(tile("0s")), Label::new("5", Green));
    }

    #[test]
    fn white_dragon_labels_differ() {
        assert_eq!(short_label(tile("5z")), Label::new(" ", Base));
        assert_eq!(overlay_label(tile("5z")), Label::new("Wh", Red));
    }

    #[test]
    fn dragon_overlay_colors_are_swapped() {
        assert_eq!(short_label(tile("6z")), Label::new("發", Green));
        assert_eq!(short_label(tile("7z")), Label::new("中", Red));
        assert_eq!(overlay_label(tile("6z")), Label::new("G", Red));
        assert_eq!(overlay_label(tile("7z")), Label::new("R", Green));
    }

    #[test]
    fn winds_are_blue_in_both_sets() {
        let short: Vec<_> = ["1z", "2z", "3z", "4z"]
            .iter()
            .map(|s| short_label(tile(s)))
            .collect();
        let overlay: Vec<_> = ["1z", "2z", "3z", "4z"]
            .iter()
            .map(|s| overlay_label(tile(s)))
            .collect();
        assert_eq!(
            short.iter().map(|l| l.text).collect::<Vec<_>>(),
            ["東", "南", "西", "北"]
        );
        assert_eq!(
            overlay.iter().map(|l| l.text).collect::<Vec<_>>(),
            ["E", "S", "W", "N"]
        );
        assert!(short.iter().chain(&overlay).all(|l| l.color == Blue));
    }

    #[test]
    fn numerals_show_face_value() {
        for d in 1..=9u8 {
            let t = tile(&format!("{d}s"));
            assert_eq!(short_label(t).text, d.to_string());
            assert_eq!(overlay_label(t).text, d.to_string());
        }
    }
}
