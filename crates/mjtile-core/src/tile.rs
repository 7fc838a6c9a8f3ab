#![forbid(unsafe_code)]

//! Typed tile codes.
//!
//! A tile is written as two characters: a digit followed by a suit marker.
//! Suited tiles use `m`/`p`/`s` (Man, Pin, Sou) with digits `1`..`9`, and
//! `0` for the red five. Honors use `z` with digits `1`..`7` (the four winds,
//! then the White, Green and Red dragons). The code `00` stands for a tile
//! that is absent or face-down.
//!
//! # Invariants
//!
//! 1. Every [`Tile`] value corresponds to exactly one two-character symbol,
//!    and [`fmt::Display`] writes that symbol back.
//! 2. [`Tile::all`] yields the 37 distinct tiles in a stable order.
//! 3. Out-of-range digits and unknown suit markers are rejected at parse
//!    time; nothing downstream has to validate.

use std::fmt;
use std::str::FromStr;

use crate::error::TileCodeError;

/// Number suit of a suited tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    /// Characters (`m`).
    Man,
    /// Circles (`p`).
    Pin,
    /// Bamboo (`s`).
    Sou,
}

impl Suit {
    pub const ALL: [Suit; 3] = [Suit::Man, Suit::Pin, Suit::Sou];

    /// The suit marker character used in tile codes.
    #[must_use]
    pub const fn marker(self) -> char {
        match self {
            Self::Man => 'm',
            Self::Pin => 'p',
            Self::Sou => 's',
        }
    }

    #[must_use]
    pub const fn from_marker(c: char) -> Option<Self> {
        match c {
            'm' => Some(Self::Man),
            'p' => Some(Self::Pin),
            's' => Some(Self::Sou),
            _ => None,
        }
    }
}

/// Wind and dragon tiles, in code order (`1z`..`7z`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Honor {
    East,
    South,
    West,
    North,
    White,
    Green,
    Red,
}

impl Honor {
    pub const ALL: [Honor; 7] = [
        Honor::East,
        Honor::South,
        Honor::West,
        Honor::North,
        Honor::White,
        Honor::Green,
        Honor::Red,
    ];

    /// Digit used for this honor in tile codes (1..=7).
    #[must_use]
    pub const fn digit(self) -> u8 {
        self as u8 + 1
    }

    #[must_use]
    pub const fn from_digit(d: u8) -> Option<Self> {
        match d {
            1 => Some(Self::East),
            2 => Some(Self::South),
            3 => Some(Self::West),
            4 => Some(Self::North),
            5 => Some(Self::White),
            6 => Some(Self::Green),
            7 => Some(Self::Red),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_wind(self) -> bool {
        matches!(self, Self::East | Self::South | Self::West | Self::North)
    }

    #[must_use]
    pub const fn is_dragon(self) -> bool {
        !self.is_wind()
    }
}

/// Numeric part of a suited tile: 1..=9, or 0 for the red five.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rank(u8);

impl Rank {
    /// The red five, written as digit `0`.
    pub const RED_FIVE: Rank = Rank(0);

    /// Ranks in code order: 1..=9 followed by the red five.
    pub const ALL: [Rank; 10] = [
        Rank(1),
        Rank(2),
        Rank(3),
        Rank(4),
        Rank(5),
        Rank(6),
        Rank(7),
        Rank(8),
        Rank(9),
        Rank::RED_FIVE,
    ];

    #[must_use]
    pub const fn new(digit: u8) -> Option<Self> {
        if digit <= 9 { Some(Self(digit)) } else { None }
    }

    /// The digit as written in the tile code (0 for the red five).
    #[must_use]
    pub const fn digit(self) -> u8 {
        self.0
    }

    /// The face value shown to players (the red five shows as 5).
    #[must_use]
    pub const fn face_value(self) -> u8 {
        if self.0 == 0 { 5 } else { self.0 }
    }

    #[must_use]
    pub const fn is_red_five(self) -> bool {
        self.0 == 0
    }
}

/// A single mahjong tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tile {
    Suited { suit: Suit, rank: Rank },
    Honor(Honor),
}

impl Tile {
    /// Number of distinct tiles: 3 suits x 10 ranks + 7 honors.
    pub const COUNT: usize = 37;

    #[must_use]
    pub const fn suited(suit: Suit, rank: Rank) -> Self {
        Self::Suited { suit, rank }
    }

    /// Every tile once: Man, Pin, Sou (1..=9 then red five), then honors.
    pub fn all() -> impl Iterator<Item = Tile> {
        Suit::ALL
            .into_iter()
            .flat_map(|suit| Rank::ALL.into_iter().map(move |rank| Tile::suited(suit, rank)))
            .chain(Honor::ALL.into_iter().map(Tile::Honor))
    }

    #[must_use]
    pub const fn is_honor(&self) -> bool {
        matches!(self, Self::Honor(_))
    }

    #[must_use]
    pub const fn is_red_five(&self) -> bool {
        match self {
            Self::Suited { rank, .. } => rank.is_red_five(),
            Self::Honor(_) => false,
        }
    }

    /// Unicode glyph from the Mahjong Tiles block.
    ///
    /// The red five has no glyph of its own and shares the plain five.
    #[must_use]
    pub fn unicode(&self) -> char {
        let code = match *self {
            Self::Honor(honor) => match honor {
                Honor::East => 0x1F000,
                Honor::South => 0x1F001,
                Honor::West => 0x1F002,
                Honor::North => 0x1F003,
                Honor::Red => 0x1F004,
                Honor::Green => 0x1F005,
                Honor::White => 0x1F006,
            },
            Self::Suited { suit, rank } => {
                let one = match suit {
                    Suit::Man => 0x1F007,
                    Suit::Sou => 0x1F010,
                    Suit::Pin => 0x1F019,
                };
                one + u32::from(rank.face_value()) - 1
            }
        };
        char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER)
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Suited { suit, rank } => write!(f, "{}{}", rank.digit(), suit.marker()),
            Self::Honor(honor) => write!(f, "{}z", honor.digit()),
        }
    }
}

impl FromStr for Tile {
    type Err = TileCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.parse::<TileCode>()? {
            TileCode::Face(tile) => Ok(tile),
            TileCode::Hidden => Err(TileCodeError::Hidden),
        }
    }
}

/// A tile slot as the renderer sees it: a face-up tile or the `00` sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileCode {
    Face(Tile),
    /// Absent or face-down tile (`00`).
    Hidden,
}

impl TileCode {
    pub const HIDDEN_SYMBOL: &'static str = "00";

    #[must_use]
    pub const fn tile(&self) -> Option<Tile> {
        match self {
            Self::Face(tile) => Some(*tile),
            Self::Hidden => None,
        }
    }

    #[must_use]
    pub const fn is_hidden(&self) -> bool {
        matches!(self, Self::Hidden)
    }
}

impl From<Tile> for TileCode {
    fn from(tile: Tile) -> Self {
        Self::Face(tile)
    }
}

impl fmt::Display for TileCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Face(tile) => tile.fmt(f),
            Self::Hidden => f.write_str(Self::HIDDEN_SYMBOL),
        }
    }
}

impl FromStr for TileCode {
    type Err = TileCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(d), Some(marker), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(TileCodeError::Length {
                code: s.to_string(),
            });
        };

        let digit = d
            .to_digit(10)
            .and_then(|n| u8::try_from(n).ok())
            .ok_or(TileCodeError::Digit { digit: d })?;

        if digit == 0 && marker == '0' {
            return Ok(Self::Hidden);
        }

        if marker == 'z' {
            return Honor::from_digit(digit)
                .map(|honor| Self::Face(Tile::Honor(honor)))
                .ok_or(TileCodeError::HonorRange { digit });
        }

        let suit = Suit::from_marker(marker).ok_or(TileCodeError::Suit { marker })?;
        let rank = Rank::new(digit).ok_or(TileCodeError::Digit { digit: d })?;
        Ok(Self::Face(Tile::suited(suit, rank)))
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use serde::de::{self, Visitor};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::fmt;
    use std::marker::PhantomData;
    use std::str::FromStr;

    use super::{Tile, TileCode};

    struct SymbolVisitor<T>(PhantomData<T>);

    impl<T> Visitor<'_> for SymbolVisitor<T>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        type Value = T;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            formatter.write_str("a two-character tile symbol such as \"5m\" or \"7z\"")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<T, E> {
            v.parse().map_err(E::custom)
        }
    }

    macro_rules! symbol_serde {
        ($ty:ty) => {
            impl Serialize for $ty {
                fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                    serializer.collect_str(self)
                }
            }

            impl<'de> Deserialize<'de> for $ty {
                fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                    deserializer.deserialize_str(SymbolVisitor::<$ty>(PhantomData))
                }
            }
        };
    }

    symbol_serde!(Tile);
    symbol_serde!(TileCode);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> TileCode {
        s.parse().expect("valid tile code")
    }

    #[test]
    fn parses_suited_tiles() {
        assert_eq!(
            code("3p"),
            TileCode::Face(Tile::suited(Suit::Pin, Rank::new(3).unwrap()))
        );
        assert_eq!(
            code("0s"),
            TileCode::Face(Tile::suited(Suit::Sou, Rank::RED_FIVE))
        );
    }

    #[test]
    fn parses_honors_in_code_order() {
        for (i, honor) in Honor::ALL.into_iter().enumerate() {
            let symbol = format!("{}z", i + 1);
            assert_eq!(code(&symbol), TileCode::Face(Tile::Honor(honor)));
        }
    }

    #[test]
    fn parses_sentinel() {
        assert_eq!(code("00"), TileCode::Hidden);
        assert_eq!(TileCode::Hidden.to_string(), "00");
        assert_eq!("00".parse::<Tile>(), Err(TileCodeError::Hidden));
    }

    #[test]
    fn rejects_malformed_codes() {
        assert!(matches!(
            "".parse::<TileCode>(),
            Err(TileCodeError::Length { .. })
        ));
        assert!(matches!(
            "12m".parse::<TileCode>(),
            Err(TileCodeError::Length { .. })
        ));
        assert_eq!(
            "5x".parse::<TileCode>(),
            Err(TileCodeError::Suit { marker: 'x' })
        );
        assert_eq!(
            "am".parse::<TileCode>(),
            Err(TileCodeError::Digit { digit: 'a' })
        );
        assert_eq!(
            "8z".parse::<TileCode>(),
            Err(TileCodeError::HonorRange { digit: 8 })
        );
        assert_eq!(
            "0z".parse::<TileCode>(),
            Err(TileCodeError::HonorRange { digit: 0 })
        );
        assert_eq!(
            "10".parse::<TileCode>(),
            Err(TileCodeError::Suit { marker: '0' })
        );
    }

    #[test]
    fn all_yields_each_tile_once() {
        let tiles: Vec<Tile> = Tile::all().collect();
        assert_eq!(tiles.len(), Tile::COUNT);
        let mut symbols: Vec<String> = tiles.iter().map(ToString::to_string).collect();
        symbols.sort();
        symbols.dedup();
        assert_eq!(symbols.len(), Tile::COUNT);
        assert_eq!(tiles[0].to_string(), "1m");
        assert_eq!(tiles[9].to_string(), "0m");
        assert_eq!(tiles[36].to_string(), "7z");
    }

    #[test]
    fn red_five_shares_face_value() {
        assert_eq!(Rank::RED_FIVE.face_value(), 5);
        assert!(Tile::suited(Suit::Man, Rank::RED_FIVE).is_red_five());
        assert!(!Tile::suited(Suit::Man, Rank::new(5).unwrap()).is_red_five());
        assert!(!Tile::Honor(Honor::White).is_red_five());
    }

    #[test]
    fn unicode_glyphs() {
        assert_eq!(Tile::Honor(Honor::East).unicode(), '\u{1F000}');
        assert_eq!(Tile::Honor(Honor::White).unicode(), '\u{1F006}');
        assert_eq!(
            Tile::suited(Suit::Man, Rank::new(1).unwrap()).unicode(),
            '\u{1F007}'
        );
        assert_eq!(
            Tile::suited(Suit::Pin, Rank::RED_FIVE).unicode(),
            Tile::suited(Suit::Pin, Rank::new(5).unwrap()).unicode()
        );
        assert_eq!(
            Tile::suited(Suit::Sou, Rank::new(9).unwrap()).unicode(),
            '\u{1F018}'
        );
    }

    #[test]
    fn honor_kinds() {
        assert!(Honor::North.is_wind());
        assert!(Honor::White.is_dragon());
        assert_eq!(Honor::Red.digit(), 7);
    }
}
