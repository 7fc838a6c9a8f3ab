//! Tile artwork paths.
//!
//! Every tile has one SVG per theme at
//! `{base}tiles/{light|dark}/{AssetName}.svg`. Honors use their Japanese
//! names (`Ton`, `Nan`, `Shaa`, `Pei`, `Haku`, `Hatsu`, `Chun`); suited tiles
//! use `{Man|Pin|Sou}{digit}`, with `5-Dora` standing in for the red five's
//! digit. That gives 37 names and 74 files.

use std::fmt;

use crate::theme::Theme;
use crate::tile::{Honor, Suit, Tile};

/// Directory under the base prefix that holds the themed subdirectories.
pub const TILES_DIR: &str = "tiles";
/// Extension of every tile asset.
pub const ASSET_EXT: &str = "svg";

/// File stem of a tile's artwork, e.g. `Pin5-Dora` or `Hatsu`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AssetName(Tile);

impl AssetName {
    #[must_use]
    pub const fn tile(self) -> Tile {
        self.0
    }
}

impl fmt::Display for AssetName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Tile::Honor(honor) => f.write_str(match honor {
                Honor::East => "Ton",
                Honor::South => "Nan",
                Honor::West => "Shaa",
                Honor::North => "Pei",
                Honor::White => "Haku",
                Honor::Green => "Hatsu",
                Honor::Red => "Chun",
            }),
            Tile::Suited { suit, rank } => {
                let suit = match suit {
                    Suit::Man => "Man",
                    Suit::Pin => "Pin",
                    Suit::Sou => "Sou",
                };
                if rank.is_red_five() {
                    write!(f, "{suit}5-Dora")
                } else {
                    write!(f, "{suit}{}", rank.digit())
                }
            }
        }
    }
}

#[must_use]
pub const fn asset_name(tile: Tile) -> AssetName {
    AssetName(tile)
}

/// Path of a tile asset relative to the base prefix.
#[must_use]
pub fn asset_relative_path(tile: Tile, theme: Theme) -> String {
    format!(
        "{TILES_DIR}/{}/{}.{ASSET_EXT}",
        theme.as_str(),
        asset_name(tile)
    )
}

/// Deployment prefix that asset paths hang off.
///
/// Always ends in `/`, so `"/app"` and `"/app/"` resolve identically and an
/// empty prefix becomes the site root.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AssetBase(String);

impl AssetBase {
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        let mut prefix = prefix.into();
        if !prefix.ends_with('/') {
            prefix.push('/');
        }
        Self(prefix)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn path(&self, tile: Tile, theme: Theme) -> String {
        format!("{}{}", self.0, asset_relative_path(tile, theme))
    }
}

impl Default for AssetBase {
    fn default() -> Self {
        Self::new("/")
    }
}

impl fmt::Display for AssetBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The light and dark artwork for one tile.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ImagePaths {
    pub light: String,
    pub dark: String,
}

impl ImagePaths {
    #[must_use]
    pub fn for_theme(&self, theme: Theme) -> &str {
        match theme {
            Theme::Light => &self.light,
            Theme::Dark => &self.dark,
        }
    }
}

#[must_use]
pub fn image_paths(tile: Tile, base: &AssetBase) -> ImagePaths {
    ImagePaths {
        light: base.path(tile, Theme::Light),
        dark: base.path(tile, Theme::Dark),
    }
}
