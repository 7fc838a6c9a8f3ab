#![forbid(unsafe_code)]

//! Tile codes and display data for mjtile.
//!
//! # Role in mjtile
//! `mjtile-core` owns the vocabulary every other crate speaks: what a tile
//! is, which theme is active, and which artwork and labels a tile maps to.
//! It has no rendering or styling dependencies.
//!
//! # This crate provides
//! - [`Tile`], [`TileCode`] and their parts ([`Suit`], [`Honor`], [`Rank`]).
//! - [`Theme`] for the light/dark signal.
//! - The asset resolver: [`image_paths`], [`asset_name`], [`AssetBase`].
//! - The label resolvers: [`short_label`] and [`overlay_label`].

/// Artwork names and paths.
pub mod asset;
/// Tile-code parse errors.
pub mod error;
/// Short and overlay labels with color categories.
pub mod label;
/// Light/dark theme signal.
pub mod theme;
/// Typed tile codes.
pub mod tile;

pub use asset::{
    ASSET_EXT, AssetBase, AssetName, ImagePaths, TILES_DIR, asset_name, asset_relative_path,
    image_paths,
};
pub use error::TileCodeError;
pub use label::{ColorCategory, Label, overlay_label, short_label};
pub use theme::Theme;
pub use tile::{Honor, Rank, Suit, Tile, TileCode};
