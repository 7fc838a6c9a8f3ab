#![forbid(unsafe_code)]

//! mjtile public facade crate.
//!
//! Re-exports the tile model, style vocabulary and widgets, and offers a
//! prelude for rendering tiles in a couple of lines:
//!
//! ```
//! use mjtile::prelude::*;
//!
//! let ctx = RenderContext::new(Theme::Dark, Breakpoint::Lg);
//! let tile: TileCode = "0p".parse().unwrap();
//! let html = TileView::new(tile).render(&ctx).to_html();
//! assert!(html.contains("Pin5-Dora.svg"));
//! ```

// --- Core re-exports -------------------------------------------------------

pub use mjtile_core::{
    AssetBase, AssetName, ColorCategory, Honor, ImagePaths, Label, Rank, Suit, Theme, Tile,
    TileCode, TileCodeError, asset_name, asset_relative_path, image_paths, overlay_label,
    short_label,
};

// --- Style re-exports ------------------------------------------------------

pub use mjtile_style::{
    AdaptiveClass, BoxSize, Breakpoint, Breakpoints, ClassList, Palette, Responsive,
};

// --- Widget re-exports -----------------------------------------------------

pub use mjtile_widgets::{
    Element, Node, Placeholder, RenderContext, RenderMode, TileView, Widget,
};

pub mod prelude {
    pub use crate::{
        AssetBase, Breakpoint, Node, Placeholder, RenderContext, Theme, Tile, TileCode, TileView,
        Widget,
    };
}
