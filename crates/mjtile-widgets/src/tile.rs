#![forbid(unsafe_code)]

//! Single-tile widget.
//!
//! [`TileView`] draws one tile in one of two modes:
//!
//! - **Compact**: a small text cell holding only the tile's short label.
//!   Used when the caller prefers compact output and the viewport is below
//!   the large tier.
//! - **Image**: the tile artwork for the active theme with a small overlay
//!   label in the top-right corner. Used in every other case.
//!
//! The hidden sentinel (`00`) renders as a blank label in both modes; in
//! image mode it borrows the White dragon artwork but not its `Wh` overlay.

use mjtile_core::{
    AssetBase, Honor, ImagePaths, Label, Tile, TileCode, image_paths, overlay_label, short_label,
};
use mjtile_style::{BoxSize, Breakpoint, ClassList, Palette, Responsive, TEXT_STROKE};

use crate::Widget;
use crate::context::RenderContext;
use crate::node::{Element, Node};
use crate::placeholder::slot_size;

/// Artwork shown for a hidden tile.
const HIDDEN_ARTWORK: Tile = Tile::Honor(Honor::White);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderMode {
    Compact,
    Image,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileView {
    code: TileCode,
    compact: bool,
}

impl TileView {
    #[must_use]
    pub fn new(code: impl Into<TileCode>) -> Self {
        Self {
            code: code.into(),
            compact: false,
        }
    }

    #[must_use]
    pub fn hidden() -> Self {
        Self::new(TileCode::Hidden)
    }

    /// Prefer the compact text cell on small viewports. Also shrinks the
    /// image when the viewport is large.
    #[must_use]
    pub fn compact(mut self, compact: bool) -> Self {
        self.compact = compact;
        self
    }

    #[must_use]
    pub fn code(&self) -> TileCode {
        self.code
    }

    #[must_use]
    pub fn mode(&self, ctx: &RenderContext) -> RenderMode {
        if self.compact && !ctx.is_large() {
            RenderMode::Compact
        } else {
            RenderMode::Image
        }
    }

    /// Label used in compact mode.
    #[must_use]
    pub fn short_label(&self) -> Label {
        self.code.tile().map_or(Label::BLANK, short_label)
    }

    /// Label drawn over the artwork in image mode.
    #[must_use]
    pub fn overlay_label(&self) -> Label {
        self.code.tile().map_or(Label::BLANK, overlay_label)
    }

    /// Light and dark artwork. A hidden tile borrows the White dragon's.
    #[must_use]
    pub fn artwork(&self, assets: &AssetBase) -> ImagePaths {
        image_paths(self.code.tile().unwrap_or(HIDDEN_ARTWORK), assets)
    }

    /// Artwork path for the active theme.
    #[must_use]
    pub fn image_src(&self, ctx: &RenderContext) -> String {
        self.artwork(&ctx.assets).for_theme(ctx.theme).to_string()
    }

    fn render_compact(&self) -> Node {
        let label = self.short_label();
        let size = Responsive::new(BoxSize::new("8", "6", "[1.5rem]"))
            .at(Breakpoint::Lg, BoxSize::new("16", "12", "[3rem]"));
        let font = Responsive::new("text-lg").at(Breakpoint::Lg, "text-3xl");

        let classes = size
            .classes()
            .with_list(ClassList::parse("flex flex-col justify-center items-center"))
            .with_list(font.classes())
            .with_list(ClassList::parse("font-bold select-none"))
            .with_list(Palette::COMPACT.classes(label.color));

        Element::new("div")
            .classes(classes)
            .child(Node::text(label.text))
            .into()
    }

    fn render_image(&self, ctx: &RenderContext) -> Node {
        let label = self.overlay_label();
        let size = if self.compact {
            Responsive::new(BoxSize::new("16", "12", "[3rem]"))
        } else {
            slot_size().at(Breakpoint::Xs, BoxSize::new("16", "12", "[3.75rem]"))
        };

        let img = Element::new("img")
            .attr("src", self.image_src(ctx))
            .classes(size.classes().with("p-2").with("rounded-xl"));

        let overlay_classes =
            ClassList::parse("absolute top-1 right-1 text-sm font-bold text-right")
                .with_list(ClassList::parse("px-1 rounded"))
                .with_list(TEXT_STROKE.classes())
                .with_list(Palette::OVERLAY.classes(label.color));
        let overlay = Element::new("span")
            .classes(overlay_classes)
            .child(Node::text(label.text));

        Element::new("div")
            .classes("relative inline-block")
            .child(img)
            .child(overlay)
            .into()
    }
}

impl Widget for TileView {
    fn render(&self, ctx: &RenderContext) -> Node {
        let mode = self.mode(ctx);
        tracing::debug!(
            message = "tile.render",
            code = %self.code,
            compact = self.compact,
            mode = ?mode,
            theme = %ctx.theme,
            breakpoint = %ctx.breakpoint
        );
        match mode {
            RenderMode::Compact => self.render_compact(),
            RenderMode::Image => self.render_image(ctx),
        }
    }
}
