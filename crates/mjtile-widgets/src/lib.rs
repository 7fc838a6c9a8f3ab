#![forbid(unsafe_code)]

//! Widgets that render mahjong tiles to a visual tree.
//!
//! Every widget implements [`Widget`]: given a [`RenderContext`] (theme,
//! viewport tier, asset base) it returns a [`Node`] tree that can be
//! inspected directly or serialized with [`Node::to_html`].

pub mod context;
pub mod node;
pub mod placeholder;
pub mod tile;

pub use context::RenderContext;
pub use node::{Element, Node};
pub use placeholder::Placeholder;
pub use tile::{RenderMode, TileView};

/// A value that renders to a visual tree.
pub trait Widget {
    fn render(&self, ctx: &RenderContext) -> Node;
}

impl<W: Widget + ?Sized> Widget for &W {
    fn render(&self, ctx: &RenderContext) -> Node {
        (**self).render(ctx)
    }
}
