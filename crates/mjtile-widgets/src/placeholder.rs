//! Empty tile slot.

use mjtile_style::{BoxSize, Breakpoint, ClassList, Responsive, SLOT_BORDER};

use crate::Widget;
use crate::context::RenderContext;
use crate::node::{Element, Node};

/// Dashed outline the size of a full tile image, marking an empty slot.
///
/// Output is the same for every context.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Placeholder;

pub(crate) fn slot_size() -> Responsive<BoxSize> {
    Responsive::new(BoxSize::new("16", "12", "[3rem]"))
        .at(Breakpoint::Lg, BoxSize::new("20", "[3.75rem]", "[3.75rem]"))
}

impl Placeholder {
    #[must_use]
    pub fn node() -> Node {
        let classes = slot_size()
            .classes()
            .with_list(ClassList::parse("p-2 rounded-xl border-2"))
            .with_list(SLOT_BORDER.classes())
            .with("border-dashed");
        Element::new("div").classes(classes).into()
    }
}

impl Widget for Placeholder {
    fn render(&self, _ctx: &RenderContext) -> Node {
        Self::node()
    }
}
