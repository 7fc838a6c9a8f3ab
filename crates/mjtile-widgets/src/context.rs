//! Per-render inputs.

use mjtile_core::{AssetBase, Theme};
use mjtile_style::Breakpoint;

/// Signals a widget reads while rendering.
///
/// The host detects theme and viewport however it likes and passes the
/// result in; widgets never look them up on their own.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RenderContext {
    pub theme: Theme,
    pub breakpoint: Breakpoint,
    pub assets: AssetBase,
}

impl RenderContext {
    #[must_use]
    pub fn new(theme: Theme, breakpoint: Breakpoint) -> Self {
        Self {
            theme,
            breakpoint,
            assets: AssetBase::default(),
        }
    }

    #[must_use]
    pub fn with_assets(mut self, assets: AssetBase) -> Self {
        self.assets = assets;
        self
    }

    /// Whether the viewport is at least the large tier.
    #[must_use]
    pub fn is_large(&self) -> bool {
        self.breakpoint.is_at_least(Breakpoint::Lg)
    }
}
