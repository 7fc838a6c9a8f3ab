//! Render configuration from flags and environment.
//!
//! The asset base prefix comes from `--base-url`, then `MJTILE_BASE_URL`,
//! then `/`. The viewport tier comes from `--breakpoint`, or is classified
//! from `--width` with the default thresholds, or falls back to `xs`.

use clap::Args;
use mjtile::{AssetBase, Breakpoint, Breakpoints, RenderContext, Theme};

pub const BASE_URL_ENV: &str = "MJTILE_BASE_URL";

#[derive(Debug, Clone, Default, Args)]
pub struct ViewArgs {
    /// Color theme: light or dark.
    #[arg(long, default_value_t = Theme::Light)]
    pub theme: Theme,

    /// Viewport tier: xs, sm, md, lg or xl.
    #[arg(long, conflicts_with = "width")]
    pub breakpoint: Option<Breakpoint>,

    /// Viewport width in CSS pixels, classified into a tier.
    #[arg(long)]
    pub width: Option<u16>,

    /// Prefix for asset paths (overrides MJTILE_BASE_URL).
    #[arg(long = "base-url")]
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    pub theme: Theme,
    pub breakpoint: Breakpoint,
    pub assets: AssetBase,
}

impl RenderConfig {
    #[must_use]
    pub fn from_args(args: &ViewArgs) -> Self {
        Self::resolve(args, std::env::var(BASE_URL_ENV).ok())
    }

    /// Resolve with an explicit environment value, for callers that already
    /// looked it up.
    #[must_use]
    pub fn resolve(args: &ViewArgs, env_base_url: Option<String>) -> Self {
        let breakpoint = match (args.breakpoint, args.width) {
            (Some(bp), _) => bp,
            (None, Some(width)) => Breakpoints::DEFAULT.classify_width(width),
            (None, None) => Breakpoint::Xs,
        };
        let assets = args
            .base_url
            .clone()
            .or(env_base_url)
            .map(AssetBase::new)
            .unwrap_or_default();

        tracing::debug!(
            message = "config.resolved",
            theme = %args.theme,
            breakpoint = %breakpoint,
            assets = %assets
        );

        Self {
            theme: args.theme,
            breakpoint,
            assets,
        }
    }

    #[must_use]
    pub fn context(&self) -> RenderContext {
        RenderContext::new(self.theme, self.breakpoint).with_assets(self.assets.clone())
    }
}
