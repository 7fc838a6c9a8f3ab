use clap::Args;
use serde::Serialize;

use mjtile::{AssetBase, Label, TileCode, TileView, asset_name};

use crate::config::{BASE_URL_ENV, RenderConfig, ViewArgs};
use crate::error::Result;

#[derive(Debug, Clone, Args)]
pub struct LabelsArgs {
    /// Two-character tile code.
    pub code: String,

    /// Prefix for asset paths (overrides MJTILE_BASE_URL).
    #[arg(long = "base-url")]
    pub base_url: Option<String>,
}

/// Everything the resolvers know about one code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelReport {
    pub code: TileCode,
    /// `None` for the hidden sentinel, which has no artwork of its own.
    pub asset_name: Option<String>,
    /// Artwork paths as rendered; the sentinel shows the White dragon's.
    pub light: String,
    pub dark: String,
    pub short: Label,
    pub overlay: Label,
    pub unicode: Option<char>,
}

impl LabelReport {
    #[must_use]
    pub fn new(code: TileCode, assets: &AssetBase) -> Self {
        let view = TileView::new(code);
        let tile = code.tile();
        let artwork = view.artwork(assets);
        Self {
            code,
            asset_name: tile.map(|t| asset_name(t).to_string()),
            light: artwork.light,
            dark: artwork.dark,
            short: view.short_label(),
            overlay: view.overlay_label(),
            unicode: tile.map(|t| t.unicode()),
        }
    }
}

pub fn label_report(args: &LabelsArgs, env_base_url: Option<String>) -> Result<LabelReport> {
    let code: TileCode = args.code.parse()?;
    let view = ViewArgs {
        base_url: args.base_url.clone(),
        ..ViewArgs::default()
    };
    let config = RenderConfig::resolve(&view, env_base_url);
    Ok(LabelReport::new(code, &config.assets))
}

pub fn run_labels(args: LabelsArgs) -> Result<()> {
    let report = label_report(&args, std::env::var(BASE_URL_ENV).ok())?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
