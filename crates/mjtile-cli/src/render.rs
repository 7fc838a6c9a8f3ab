use clap::Args;
use mjtile::{Placeholder, TileCode, TileView, Widget};

use crate::config::{RenderConfig, ViewArgs};
use crate::error::Result;

#[derive(Debug, Clone, Args)]
pub struct RenderArgs {
    /// Two-character tile code, e.g. `5m`, `0p`, `7z`, or `00` for a hidden tile.
    pub code: String,

    /// Prefer the compact text cell below the large tier.
    #[arg(long)]
    pub compact: bool,

    #[command(flatten)]
    pub view: ViewArgs,
}

#[derive(Debug, Clone, Default, Args)]
pub struct PlaceholderArgs {
    #[command(flatten)]
    pub view: ViewArgs,
}

pub fn render_html(args: &RenderArgs, config: &RenderConfig) -> Result<String> {
    let code: TileCode = args.code.parse()?;
    let view = TileView::new(code).compact(args.compact);
    Ok(view.render(&config.context()).to_html())
}

pub fn run_render(args: RenderArgs) -> Result<()> {
    let config = RenderConfig::from_args(&args.view);
    let html = render_html(&args, &config)?;
    println!("{html}");
    Ok(())
}

pub fn run_placeholder(args: PlaceholderArgs) -> Result<()> {
    let config = RenderConfig::from_args(&args.view);
    println!("{}", Placeholder.render(&config.context()).to_html());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use mjtile::Breakpoint;

    fn args(code: &str, compact: bool) -> RenderArgs {
        RenderArgs {
            code: code.to_string(),
            compact,
            view: ViewArgs::default(),
        }
    }

    #[test]
    fn renders_image_with_default_config() {
        let a = args("1z", false);
        let config = RenderConfig::resolve(&a.view, None);
        let html = render_html(&a, &config).expect("render");
        assert!(html.contains("Ton.svg"), "{html}");
        assert!(html.contains(">E</span>"), "{html}");
    }

    #[test]
    fn compact_on_large_viewport_keeps_artwork() {
        let mut a = args("6z", true);
        a.view.breakpoint = Some(Breakpoint::Xl);
        let config = RenderConfig::resolve(&a.view, None);
        let html = render_html(&a, &config).expect("render");
        assert!(html.contains("<img"), "{html}");
    }

    #[test]
    fn bad_code_is_rejected() {
        let a = args("8z", false);
        let config = RenderConfig::resolve(&a.view, None);
        let err = render_html(&a, &config).expect_err("8z is out of range");
        assert!(matches!(err, CliError::TileCode(_)));
        assert_eq!(err.exit_code(), 2);
    }
}
