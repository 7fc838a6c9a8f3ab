use clap::{Parser, Subcommand};

use crate::assets::{AssetsArgs, run_assets};
use crate::error::Result;
use crate::gallery::{GalleryArgs, run_gallery};
use crate::labels::{LabelsArgs, run_labels};
use crate::logging::init_tracing;
use crate::render::{PlaceholderArgs, RenderArgs, run_placeholder, run_render};

#[derive(Debug, Parser)]
#[command(
    name = "mjtile",
    about = "Render mahjong tiles to HTML and generate their artwork",
    version
)]
pub struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the HTML for one tile.
    Render(RenderArgs),

    /// Print the HTML for an empty tile slot.
    Placeholder(PlaceholderArgs),

    /// Print the resolved labels and artwork paths for a tile as JSON.
    Labels(LabelsArgs),

    /// Write the themed SVG artwork set.
    Assets(AssetsArgs),

    /// Write an HTML page showing every tile.
    Gallery(GalleryArgs),
}

pub fn run_from_env() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    run(cli)
}

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Render(args) => run_render(args),
        Commands::Placeholder(args) => run_placeholder(args),
        Commands::Labels(args) => run_labels(args),
        Commands::Assets(args) => run_assets(args),
        Commands::Gallery(args) => run_gallery(args),
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use tempfile::tempdir;

    use crate::assets::AssetsArgs;
    use crate::config::ViewArgs;
    use crate::error::CliError;
    use crate::render::RenderArgs;

    use super::{Cli, Commands, run};

    #[test]
    fn render_command_dispatches_tile_code_error() {
        let result = run(Cli {
            verbose: false,
            command: Commands::Render(RenderArgs {
                code: "1x".to_string(),
                compact: false,
                view: ViewArgs::default(),
            }),
        });
        match result.expect_err("unknown suit should fail") {
            CliError::TileCode(err) => {
                assert!(err.to_string().starts_with("unknown suit marker: 'x'"));
            }
            other => panic!("expected TileCode, got {other}"),
        }
    }

    #[test]
    fn assets_command_writes_full_set() {
        let temp = tempdir().expect("tempdir");
        run(Cli {
            verbose: false,
            command: Commands::Assets(AssetsArgs {
                out_dir: temp.path().to_path_buf(),
                dry_run: false,
            }),
        })
        .expect("assets");
        for theme in ["light", "dark"] {
            let count = std::fs::read_dir(temp.path().join("tiles").join(theme))
                .expect("theme dir")
                .count();
            assert_eq!(count, 37, "{theme}");
        }
    }

    #[test]
    fn parses_view_flags() {
        let cli = Cli::try_parse_from([
            "mjtile", "render", "0p", "--compact", "--theme", "dark", "--width", "800", "-v",
        ])
        .expect("parse");
        assert!(cli.verbose);
        match cli.command {
            Commands::Render(args) => {
                assert_eq!(args.code, "0p");
                assert!(args.compact);
                assert_eq!(args.view.theme, mjtile::Theme::Dark);
                assert_eq!(args.view.width, Some(800));
            }
            other => panic!("expected render, got {other:?}"),
        }
    }

    #[test]
    fn breakpoint_and_width_conflict() {
        let err = Cli::try_parse_from([
            "mjtile", "render", "1m", "--breakpoint", "lg", "--width", "1200",
        ])
        .expect_err("conflicting flags");
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }
}
