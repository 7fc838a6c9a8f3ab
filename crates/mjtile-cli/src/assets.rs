//! Generate the themed SVG artwork set.
//!
//! Each tile gets one file per theme under `tiles/{theme}/{Name}.svg`. The
//! artwork is a rounded face with the tile's Unicode glyph; red fives carry
//! an extra corner dot.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use clap::Args;

use mjtile::{Theme, Tile, asset_name, asset_relative_path};

use crate::error::{CliError, Result};
use crate::util::{html_escape, write_string};

#[derive(Debug, Clone, Args)]
pub struct AssetsArgs {
    /// Directory that receives the `tiles/` tree.
    #[arg(long = "out-dir")]
    pub out_dir: PathBuf,

    /// List target paths without writing anything.
    #[arg(long)]
    pub dry_run: bool,
}

struct Colors {
    face: &'static str,
    edge: &'static str,
    glyph: &'static str,
}

const fn colors(theme: Theme) -> Colors {
    match theme {
        Theme::Light => Colors {
            face: "#fdfbf3",
            edge: "#1f2937",
            glyph: "#111827",
        },
        Theme::Dark => Colors {
            face: "#1f2937",
            edge: "#e5e7eb",
            glyph: "#f3f4f6",
        },
    }
}

const RED_FIVE_DOT: &str = "#dc2626";

#[must_use]
pub fn tile_svg(tile: Tile, theme: Theme) -> String {
    let c = colors(theme);
    let mut svg = String::new();
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 60 80" width="60" height="80">"#
    );
    let _ = writeln!(
        svg,
        "  <title>{}</title>",
        html_escape(&format!("{} ({tile}, {theme})", asset_name(tile)))
    );
    let _ = writeln!(
        svg,
        r#"  <rect x="2" y="2" width="56" height="76" rx="8" fill="{}" stroke="{}" stroke-width="2"/>"#,
        c.face, c.edge
    );
    let _ = writeln!(
        svg,
        r#"  <text x="30" y="56" font-size="48" text-anchor="middle" fill="{}">{}</text>"#,
        c.glyph,
        tile.unicode()
    );
    if tile.is_red_five() {
        let _ = writeln!(
            svg,
            r#"  <circle cx="50" cy="10" r="4" fill="{RED_FIVE_DOT}"/>"#
        );
    }
    svg.push_str("</svg>\n");
    svg
}

/// Every `(tile, theme, relative path)` the asset set contains.
pub fn asset_plan() -> impl Iterator<Item = (Tile, Theme, String)> {
    Tile::all().flat_map(|tile| {
        Theme::ALL
            .into_iter()
            .map(move |theme| (tile, theme, asset_relative_path(tile, theme)))
    })
}

/// Write the asset set under `out_dir` and return the written paths.
pub fn write_assets(out_dir: &Path, dry_run: bool) -> Result<Vec<PathBuf>> {
    if out_dir.is_file() {
        return Err(CliError::invalid(format!(
            "--out-dir must be a directory: {}",
            out_dir.display()
        )));
    }

    let mut written = Vec::with_capacity(Tile::COUNT * Theme::ALL.len());
    for (tile, theme, relative) in asset_plan() {
        let path = out_dir.join(&relative);
        if !dry_run {
            write_string(&path, &tile_svg(tile, theme))?;
            tracing::debug!(message = "assets.write", path = %path.display());
        }
        written.push(path);
    }
    tracing::info!(
        message = "assets.done",
        count = written.len(),
        dry_run,
        out_dir = %out_dir.display()
    );
    Ok(written)
}

pub fn run_assets(args: AssetsArgs) -> Result<()> {
    let paths = write_assets(&args.out_dir, args.dry_run)?;
    if args.dry_run {
        for path in &paths {
            println!("{}", path.display());
        }
    }
    println!(
        "{} {} asset files under {}",
        if args.dry_run { "would write" } else { "wrote" },
        paths.len(),
        args.out_dir.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn plan_covers_both_themes_for_every_tile() {
        let plan: Vec<_> = asset_plan().collect();
        assert_eq!(plan.len(), 74);
        assert!(plan.iter().any(|(_, _, p)| p == "tiles/dark/Man5-Dora.svg"));
        assert!(plan.iter().any(|(_, _, p)| p == "tiles/light/Haku.svg"));
    }

    #[test]
    fn red_fives_get_a_dot() {
        let red: Tile = "0m".parse().expect("valid");
        let plain: Tile = "5m".parse().expect("valid");
        assert!(tile_svg(red, Theme::Light).contains("<circle"));
        assert!(!tile_svg(plain, Theme::Light).contains("<circle"));
    }

    #[test]
    fn themes_use_different_faces() {
        let tile: Tile = "1z".parse().expect("valid");
        let light = tile_svg(tile, Theme::Light);
        let dark = tile_svg(tile, Theme::Dark);
        assert_ne!(light, dark);
        assert!(light.contains("<title>Ton (1z, light)</title>"), "{light}");
        assert!(light.contains('🀀'));
    }

    #[test]
    fn dry_run_writes_nothing() {
        let temp = tempdir().expect("tempdir");
        let paths = write_assets(temp.path(), true).expect("dry run");
        assert_eq!(paths.len(), 74);
        assert!(!temp.path().join("tiles").exists());
    }

    #[test]
    fn rejects_file_as_out_dir() {
        let temp = tempdir().expect("tempdir");
        let file = temp.path().join("not-a-dir");
        std::fs::write(&file, "x").expect("write");
        let err = write_assets(&file, false).expect_err("file target");
        assert_eq!(err.exit_code(), 2);
    }
}
