use std::fmt::Write as _;
use std::path::PathBuf;

use clap::Args;

use mjtile::{Node, Placeholder, RenderContext, Suit, Tile, TileView, Widget};

use crate::config::{RenderConfig, ViewArgs};
use crate::error::Result;
use crate::util::{html_escape, write_string};

#[derive(Debug, Clone, Args)]
pub struct GalleryArgs {
    /// Output HTML file.
    #[arg(long, default_value = "mjtile-gallery.html")]
    pub output: PathBuf,

    /// Page title.
    #[arg(long, default_value = "mjtile gallery")]
    pub title: String,

    #[command(flatten)]
    pub view: ViewArgs,
}

/// Gallery rows: one per suit, then winds and dragons.
fn rows() -> Vec<(&'static str, Vec<Tile>)> {
    let mut rows: Vec<(&'static str, Vec<Tile>)> = Suit::ALL
        .into_iter()
        .map(|suit| {
            let name = match suit {
                Suit::Man => "Man",
                Suit::Pin => "Pin",
                Suit::Sou => "Sou",
            };
            let tiles = Tile::all()
                .filter(|t| matches!(t, Tile::Suited { suit: s, .. } if *s == suit))
                .collect();
            (name, tiles)
        })
        .collect();
    rows.push(("Honors", Tile::all().filter(Tile::is_honor).collect()));
    rows
}

fn write_row(html: &mut String, heading: &str, cells: impl IntoIterator<Item = Node>) {
    let _ = writeln!(html, "<section>\n<h2>{}</h2>", html_escape(heading));
    html.push_str("<div class=\"flex flex-wrap gap-1\">");
    for cell in cells {
        html.push_str(&cell.to_html());
    }
    html.push_str("</div>\n</section>\n");
}

#[must_use]
pub fn gallery_html(title: &str, ctx: &RenderContext) -> String {
    let mut html = String::new();
    let root_class = if ctx.theme.is_dark() {
        " class=\"dark\""
    } else {
        ""
    };
    let title = html_escape(title);
    let _ = writeln!(html, "<!doctype html>\n<html{root_class}>\n<head>");
    let _ = writeln!(html, "<meta charset=\"utf-8\">\n<title>{title}</title>");
    html.push_str("</head>\n<body>\n");
    let _ = writeln!(
        html,
        "<h1>{title}</h1>\n<p>theme: {} &middot; breakpoint: {}</p>",
        ctx.theme, ctx.breakpoint
    );

    for (heading, tiles) in rows() {
        write_row(
            &mut html,
            heading,
            tiles.iter().map(|&t| TileView::new(t).render(ctx)),
        );
        write_row(
            &mut html,
            &format!("{heading} (compact)"),
            tiles.iter().map(|&t| TileView::new(t).compact(true).render(ctx)),
        );
    }
    write_row(
        &mut html,
        "Hidden",
        [
            TileView::hidden().render(ctx),
            TileView::hidden().compact(true).render(ctx),
        ],
    );
    write_row(&mut html, "Empty slot", [Placeholder.render(ctx)]);

    html.push_str("</body>\n</html>\n");
    html
}

pub fn run_gallery(args: GalleryArgs) -> Result<()> {
    let config = RenderConfig::from_args(&args.view);
    let html = gallery_html(&args.title, &config.context());
    write_string(&args.output, &html)?;
    tracing::info!(
        message = "gallery.written",
        output = %args.output.display(),
        theme = %config.theme,
        breakpoint = %config.breakpoint
    );
    println!("wrote {}", args.output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mjtile::{Breakpoint, Theme};

    #[test]
    fn rows_cover_every_tile_once() {
        let total: usize = rows().iter().map(|(_, tiles)| tiles.len()).sum();
        assert_eq!(total, Tile::COUNT);
    }

    #[test]
    fn dark_gallery_marks_root() {
        let html = gallery_html("x", &RenderContext::new(Theme::Dark, Breakpoint::Lg));
        assert!(html.starts_with("<!doctype html>\n<html class=\"dark\">"));
        assert!(html.contains(r#"src="&#x2f;tiles&#x2f;dark&#x2f;Chun.svg""#));
        assert!(!html.contains("&#x2f;tiles&#x2f;light&#x2f;"));
    }

    #[test]
    fn small_gallery_has_compact_cells() {
        let html = gallery_html("x", &RenderContext::new(Theme::Light, Breakpoint::Xs));
        assert!(html.contains("<h2>Man (compact)</h2>"));
        assert!(html.contains(">東</div>"), "compact wind cell missing");
        assert!(html.contains("border-dashed"));
    }

    #[test]
    fn title_is_escaped() {
        let html = gallery_html("<tiles & more>", &RenderContext::default());
        assert!(html.contains("<title>&lt;tiles &amp; more&gt;</title>"));
    }
}
