#![no_main]

use libfuzzer_sys::fuzz_target;
use mjtile_core::{AssetBase, Theme, TileCode, image_paths, overlay_label, short_label};
use mjtile_style::Breakpoint;
use mjtile_widgets::{RenderContext, TileView, Widget};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    // Parsing must never panic.
    let Ok(code) = text.parse::<TileCode>() else {
        return;
    };

    // Accepted codes are exactly two characters and print back unchanged.
    assert_eq!(code.to_string(), text);

    if let Some(tile) = code.tile() {
        let paths = image_paths(tile, &AssetBase::default());
        assert!(paths.light.starts_with("/tiles/light/"));
        assert!(paths.dark.starts_with("/tiles/dark/"));
        assert!(!short_label(tile).text.is_empty());
        assert!(!overlay_label(tile).text.is_empty());
    }

    let ctx = RenderContext::new(Theme::Dark, Breakpoint::Sm);
    let html = TileView::new(code).compact(true).render(&ctx).to_html();
    assert!(html.starts_with("<div"));
});
