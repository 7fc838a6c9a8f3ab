//! Benchmarks for tile rendering and HTML serialization.
//!
//! Run with: cargo bench -p mjtile-widgets --bench tile_bench

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use mjtile_core::{Theme, Tile, TileCode};
use mjtile_style::Breakpoint;
use mjtile_widgets::{RenderContext, TileView, Widget};

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("tile/render");
    let codes: Vec<TileCode> = Tile::all()
        .map(TileCode::from)
        .chain([TileCode::Hidden])
        .collect();

    for (name, bp, compact) in [
        ("image_lg", Breakpoint::Lg, false),
        ("compact_sm", Breakpoint::Sm, true),
    ] {
        let ctx = RenderContext::new(Theme::Dark, bp);
        group.bench_function(name, |b| {
            b.iter(|| {
                for &code in &codes {
                    black_box(TileView::new(code).compact(compact).render(&ctx));
                }
            })
        });
    }
    group.finish();
}

fn bench_to_html(c: &mut Criterion) {
    let ctx = RenderContext::new(Theme::Light, Breakpoint::Xl);
    let nodes: Vec<_> = Tile::all().map(|t| TileView::new(t).render(&ctx)).collect();
    c.bench_function("tile/to_html", |b| {
        b.iter(|| {
            for node in &nodes {
                black_box(node.to_html());
            }
        })
    });
}

criterion_group!(benches, bench_render, bench_to_html);
criterion_main!(benches);
