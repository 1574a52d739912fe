use criterion::{criterion_group, criterion_main, Criterion};

use nalgebra::point;
use raymarch_lib::{
    premade,
    render::{RenderOptions, Renderer},
    Camera,
};

const WIDTH: usize = 512;
const HEIGHT: usize = 512;

fn render_full(c: &mut Criterion) {
    let renderer = Renderer::new(
        premade::demo_scene(),
        RenderOptions::new((WIDTH, HEIGHT), 20.0, 15, 5),
    );
    let camera = Camera::new(point![0.0, 0.0, -5.0], (WIDTH, HEIGHT));
    let mut buffer = vec![0; 3 * WIDTH * HEIGHT];

    c.bench_function("render full quality", |b| {
        b.iter(|| renderer.render(&camera, &mut buffer));
    });
}

fn render_preview(c: &mut Criterion) {
    let renderer = Renderer::new(
        premade::demo_scene(),
        RenderOptions::new((WIDTH, HEIGHT), 20.0, 15, 5),
    );
    let camera = Camera::new(point![0.0, 0.0, -5.0], (WIDTH, HEIGHT));
    let mut buffer = vec![0; 3 * WIDTH * HEIGHT];

    c.bench_function("render preview quality", |b| {
        b.iter(|| renderer.render_preview(&camera, &mut buffer));
    });
}

criterion_group! {
    name = sequential;
    config = Criterion::default().significance_level(0.1).sample_size(10);
    targets = render_full, render_preview
}

criterion_main!(sequential);
