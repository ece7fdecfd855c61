use criterion::{
    criterion_group, criterion_main, AxisScale, BenchmarkId, Criterion, PlotConfiguration,
};
use kurbo::{BezPath, Rect};
use peniko::Color;
use rand::{thread_rng, Rng};

use tetrix::prelude::*;

/// Counts fills without keeping them, so only the renderer is measured.
#[derive(Default)]
struct Counter {
    fills: usize,
}

impl Surface for Counter {
    fn fill_path(&mut self, _: &BezPath, _: Color) {
        self.fills += 1;
    }

    fn clear_rect(&mut self, _: Rect) {
        self.fills = 0;
    }
}

fn random_deltas(i: usize) -> Vec<ScrollDelta> {
    let mut rng = thread_rng();
    let mut gen = || rng.gen_range(-120.0..120.0);

    (0..i).map(|_| ScrollDelta::new(gen(), gen())).collect()
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Tetrix");
    group
        .plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic))
        .warm_up_time(std::time::Duration::from_secs(1))
        .sample_size(50);

    let viewport = Viewport::new(1920.0, 1080.0, 1.0);
    let deltas = random_deltas(64);

    let modes = [
        ("mono", Config::default()),
        (
            "real_3d",
            Config {
                real_3d: true,
                ..Config::default()
            },
        ),
        (
            "anaglyph",
            Config {
                anaglyph: true,
                ..Config::default()
            },
        ),
    ];

    for (name, config) in &modes {
        for min_side in [30.0, 15.0, 7.5] {
            let config = Config {
                min_side: Some(min_side),
                ..config.clone()
            };

            let Ok(mut scene) = Scene::new(&config, viewport) else {
                continue;
            };
            let mut surface = Counter::default();
            scene.render(&mut surface);

            group.bench_with_input(
                BenchmarkId::new(format!("scroll/{name}"), min_side),
                &deltas,
                |b, input| {
                    let mut deltas = input.iter().cycle();
                    b.iter(|| {
                        let delta = *deltas.next().unwrap_or(&ScrollDelta::default());
                        scene.scroll(&mut surface, delta).map(|_| surface.fills)
                    })
                },
            );
        }
    }

    // Shrinking and growing the side forces the cache to prune and rebuild.
    group.bench_function("zoom/mono", |b| {
        let mut tree = Tree::new(Color::from_rgba8(102, 102, 153, 128), 30.0);
        let mut surface = Counter::default();
        let centre = viewport.centre();
        let mut sides = [960.0, 60.0].into_iter().cycle();

        b.iter(|| {
            let side = sides.next().unwrap_or(960.0);
            tree.draw(&mut surface, side, centre, glam::DVec3::ZERO)
        })
    });

    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
