use criterion::{black_box, criterion_group, criterion_main, Criterion};

use tui_globe::data;
use tui_globe::globe::{render_frame, LandLookup, RenderConfig};

fn bench_classifier_build(c: &mut Criterion) {
    let boundaries = data::builtin_boundaries();
    c.bench_function("land_lookup_build", |b| {
        b.iter(|| LandLookup::build(black_box(&boundaries)))
    });
}

fn bench_render_frame(c: &mut Criterion) {
    let lookup = LandLookup::build(&data::builtin_boundaries());

    for quality in [1u8, 4] {
        let cfg = RenderConfig {
            quality,
            ..RenderConfig::default()
        };
        c.bench_function(&format!("render_frame_q{}", quality), |b| {
            b.iter(|| render_frame(black_box(&cfg), &lookup, 120, 40, 0.7).unwrap())
        });
    }
}

criterion_group!(benches, bench_classifier_build, bench_render_frame);
criterion_main!(benches);
