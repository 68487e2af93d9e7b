use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use imbue_core::{AdjustableColorSession, AdjustmentParams, ColorValue, Pipeline, Stage};

fn bench_output_color(c: &mut Criterion) {
    let mut session = AdjustableColorSession::new(ColorValue::lab_d50(62.0, -18.0, 40.0));
    session.params = AdjustmentParams {
        lighten: 0.2,
        darken: 0.1,
        desaturate: 0.4,
        invert: true,
    };

    c.bench_function("output_color_lab_input", |b| {
        b.iter(|| black_box(&session).output_color())
    });

    let srgb_session = AdjustableColorSession {
        input_color: ColorValue::srgb(0.25, 0.75, 0.5),
        ..session
    };
    c.bench_function("output_color_srgb_input", |b| {
        b.iter(|| black_box(&srgb_session).output_color())
    });
}

fn bench_preview_stages(c: &mut Criterion) {
    let pipeline = Pipeline::new();
    let input = ColorValue::srgb(0.8, 0.3, 0.1);
    let params = AdjustmentParams {
        lighten: 0.3,
        desaturate: 0.5,
        ..Default::default()
    };

    c.bench_function("preview_all_stages", |b| {
        b.iter(|| {
            for stage in Stage::ALL {
                let _ = black_box(pipeline.process_up_to(&input, &params, stage));
            }
        })
    });
}

fn bench_luminosity(c: &mut Criterion) {
    let color = ColorValue::srgb(0.8, 0.3, 0.1);
    c.bench_function("luminosity_srgb", |b| b.iter(|| black_box(color).luminosity()));
}

criterion_group!(benches, bench_output_color, bench_preview_stages, bench_luminosity);
criterion_main!(benches);
