use std::num::NonZeroU32;

use criterion::{Criterion, criterion_group, criterion_main};
use mandelbrot_viewer::{
    Complex, PixelBuffer, PixelSize, RenderGeneration, RenderTarget, Resolution, TextureSink,
    Viewport, render_viewport,
};

struct NullSink;

impl TextureSink for NullSink {
    fn upload(&mut self, _resolution: Resolution, _buffer: &PixelBuffer) {}
}

fn bands() -> NonZeroU32 {
    std::thread::available_parallelism()
        .ok()
        .and_then(|n| NonZeroU32::new(n.get() as u32))
        .unwrap_or(NonZeroU32::MIN)
}

fn bench_render(c: &mut Criterion, name: &str, viewport: Viewport, size: PixelSize, resolution: Resolution) {
    let generation = RenderGeneration::new();
    let mut buffer = PixelBuffer::new(size);
    let mut sink = NullSink;
    let max_bands = bands();

    c.bench_function(name, |b| {
        b.iter(|| {
            render_viewport(
                &viewport,
                RenderTarget {
                    resolution,
                    buffer: &mut buffer,
                },
                &generation,
                generation.current(),
                max_bands,
                &mut sink,
            )
        })
    });
}

fn render_pipeline(c: &mut Criterion) {
    let display = PixelSize::new(1280, 720).unwrap();

    bench_render(c, "render_default_full_res", Viewport::default(), display, Resolution::Full);
    bench_render(
        c,
        "render_default_low_res",
        Viewport::default(),
        display.downsampled(2),
        Resolution::Low,
    );

    let deep = Viewport::new(
        Complex {
            real: -0.743_643_887_037,
            imag: 0.131_825_904_205,
        },
        3.5e-6,
        2172,
    )
    .unwrap();
    bench_render(c, "render_deep_zoom_full_res", deep, display, Resolution::Full);
}

criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(10);
    targets = render_pipeline
}
criterion_main!(benches);
