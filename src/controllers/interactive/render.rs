use std::num::NonZeroU32;
use std::time::{Duration, Instant};

use log::debug;

use crate::controllers::interactive::data::resolution::Resolution;
use crate::controllers::interactive::ports::texture_sink::TextureSink;
use crate::core::actions::generation::RenderGeneration;
use crate::core::actions::rasterize::ports::colour_map::ColourMap;
use crate::core::actions::rasterize::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::actions::rasterize::rasterize_bands::rasterize_bands;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::mandelbrot::colour_maps::smooth_hsv::MandelbrotSmoothHsv;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RenderOutcome {
    Committed { duration: Duration },
    /// The generation moved on; nothing was uploaded.
    Discarded,
}

/// The buffer a render writes into, tagged with the texture it mirrors.
#[derive(Debug)]
pub struct RenderTarget<'a> {
    pub resolution: Resolution,
    pub buffer: &'a mut PixelBuffer,
}

/// Renders `viewport` into `target` and uploads it if `started_at` is still current.
pub fn render_viewport<S>(
    viewport: &Viewport,
    target: RenderTarget<'_>,
    generation: &RenderGeneration,
    started_at: u64,
    max_bands: NonZeroU32,
    sink: &mut S,
) -> RenderOutcome
where
    S: TextureSink + ?Sized,
{
    let resolution = target.resolution;
    let size = target.buffer.size();
    let algorithm = MandelbrotAlgorithm::new(*viewport, size);
    let colour_map = MandelbrotSmoothHsv::new(viewport.iter_limit());

    let outcome = render_and_commit(
        target,
        &algorithm,
        &colour_map,
        generation,
        started_at,
        max_bands,
        sink,
    );

    debug!(
        "{} resolution render {}x{} generation={} iterations={}: {:?}",
        resolution.label(),
        size.width(),
        size.height(),
        started_at,
        viewport.iter_limit(),
        outcome
    );

    outcome
}

fn render_and_commit<Alg, CMap, S>(
    target: RenderTarget<'_>,
    algorithm: &Alg,
    colour_map: &CMap,
    generation: &RenderGeneration,
    started_at: u64,
    max_bands: NonZeroU32,
    sink: &mut S,
) -> RenderOutcome
where
    Alg: FractalAlgorithm + Sync,
    CMap: ColourMap<Alg::Success> + Sync,
    S: TextureSink + ?Sized,
{
    let start = Instant::now();
    let token = generation.token(started_at);
    let result = rasterize_bands(target.buffer, algorithm, colour_map, &token, max_bands);

    // Bands may all have finished just before a bump, so re-check after the join.
    if result.is_err() || !generation.is_current(started_at) {
        return RenderOutcome::Discarded;
    }

    sink.upload(target.resolution, target.buffer);

    RenderOutcome::Committed {
        duration: start.elapsed(),
    }
}
