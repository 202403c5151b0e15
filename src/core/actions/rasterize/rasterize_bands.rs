use std::num::NonZeroU32;
use std::ops::Range;

use rayon::prelude::*;

use crate::core::actions::cancellation::{CancelToken, Cancelled};
use crate::core::actions::rasterize::ports::colour_map::ColourMap;
use crate::core::actions::rasterize::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer};
use crate::core::data::point::Point;
use crate::core::util::calculate_row_bands::calculate_row_bands;

/// Fills `buffer` in parallel, one contiguous band of rows per worker.
///
/// Every band polls `cancel` before each of its rows and returns as soon as it
/// fires, leaving the rest of its rows untouched. Bands write disjoint slices
/// of the buffer. All bands have finished when this returns; the result is
/// [`Cancelled`] if any of them gave up.
pub fn rasterize_bands<Alg, CMap, C>(
    buffer: &mut PixelBuffer,
    algorithm: &Alg,
    colour_map: &CMap,
    cancel: &C,
    max_bands: NonZeroU32,
) -> Result<(), Cancelled>
where
    Alg: FractalAlgorithm + Sync,
    CMap: ColourMap<Alg::Success> + Sync,
    C: CancelToken,
{
    let width = buffer.size().width();
    let stride = buffer.row_stride();
    let bands = calculate_row_bands(buffer.size().height(), max_bands);

    let mut remaining = buffer.buffer_mut();
    let mut jobs: Vec<(Range<u32>, &mut [u8])> = Vec::with_capacity(bands.len());

    for rows in bands {
        let (band, rest) = std::mem::take(&mut remaining).split_at_mut(rows.len() * stride);
        jobs.push((rows, band));
        remaining = rest;
    }

    jobs.into_par_iter()
        .map(|(rows, band)| rasterize_band(rows, band, width, algorithm, colour_map, cancel))
        .reduce(|| Ok(()), |a, b| a.and(b))
}

fn rasterize_band<Alg, CMap, C>(
    rows: Range<u32>,
    band: &mut [u8],
    width: u32,
    algorithm: &Alg,
    colour_map: &CMap,
    cancel: &C,
) -> Result<(), Cancelled>
where
    Alg: FractalAlgorithm,
    CMap: ColourMap<Alg::Success>,
    C: CancelToken,
{
    let stride = width as usize * BYTES_PER_PIXEL;

    for (y, row) in rows.zip(band.chunks_exact_mut(stride)) {
        if cancel.is_cancelled() {
            return Err(Cancelled);
        }

        for (x, pixel) in (0..width).zip(row.chunks_exact_mut(BYTES_PER_PIXEL)) {
            let Colour { r, g, b } = colour_map.map(algorithm.compute(Point { x, y }));
            pixel.copy_from_slice(&[r, g, b]);
        }
    }

    Ok(())
}
