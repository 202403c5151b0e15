use std::num::NonZeroU32;
use std::ops::Range;

/// Splits `height` rows into contiguous bands, one per worker.
///
/// At most `max_bands` bands are produced and never more than there are rows.
/// When the rows do not divide evenly the first `height % bands` bands take one
/// extra row each.
#[must_use]
pub fn calculate_row_bands(height: u32, max_bands: NonZeroU32) -> Vec<Range<u32>> {
    let bands = max_bands.get().min(height);

    if bands == 0 {
        return Vec::new();
    }

    let band_height = height / bands;
    let remainder = height % bands;
    let mut top = 0;

    (0..bands)
        .map(|band| {
            let rows = band_height + u32::from(band < remainder);
            let range = top..top + rows;
            top += rows;
            range
        })
        .collect()
}
