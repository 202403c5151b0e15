use std::num::NonZeroU32;

/// Number of row bands for a hardware parallelism hint, falling back to one.
#[must_use]
pub fn bands_for_parallelism_hint(hint: usize) -> NonZeroU32 {
    u32::try_from(hint)
        .ok()
        .and_then(NonZeroU32::new)
        .unwrap_or(NonZeroU32::MIN)
}

pub fn calculate_threads_for_row_banding() -> NonZeroU32 {
    let num_avail_threads = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);

    bands_for_parallelism_hint(num_avail_threads)
}
