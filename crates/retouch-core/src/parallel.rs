//! Parallelization helpers for per-pixel scans.
//!
//! With the `parallel` feature enabled, buffers at or above
//! [`PARALLEL_THRESHOLD`] pixels are split across the rayon thread pool.
//! Smaller buffers, and every buffer when the feature is off, run on the
//! calling thread. Both paths produce identical results.

/// Minimum pixel count before work is handed to rayon.
#[cfg_attr(not(feature = "parallel"), allow(dead_code))]
pub(crate) const PARALLEL_THRESHOLD: usize = 30_000;

/// Apply `f` to every pixel in place.
///
/// Each invocation of `f` touches exactly one pixel, so parallel workers only
/// ever write disjoint elements.
#[cfg(feature = "parallel")]
pub(crate) fn for_each_pixel_mut<F>(pixels: &mut [u32], f: F)
where
    F: Fn(&mut u32) + Sync + Send,
{
    use rayon::prelude::*;

    if pixels.len() >= PARALLEL_THRESHOLD {
        pixels.par_iter_mut().for_each(f);
    } else {
        pixels.iter_mut().for_each(f);
    }
}

#[cfg(not(feature = "parallel"))]
pub(crate) fn for_each_pixel_mut<F>(pixels: &mut [u32], f: F)
where
    F: Fn(&mut u32) + Sync + Send,
{
    pixels.iter_mut().for_each(f);
}

/// Index of the first pixel with the largest `key`.
///
/// Ties resolve to the lowest index. Returns `None` for an empty slice.
#[cfg(feature = "parallel")]
pub(crate) fn first_max_by_key<K, F>(pixels: &[u32], key: F) -> Option<usize>
where
    K: Ord + Send,
    F: Fn(u32) -> K + Sync + Send,
{
    use rayon::prelude::*;
    use std::cmp::Reverse;

    if pixels.len() >= PARALLEL_THRESHOLD {
        // (key, Reverse(index)) is unique per pixel, so the reduction order
        // cannot change which pixel wins.
        pixels
            .par_iter()
            .enumerate()
            .map(|(i, &p)| (key(p), Reverse(i)))
            .max()
            .map(|(_, Reverse(i))| i)
    } else {
        first_max_sequential(pixels, key)
    }
}

#[cfg(not(feature = "parallel"))]
pub(crate) fn first_max_by_key<K, F>(pixels: &[u32], key: F) -> Option<usize>
where
    K: Ord + Send,
    F: Fn(u32) -> K + Sync + Send,
{
    first_max_sequential(pixels, key)
}

fn first_max_sequential<K, F>(pixels: &[u32], key: F) -> Option<usize>
where
    K: Ord,
    F: Fn(u32) -> K,
{
    let mut best: Option<(usize, K)> = None;
    for (i, &p) in pixels.iter().enumerate() {
        let k = key(p);
        // Strict comparison keeps the earliest pixel on ties
        let better = match &best {
            Some((_, best_key)) => k > *best_key,
            None => true,
        };
        if better {
            best = Some((i, k));
        }
    }
    best.map(|(i, _)| i)
}
