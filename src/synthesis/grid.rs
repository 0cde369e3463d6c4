//! Frequency-grid construction
//!
//! Builds the signed spatial-frequency grid of a field shape and the
//! per-mode frequency magnitudes at which a power spectrum is evaluated.

use crate::engine::backend::SpectralBackend;
use ndarray::{ArrayD, IxDyn, Zip};

/// Build the full-dimensional frequency grid for `shape`.
///
/// Returns one array per dimension, each of the full shape, where
/// component `d` holds the signed frequency of dimension `d` and varies
/// only along axis `d` (an "ij"-style outer combination of the backend's
/// 1-D bins). `unit_length` is the bin spacing, so the physical frequency
/// at cycle index `c` of an axis of extent `n` is `c / (unit_length * n)`.
pub fn frequency_grid(
    shape: &[usize],
    unit_length: f64,
    backend: &dyn SpectralBackend,
) -> Vec<ArrayD<f64>> {
    let mut grid = Vec::with_capacity(shape.len());

    for (axis, &n) in shape.iter().enumerate() {
        let bins = backend.fftfreq(n, unit_length);

        let mut component = ArrayD::zeros(IxDyn(shape));
        for (index, value) in component.indexed_iter_mut() {
            *value = bins[index[axis]];
        }

        grid.push(component);
    }

    grid
}

/// Compute the per-mode Euclidean norm across the grid's components.
///
/// `grid` must be non-empty with equal-shaped components, as produced by
/// [`frequency_grid`]. Every entry of the result is non-negative.
pub fn frequency_magnitude(grid: &[ArrayD<f64>]) -> ArrayD<f64> {
    let mut sum = ArrayD::zeros(grid[0].raw_dim());

    for component in grid {
        Zip::from(&mut sum)
            .and(component)
            .for_each(|acc, &k| *acc += k * k);
    }

    sum.mapv_inplace(f64::sqrt);
    sum
}
