//! RustFFT backend implementation
//!
//! Pure Rust implementation using the rustfft library. Arrays of any rank
//! are transformed one axis at a time, processing each 1-D lane along that
//! axis.

use super::SpectralBackend;
use ndarray::{Array1, ArrayD, Axis};
use num_complex::Complex;
use rustfft::FftPlanner;

/// RustFFT-based transform backend
pub struct RustFftBackend {
    // RustFFT planner is created on-demand for thread safety
}

impl RustFftBackend {
    /// Create a new RustFFT backend
    pub fn new() -> Self {
        Self {}
    }

    /// Transform every axis of `output` in place
    fn transform_axes(output: &mut ArrayD<Complex<f64>>, inverse: bool) {
        let mut planner = FftPlanner::new();

        for axis in 0..output.ndim() {
            let n = output.shape()[axis];
            let fft = if inverse {
                planner.plan_fft_inverse(n)
            } else {
                planner.plan_fft_forward(n)
            };

            for mut lane in output.lanes_mut(Axis(axis)) {
                let mut buffer: Vec<Complex<f64>> = lane.to_vec();
                fft.process(&mut buffer);

                for (dst, val) in lane.iter_mut().zip(buffer) {
                    *dst = val;
                }
            }
        }
    }
}

impl Default for RustFftBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl SpectralBackend for RustFftBackend {
    fn fft(&self, input: &ArrayD<Complex<f64>>, output: &mut ArrayD<Complex<f64>>) {
        output.assign(input);
        Self::transform_axes(output, false);
    }

    fn ifft(&self, input: &ArrayD<Complex<f64>>, output: &mut ArrayD<Complex<f64>>) {
        output.assign(input);
        Self::transform_axes(output, true);

        let normalization = 1.0 / output.len() as f64;
        output.mapv_inplace(|val| val * normalization);
    }

    fn fftfreq(&self, n: usize, d: f64) -> Array1<f64> {
        if n == 0 {
            return Array1::zeros(0);
        }

        let mut freqs = Array1::zeros(n);

        // Frequency convention: [0, 1, ..., n/2-1, -n/2, ..., -1] / (d*n)
        let half = (n - 1) / 2;
        for i in 0..n {
            let cycles = if i <= half {
                i as f64
            } else {
                i as f64 - n as f64
            };
            freqs[i] = cycles / (d * n as f64);
        }

        freqs
    }

    fn name(&self) -> &'static str {
        "rustfft"
    }
}
