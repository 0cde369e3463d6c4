//! Convenience samplers for field generation
//!
//! The synthesis entry points accept any `FnMut(&[usize]) -> FieldArray`;
//! these constructors cover the two common statistics. Both capture the
//! caller's random number generator, so a seeded generator makes the
//! resulting sampler deterministic.

use crate::engine::array::{Complex64, FieldArray};
use ndarray::{ArrayD, IxDyn};
use num_complex::Complex;
use rand::prelude::*;
use rand_distr::{Normal, Uniform};
use std::f64::consts::PI;

/// Complex Gaussian draws with the given standard deviation per component
///
/// # Panics
///
/// Panics if `std_dev` is negative or not finite.
pub fn gaussian<R: Rng>(mut rng: R, std_dev: f64) -> impl FnMut(&[usize]) -> FieldArray<Complex64> {
    let normal = Normal::new(0.0, std_dev).expect("standard deviation must be finite and >= 0");

    move |shape| {
        let mut data = ArrayD::zeros(IxDyn(shape));
        for elem in data.iter_mut() {
            let real: f64 = rng.sample(normal);
            let imag: f64 = rng.sample(normal);
            *elem = Complex::new(real, imag);
        }
        FieldArray { data }
    }
}

/// Unit-magnitude modes with uniformly random phase
///
/// The canonical statistic for drawing directly in the frequency domain:
/// every mode carries magnitude 1, so the generated field's spectral power
/// is set entirely by the power spectrum.
pub fn unit_phase<R: Rng>(mut rng: R) -> impl FnMut(&[usize]) -> FieldArray<Complex64> {
    let phase = Uniform::new(0.0, 2.0 * PI);

    move |shape| {
        let mut data = ArrayD::zeros(IxDyn(shape));
        for elem in data.iter_mut() {
            let theta: f64 = rng.sample(phase);
            *elem = Complex::new(theta.cos(), theta.sin());
        }
        FieldArray { data }
    }
}
