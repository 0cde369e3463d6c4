//! Test utilities for FieldGen tests
//!
//! Deterministic sampler stubs and comparison helpers shared by the
//! integration tests.

use fieldgen::engine::array::{Complex64, FieldArray};
use ndarray::ArrayD;
use num_complex::Complex;

/// Sampler stub returning an all-ones complex array
pub fn ones_sampler(shape: &[usize]) -> FieldArray<Complex64> {
    FieldArray::from_scalar(shape, Complex::new(1.0, 0.0))
}

/// Deterministic sampler: unit-magnitude modes with a phase derived from
/// the flat index, so repeated calls return identical arrays without any
/// RNG state.
pub fn patterned_sampler(shape: &[usize]) -> FieldArray<Complex64> {
    let mut arr = FieldArray::zeros(shape);
    for (i, elem) in arr.data.iter_mut().enumerate() {
        let theta = (i as f64 * 0.37).sin() * std::f64::consts::PI;
        *elem = Complex::new(theta.cos(), theta.sin());
    }
    arr
}

/// Deterministic real-valued sampler for the physical-space path
pub fn real_patterned_sampler(shape: &[usize]) -> FieldArray<Complex64> {
    let mut real = ArrayD::zeros(ndarray::IxDyn(shape));
    for (i, elem) in real.iter_mut().enumerate() {
        *elem = (i as f64 * 0.61).cos();
    }
    FieldArray::from_real(real)
}

/// Check if two real fields are close to each other
pub fn all_close(a: &ArrayD<f64>, b: &ArrayD<f64>, rtol: f64, atol: f64) -> bool {
    if a.shape() != b.shape() {
        println!("Shapes do not match: {:?} != {:?}", a.shape(), b.shape());
        return false;
    }

    for (a_val, b_val) in a.iter().zip(b.iter()) {
        let diff = (a_val - b_val).abs();
        let tolerance = atol + rtol * a_val.abs().max(b_val.abs());

        if diff > tolerance {
            println!(
                "Values differ: {} vs {}, diff = {}, tolerance = {}",
                a_val, b_val, diff, tolerance
            );
            return false;
        }
    }

    true
}
