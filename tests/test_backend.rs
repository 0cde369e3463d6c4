//! Backend contract tests
//!
//! Exercises every registered backend through the trait object, the way
//! the generator consumes it.

mod test_utils;

use fieldgen::engine::backend::create_backend;
use fieldgen::prelude::*;
use ndarray::{ArrayD, IxDyn};
use test_utils::patterned_sampler;

const BACKENDS: &[&str] = &["rustfft"];

#[test]
fn test_roundtrip_across_ranks() {
    for name in BACKENDS {
        let backend = create_backend(name).unwrap();

        for shape in [vec![7], vec![4, 5], vec![3, 4, 5]] {
            let input = patterned_sampler(&shape);

            let mut spectrum = FieldArray::zeros(&shape);
            let mut roundtrip = FieldArray::zeros(&shape);
            backend.fft(&input.data, &mut spectrum.data);
            backend.ifft(&spectrum.data, &mut roundtrip.data);

            let err = (roundtrip.data - &input.data)
                .iter()
                .map(|c| c.norm())
                .fold(0.0_f64, f64::max);
            assert!(
                err < 1e-10,
                "`{}` round-trip error {} for shape {:?}",
                name,
                err,
                shape
            );
        }
    }
}

#[test]
fn test_forward_transform_is_unnormalized() {
    // The forward transform accumulates, the inverse carries the 1/N; the
    // DC coefficient of a constant field is therefore N times the value.
    for name in BACKENDS {
        let backend = create_backend(name).unwrap();

        let input = ArrayD::from_elem(IxDyn(&[4, 4]), Complex64::new(1.0, 0.0));
        let mut output = ArrayD::zeros(IxDyn(&[4, 4]));
        backend.fft(&input, &mut output);

        assert!((output[[0, 0]].re - 16.0).abs() < 1e-12);
        for (index, value) in output.indexed_iter() {
            if index[0] != 0 || index[1] != 0 {
                assert!(value.norm() < 1e-12, "mode {:?} = {}", index, value);
            }
        }
    }
}

#[test]
fn test_fftfreq_negative_bins_mirror_positive() {
    for name in BACKENDS {
        let backend = create_backend(name).unwrap();

        for n in [4, 5, 9, 16] {
            let freqs = backend.fftfreq(n, 1.0);
            assert_eq!(freqs.len(), n);
            assert_eq!(freqs[0], 0.0);

            // Every non-DC, non-Nyquist bin has a mirrored partner.
            for i in 1..n {
                let j = n - i;
                if j == i {
                    continue;
                }
                assert!(
                    (freqs[i] + freqs[j]).abs() < 1e-15,
                    "bins {} and {} of n = {} are not mirrored",
                    i,
                    j,
                    n
                );
            }
        }
    }
}

#[test]
fn test_fftfreq_unit_length_sets_bin_spacing() {
    for name in BACKENDS {
        let backend = create_backend(name).unwrap();

        let unit = backend.fftfreq(8, 1.0);
        let halved = backend.fftfreq(8, 4.0);
        for (u, h) in unit.iter().zip(halved.iter()) {
            assert!((u / 4.0 - h).abs() < 1e-15);
        }
    }
}
