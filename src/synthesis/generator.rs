//! High-level field generation interface
//!
//! The generator shapes raw random modes by the square root of a target
//! power spectrum and inverse-transforms them into a real-valued field
//! whose spectral power matches the target in expectation.

use crate::engine::array::{Complex64, FieldArray};
use crate::engine::backend::SpectralBackend;
use crate::engine::operations::{global_backend, multiply};
use crate::error::FieldError;
use crate::synthesis::grid::{frequency_grid, frequency_magnitude};
use ndarray::ArrayD;
use num_complex::Complex;

/// Parameters for field generation
#[derive(Debug, Clone)]
pub struct FieldConfig {
    /// Physical size of one grid cell; rescales the frequency grid
    pub unit_length: f64,
    /// Draw samples directly in the frequency domain, one value per mode.
    /// When false the sampler draws in physical space and its output is
    /// forward-transformed before weighting.
    pub sample_in_fourier: bool,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            unit_length: 1.0,
            sample_in_fourier: true,
        }
    }
}

/// Generate a random field with the default configuration and backend
///
/// Shorthand for [`generate_field_with`] using a `unit_length` of 1,
/// frequency-domain sampling, and the process-wide default backend.
pub fn generate_field<S, P>(
    sampler: S,
    power_spectrum: P,
    shape: &[usize],
) -> Result<ArrayD<f64>, FieldError>
where
    S: FnMut(&[usize]) -> FieldArray<Complex64>,
    P: Fn(f64) -> f64,
{
    generate_field_with(
        sampler,
        power_spectrum,
        shape,
        &FieldConfig::default(),
        global_backend(),
    )
}

/// Generate a random field following a target power spectrum
///
/// The sampler is called exactly once with `shape` and must return an
/// array of exactly that shape. Its modes are multiplied elementwise by
/// `sqrt(power_spectrum(k))` at each mode's frequency magnitude `k`, the
/// product is inverse-transformed, and the real parts are returned.
///
/// The zero-frequency mode always receives weight 0 and `power_spectrum`
/// is never evaluated there, so spectra that diverge at the origin (for
/// example power laws with negative exponents) are usable as-is.
///
/// `power_spectrum` must return non-negative finite values for every
/// magnitude greater than 0; violations are not trapped and surface as
/// NaN contamination of the output field.
///
/// # Errors
///
/// Returns [`FieldError::EmptyShape`], [`FieldError::ZeroExtent`] or
/// [`FieldError::InvalidUnitLength`] before any numerical work, and
/// [`FieldError::SamplerShape`] if the sampler's output shape does not
/// match the request.
pub fn generate_field_with<S, P>(
    mut sampler: S,
    power_spectrum: P,
    shape: &[usize],
    config: &FieldConfig,
    backend: &dyn SpectralBackend,
) -> Result<ArrayD<f64>, FieldError>
where
    S: FnMut(&[usize]) -> FieldArray<Complex64>,
    P: Fn(f64) -> f64,
{
    validate_shape(shape)?;
    if !config.unit_length.is_finite() || config.unit_length <= 0.0 {
        return Err(FieldError::InvalidUnitLength(config.unit_length));
    }

    log::debug!(
        "generating {:?} field on `{}` backend (unit_length = {})",
        shape,
        backend.name(),
        config.unit_length
    );

    let grid = frequency_grid(shape, config.unit_length, backend);
    let magnitude = frequency_magnitude(&grid);

    // One mode value per grid point in both modes: for the full complex
    // transform the frequency-domain shape equals the field shape.
    let sample = sampler(shape);
    check_sample_shape(shape, &sample)?;

    // Raw modes: drawn directly in the frequency domain, or drawn in
    // physical space and forward-transformed.
    let modes = if config.sample_in_fourier {
        sample
    } else {
        let mut transformed = FieldArray::zeros(shape);
        backend.fft(&sample.data, &mut transformed.data);
        transformed
    };

    // sqrt(P(k)) per mode, with the zero-frequency mode masked to 0.
    let weights = FieldArray {
        data: magnitude.mapv(|k| {
            if k > 0.0 {
                Complex::new(power_spectrum(k).sqrt(), 0.0)
            } else {
                Complex::new(0.0, 0.0)
            }
        }),
    };

    let shaped = multiply(&modes, &weights);

    let mut field = FieldArray::zeros(shape);
    backend.ifft(&shaped.data, &mut field.data);

    Ok(field.re())
}

fn validate_shape(shape: &[usize]) -> Result<(), FieldError> {
    if shape.is_empty() {
        return Err(FieldError::EmptyShape);
    }
    if shape.contains(&0) {
        return Err(FieldError::ZeroExtent(shape.to_vec()));
    }
    Ok(())
}

fn check_sample_shape(
    expected: &[usize],
    sample: &FieldArray<Complex64>,
) -> Result<(), FieldError> {
    if sample.shape() != expected {
        return Err(FieldError::SamplerShape {
            expected: expected.to_vec(),
            got: sample.shape().to_vec(),
        });
    }
    Ok(())
}
