//! Transform backend abstraction layer
//!
//! This module provides an abstraction over different Fourier transform
//! providers. The synthesizer only needs three operations from a backend:
//! a forward transform, an inverse transform, and a frequency-bin
//! enumerator. Alternate implementations (hardware-accelerated or
//! distributed FFTs) can be substituted without touching the synthesis
//! code.

use ndarray::{Array1, ArrayD};
use num_complex::Complex;

// Backend implementations
mod rustfft;

pub use self::rustfft::RustFftBackend;

/// Trait defining the transform backend interface
pub trait SpectralBackend: Send + Sync {
    /// Perform a forward N-dimensional FFT
    ///
    /// # Arguments
    /// * `input` - Input complex array
    /// * `output` - Output array of the same shape (modified in place)
    fn fft(&self, input: &ArrayD<Complex<f64>>, output: &mut ArrayD<Complex<f64>>);

    /// Perform an inverse N-dimensional FFT
    ///
    /// The result is normalized by the element count, so
    /// `ifft(fft(x)) == x` up to floating-point round-off.
    ///
    /// # Arguments
    /// * `input` - Input complex array
    /// * `output` - Output array of the same shape (modified in place)
    fn ifft(&self, input: &ArrayD<Complex<f64>>, output: &mut ArrayD<Complex<f64>>);

    /// Enumerate the signed sample frequencies of an `n`-point transform
    /// with bin spacing `d`, ordered `[0, 1, .., n/2-1, -n/2, .., -1] / (d * n)`.
    fn fftfreq(&self, n: usize, d: f64) -> Array1<f64>;

    /// Return the name of the backend for debugging/logging
    fn name(&self) -> &'static str;
}

/// Get the default transform backend
pub fn default_backend() -> Box<dyn SpectralBackend> {
    Box::new(RustFftBackend::new())
}

/// Create a specific backend by name (useful for testing and benchmarking)
pub fn create_backend(name: &str) -> Option<Box<dyn SpectralBackend>> {
    match name {
        "rustfft" => Some(Box::new(RustFftBackend::new())),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_backend_creation() {
        let backend = default_backend();
        assert_eq!(backend.name(), "rustfft");
    }

    #[test]
    fn test_rustfft_backend_creation() {
        let backend = create_backend("rustfft");
        assert!(backend.is_some());
        assert_eq!(backend.unwrap().name(), "rustfft");
    }

    #[test]
    fn test_unknown_backend_is_none() {
        assert!(create_backend("cufft").is_none());
    }
}
