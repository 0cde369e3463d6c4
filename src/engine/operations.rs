//! Array operations for spectral synthesis
//!
//! This module provides high-level array operations that dispatch to the
//! process-wide default backend. Callers who need a specific backend pass
//! one explicitly to the synthesis entry points instead.

use crate::engine::array::{Complex64, FieldArray};
use crate::engine::backend::{default_backend, SpectralBackend};
use once_cell::sync::Lazy;
use std::sync::Arc;

// Global backend instance (thread-safe, initialized once)
static BACKEND: Lazy<Arc<Box<dyn SpectralBackend>>> = Lazy::new(|| Arc::new(default_backend()));

/// Get the process-wide default backend
pub fn global_backend() -> &'static dyn SpectralBackend {
    &***BACKEND
}

/// Perform element-wise multiplication
pub fn multiply(a: &FieldArray<Complex64>, b: &FieldArray<Complex64>) -> FieldArray<Complex64> {
    FieldArray {
        data: &a.data * &b.data,
    }
}

/// Perform an N-dimensional FFT with the default backend
pub fn fft(input: &FieldArray<Complex64>, output: &mut FieldArray<Complex64>) {
    BACKEND.fft(&input.data, &mut output.data);
}

/// Perform an N-dimensional inverse FFT with the default backend
pub fn ifft(input: &FieldArray<Complex64>, output: &mut FieldArray<Complex64>) {
    BACKEND.ifft(&input.data, &mut output.data);
}
