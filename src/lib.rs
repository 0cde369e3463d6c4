//! FieldGen - A Rust library for generating random fields with a prescribed power spectrum
//!
//! This library synthesizes multi-dimensional Gaussian-random-field-like
//! samples (cosmological density fields, terrain, textured noise) whose
//! spectral power matches a caller-supplied power spectrum: raw random
//! modes are weighted by the square root of the spectrum at each mode's
//! frequency magnitude and inverse-transformed into a real-valued field.
//!
//! The Fourier transforms are delegated to a swappable
//! [`engine::backend::SpectralBackend`], and randomness comes from a
//! caller-supplied sampling function ([`samplers`] ships the common ones).

pub mod engine;
pub mod error;
pub mod samplers;
pub mod spectra;
pub mod synthesis;

// Re-export commonly used types
pub use engine::array::{Complex64, FieldArray};
pub use error::FieldError;
pub use synthesis::{generate_field, generate_field_with, FieldConfig};

pub mod prelude {
    //! Common imports for using the FieldGen library
    pub use crate::engine::array::{Complex64, FieldArray};
    pub use crate::engine::backend::{create_backend, default_backend, SpectralBackend};
    pub use crate::error::FieldError;
    pub use crate::synthesis::{generate_field, generate_field_with, FieldConfig};
}
