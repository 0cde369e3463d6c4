//! Error types for field generation.

use thiserror::Error;

/// Errors reported by the synthesis entry points.
///
/// Every variant is raised synchronously, before any transform work. A
/// power spectrum that returns negative or non-finite values is a caller
/// contract violation and is not trapped here; it propagates as NaN
/// contamination of the output field.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FieldError {
    /// The requested shape had no dimensions.
    #[error("field shape must have at least one dimension")]
    EmptyShape,

    /// The requested shape contained a zero extent.
    #[error("field shape {0:?} has a zero extent")]
    ZeroExtent(Vec<usize>),

    /// The unit length was not a positive finite number.
    #[error("unit length must be positive and finite, got {0}")]
    InvalidUnitLength(f64),

    /// The sampler returned an array whose shape does not match the
    /// requested one.
    #[error("sampler returned shape {got:?}, expected {expected:?}")]
    SamplerShape {
        expected: Vec<usize>,
        got: Vec<usize>,
    },
}
