//! Core array type for spectral synthesis
//!
//! This module provides the fundamental array type used throughout the
//! library. It wraps ndarray's dynamic-dimensional arrays so fields of any
//! rank share one concrete type.

use ndarray::{ArrayD, IxDyn};
use num_complex::Complex;
use num_traits::Zero;
use std::ops::{Add, Mul, Sub};

/// Type alias for Complex64
pub type Complex64 = Complex<f64>;

/// The main array type for synthesized fields
#[derive(Debug, Clone, PartialEq)]
pub struct FieldArray<T = Complex64> {
    /// The underlying ndarray
    pub data: ArrayD<T>,
}

impl<T> FieldArray<T>
where
    T: Clone + Zero,
{
    /// Create a new array with zeros
    pub fn zeros(shape: &[usize]) -> Self {
        Self {
            data: ArrayD::zeros(IxDyn(shape)),
        }
    }

    /// Create a new array from a scalar value
    pub fn from_scalar(shape: &[usize], value: T) -> Self {
        Self {
            data: ArrayD::from_elem(IxDyn(shape), value),
        }
    }

    /// Get the shape of the array
    pub fn shape(&self) -> &[usize] {
        self.data.shape()
    }

    /// Get the number of dimensions
    pub fn ndim(&self) -> usize {
        self.data.ndim()
    }

    /// Get the total number of elements
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the array is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl FieldArray<Complex64> {
    /// Create a new complex array from real data
    pub fn from_real(real_data: ArrayD<f64>) -> Self {
        Self {
            data: real_data.mapv(|val| Complex::new(val, 0.0)),
        }
    }

    /// Extract the real parts, discarding the imaginary residue
    pub fn re(&self) -> ArrayD<f64> {
        self.data.mapv(|c| c.re)
    }

    /// Extract the imaginary parts
    pub fn im(&self) -> ArrayD<f64> {
        self.data.mapv(|c| c.im)
    }

    /// Compute the norm squared of the array
    pub fn norm_squared(&self) -> f64 {
        self.data.iter().map(|c| c.norm_sqr()).sum()
    }
}

// Implement basic arithmetic operations
impl Add for FieldArray<Complex64> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            data: &self.data + &other.data,
        }
    }
}

impl Sub for FieldArray<Complex64> {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            data: &self.data - &other.data,
        }
    }
}

impl Mul<Complex64> for FieldArray<Complex64> {
    type Output = Self;

    fn mul(self, scalar: Complex64) -> Self {
        Self {
            data: &self.data * scalar,
        }
    }
}
