//! Spectral synthesis: frequency grids and the field generator

pub mod generator;
pub mod grid;

pub use generator::{generate_field, generate_field_with, FieldConfig};
pub use grid::{frequency_grid, frequency_magnitude};
