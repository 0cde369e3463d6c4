//! Generate a 2-D random field with a power-law spectrum and print
//! summary statistics.
//!
//! Run with: cargo run --example generate_2d

use fieldgen::prelude::*;
use fieldgen::{samplers, spectra};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> Result<(), FieldError> {
    let shape = [512, 512];
    let rng = StdRng::seed_from_u64(0xF1E1D);

    let field = generate_field(
        samplers::gaussian(rng, 1.0),
        spectra::power_law(2.0),
        &shape,
    )?;

    let mean = field.mean().unwrap_or(0.0);
    let variance = field.mapv(|v| (v - mean).powi(2)).mean().unwrap_or(0.0);
    let min = field.iter().copied().fold(f64::INFINITY, f64::min);
    let max = field.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    println!("Generated {}x{} field with P(k) = k^-2", shape[0], shape[1]);
    println!("  mean:     {:+.6e}", mean);
    println!("  variance: {:.6e}", variance);
    println!("  min/max:  {:+.6e} / {:+.6e}", min, max);

    Ok(())
}
