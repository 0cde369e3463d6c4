//! Convenience power spectra
//!
//! Factories returning closures usable as the `power_spectrum` argument of
//! the synthesis entry points.

/// Power-law spectrum `P(k) = k^-n`
///
/// Diverges at `k = 0` for positive `n`; the generator never evaluates a
/// spectrum there, so this is safe to use as-is.
pub fn power_law(n: f64) -> impl Fn(f64) -> f64 {
    move |k| k.powf(-n)
}

/// Flat spectrum with constant power (white noise)
pub fn flat(amplitude: f64) -> impl Fn(f64) -> f64 {
    move |_| amplitude
}
