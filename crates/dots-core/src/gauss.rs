//! Precomputed Gaussian-shaped mass table.
//!
//! ```text
//! pdf[i] = coeff / sqrt(2π·var) · exp(-½·(i - mean)² / var)     for i in 0..size
//! ```
//!
//! Used to look up the age-dependent chance that a dot starts looking for a
//! mate.  Indices outside the table map to zero.

use std::f64::consts::PI;

/// Immutable lookup table of a scaled normal density sampled at integers.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GaussTable {
    pdf: Vec<f64>,
}

impl GaussTable {
    /// Build a table of `size` entries.
    ///
    /// `variance` must be positive; the configuration layer validates this
    /// before a table is ever built.
    pub fn new(size: usize, mean: f64, variance: f64, coeff: f64) -> Self {
        let k = coeff / (2.0 * PI * variance).sqrt();
        let pdf = (0..size)
            .map(|i| {
                let x = i as f64 - mean;
                k * (-0.5 * x * x / variance).exp()
            })
            .collect();
        Self { pdf }
    }

    /// Mass at index `i`, or `0.0` when `i` is out of range.
    #[inline]
    pub fn get(&self, i: u64) -> f64 {
        usize::try_from(i)
            .ok()
            .and_then(|i| self.pdf.get(i))
            .copied()
            .unwrap_or(0.0)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pdf.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pdf.is_empty()
    }
}
