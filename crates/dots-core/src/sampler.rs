//! Discrete sampling from a probability mass vector.
//!
//! Every stochastic decision in the simulator is one draw from a small CDF:
//! a dot's next status, the direction of a random step.  Building the CDF
//! and inverting it are pure functions here; the variate itself comes from
//! [`SimRng`](crate::SimRng) so the whole run hangs off a single seed.

/// Tolerance used when checking that a mass vector sums to one.
pub const MASS_EPSILON: f64 = 1e-9;

/// Running prefix sum of `pdf`.
///
/// Callers are expected to pass a normalised mass vector; the final entry is
/// checked against `1.0` in debug builds only.
pub fn pdf_to_cdf<const N: usize>(pdf: &[f64; N]) -> [f64; N] {
    let mut cdf = [0.0; N];
    let mut acc = 0.0;
    for (c, p) in cdf.iter_mut().zip(pdf) {
        acc += p;
        *c = acc;
    }
    debug_assert!(
        N == 0 || (cdf[N - 1] - 1.0).abs() < MASS_EPSILON,
        "probability mass sums to {acc}, expected 1"
    );
    cdf
}

/// Invert a CDF at `u`: the smallest index whose cumulative mass is `>= u`.
///
/// `u` is expected in `(0, 1]`.  If no entry reaches `u` (mass short of one,
/// or `NaN` entries) the last index that carries mass is returned, and the
/// last index overall if none does.  Never reads out of bounds.
///
/// # Panics
/// Panics if `cdf` is empty.
pub fn sample_index(cdf: &[f64], u: f64) -> usize {
    assert!(!cdf.is_empty(), "cannot sample from an empty distribution");
    if let Some(i) = cdf.iter().position(|&c| c >= u) {
        return i;
    }
    last_with_mass(cdf)
}

fn last_with_mass(cdf: &[f64]) -> usize {
    let mut prev = 0.0;
    let mut last = None;
    for (i, &c) in cdf.iter().enumerate() {
        if c > prev {
            last = Some(i);
        }
        if c.is_finite() {
            prev = c;
        }
    }
    last.unwrap_or(cdf.len() - 1)
}
