//! Per-tick transition distributions.
//!
//! # Mass policy
//!
//! The death hazard `(age / death_scale)²` is quadratic and unbounded, so
//! left alone the remaining-mass subtractions below go negative past
//! `death_scale`.  Every term is therefore clamped into the mass still
//! available when it is computed:
//!
//! ```text
//! hazard    = min((age / death_scale)², 1)
//! alive     = 1 - hazard
//! Normal:   hungry  = alive · hunger_rate                 ∈ [0, alive]
//!           looking = (alive - hungry) · look_chance(age) ∈ [0, alive - hungry]
//!           normal  = remainder
//! Hungry:   eating  = alive / (density + 1)               ∈ [0, alive]
//!           hungry  = remainder
//! Looking:  looking = alive
//! Eating:   eating  = alive
//! Generating: generating = alive
//! ```
//!
//! The remainder absorbs rounding, and [`StatusCdf`] snaps every entry from
//! the last state with mass onwards to exactly `1.0`.

use dots_core::{DotConf, SimRng, pdf_to_cdf};

use crate::DotStatus;

/// Number of sampled statuses (`DotStatus::SLOTS.len()`).
pub const STATUS_SLOTS: usize = 6;

const NORMAL: usize = 0;
const DEAD: usize = 1;
const HUNGRY: usize = 2;
const LOOKING: usize = 3;
const EATING: usize = 4;
const GENERATING: usize = 5;

/// Chance of dying this tick at `age`, clamped to `[0, 1]`.
#[inline]
pub fn death_hazard(age: u64, death_scale: f64) -> f64 {
    let r = age as f64 / death_scale;
    (r * r).clamp(0.0, 1.0)
}

/// `mass · frac`, kept inside `[0, mass]`.  `NaN` collapses to zero.
#[inline]
fn share(mass: f64, frac: f64) -> f64 {
    let v = mass * frac;
    if v.is_nan() { 0.0 } else { v.clamp(0.0, mass) }
}

/// Probability mass over the next status, in [`DotStatus::SLOTS`] order.
///
/// `density` is the local crowding around the dot; only `Hungry` dots use
/// it.  `Dead` and `Invalid` put all mass on `Dead`.
pub fn transition_pdf(status: DotStatus, age: u64, density: f64, conf: &DotConf) -> [f64; STATUS_SLOTS] {
    let mut pdf = [0.0; STATUS_SLOTS];
    let hazard = death_hazard(age, conf.death_scale());
    let alive = 1.0 - hazard;
    pdf[DEAD] = hazard;

    match status {
        DotStatus::Normal => {
            let hungry = share(alive, conf.hunger_rate());
            let looking = share(alive - hungry, conf.look_chance(age));
            pdf[HUNGRY] = hungry;
            pdf[LOOKING] = looking;
            pdf[NORMAL] = (alive - hungry - looking).max(0.0);
        }
        DotStatus::Hungry => {
            let eating = share(alive, 1.0 / (density + 1.0));
            pdf[EATING] = eating;
            pdf[HUNGRY] = (alive - eating).max(0.0);
        }
        // Leaving these three is procedural, not sampled.
        DotStatus::Looking    => pdf[LOOKING] = alive,
        DotStatus::Eating     => pdf[EATING] = alive,
        DotStatus::Generating => pdf[GENERATING] = alive,
        DotStatus::Dead | DotStatus::Invalid => {
            pdf = [0.0; STATUS_SLOTS];
            pdf[DEAD] = 1.0;
        }
    }
    pdf
}

// ── StatusCdf ─────────────────────────────────────────────────────────────────

/// Cumulative transition distribution over the six sampled statuses.
///
/// Entries are non-decreasing and the final entry is exactly `1.0`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct StatusCdf([f64; STATUS_SLOTS]);

impl StatusCdf {
    /// Accumulate `pdf` and pin the tail to one.
    pub fn from_pdf(pdf: &[f64; STATUS_SLOTS]) -> Self {
        let mut cdf = pdf_to_cdf(pdf);
        let tail = pdf.iter().rposition(|&p| p > 0.0).unwrap_or(STATUS_SLOTS - 1);
        for c in &mut cdf[tail..] {
            *c = 1.0;
        }
        StatusCdf(cdf)
    }

    /// Build the distribution for a dot in `status` at `age`.
    pub fn for_state(status: DotStatus, age: u64, density: f64, conf: &DotConf) -> Self {
        Self::from_pdf(&transition_pdf(status, age, density, conf))
    }

    /// Draw the next status.
    pub fn sample(&self, rng: &mut SimRng) -> DotStatus {
        DotStatus::from_slot(rng.sample(&self.0)).unwrap_or(DotStatus::Dead)
    }

    /// Cumulative mass up to and including `status`; `0.0` for `Invalid`.
    pub fn cumulative(&self, status: DotStatus) -> f64 {
        status.slot().map_or(0.0, |i| self.0[i])
    }

    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
}

impl Default for StatusCdf {
    /// Certain to stay `Normal`.
    fn default() -> Self {
        StatusCdf([1.0; STATUS_SLOTS])
    }
}
