//! Dot behaviour parameters.
//!
//! [`DotParams`] is the plain aggregate a caller fills in (from a settings
//! file, a test, a UI).  [`DotConf`] is the validated, immutable form the
//! simulator consumes: it owns the derived [`GaussTable`] so the table can
//! never drift out of sync with the parameters it was built from.

use crate::{DotsError, DotsResult, GaussTable};

/// Largest accepted `death_scale`.  The look-chance table holds one entry
/// per age up to the death scale, so this also caps its length.
pub const MAX_DEATH_SCALE: f64 = 1e7;

// ── DotParams ─────────────────────────────────────────────────────────────────

/// The eight tunable rates and durations of the dot life cycle.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DotParams {
    /// Per-tick chance that a `Normal` dot becomes `Hungry`.
    pub hunger_rate: f64,

    /// Numerator of the inverse-square crowding term.
    pub density_coeff: f64,

    /// Age at which the death hazard `(age / death_scale)²` reaches one.
    /// Also bounds the look-chance table.
    pub death_scale: f64,

    /// Age at which the chance to start looking for a mate peaks.
    pub look_mean: f64,

    /// Spread of the look-chance curve.
    pub look_variance: f64,

    /// Scale of the look-chance curve.
    pub look_coeff: f64,

    /// Ticks spent eating.
    pub eat_time: u32,

    /// Ticks a pair spends generating before an offspring appears.
    pub generation_time: u32,
}

impl Default for DotParams {
    fn default() -> Self {
        Self {
            hunger_rate:     0.05,
            density_coeff:   4.0,
            death_scale:     1000.0,
            look_mean:       150.0,
            look_variance:   16.0,
            look_coeff:      1.0,
            eat_time:        3,
            generation_time: 4,
        }
    }
}

impl DotParams {
    /// Check every parameter against its admissible range.
    pub fn validate(&self) -> DotsResult<()> {
        fn bad(msg: String) -> DotsResult<()> {
            Err(DotsError::Config(msg))
        }

        if !(0.0..=1.0).contains(&self.hunger_rate) {
            return bad(format!("hunger_rate must be in [0, 1], got {}", self.hunger_rate));
        }
        if !self.density_coeff.is_finite() || self.density_coeff < 0.0 {
            return bad(format!("density_coeff must be finite and >= 0, got {}", self.density_coeff));
        }
        if !self.death_scale.is_finite() || self.death_scale <= 0.0 {
            return bad(format!("death_scale must be finite and > 0, got {}", self.death_scale));
        }
        if self.death_scale > MAX_DEATH_SCALE {
            return bad(format!(
                "death_scale must be at most {MAX_DEATH_SCALE}, got {}",
                self.death_scale
            ));
        }
        if !self.look_mean.is_finite() {
            return bad(format!("look_mean must be finite, got {}", self.look_mean));
        }
        if !self.look_variance.is_finite() || self.look_variance <= 0.0 {
            return bad(format!("look_variance must be finite and > 0, got {}", self.look_variance));
        }
        if !self.look_coeff.is_finite() || self.look_coeff < 0.0 {
            return bad(format!("look_coeff must be finite and >= 0, got {}", self.look_coeff));
        }
        if self.eat_time == 0 {
            return bad("eat_time must be at least 1".into());
        }
        if self.generation_time == 0 {
            return bad("generation_time must be at least 1".into());
        }
        Ok(())
    }
}

// ── DotConf ───────────────────────────────────────────────────────────────────

/// Validated parameters plus the derived look-chance table.
#[derive(Clone, Debug)]
pub struct DotConf {
    params:     DotParams,
    look_table: GaussTable,
}

impl DotConf {
    /// Validate `params` and build the look-chance table.
    ///
    /// The table spans ages `0..=floor(death_scale)`; beyond that the hazard
    /// term alone decides a dot's fate.
    pub fn new(params: DotParams) -> DotsResult<Self> {
        params.validate()?;
        Ok(Self::build(params))
    }

    fn build(params: DotParams) -> Self {
        let look_table = GaussTable::new(
            (params.death_scale.min(MAX_DEATH_SCALE) as usize).saturating_add(1),
            params.look_mean,
            params.look_variance,
            params.look_coeff,
        );
        Self { params, look_table }
    }

    /// Replace the look-chance curve, rebuilding the table.
    pub fn with_look_params(self, mean: f64, variance: f64, coeff: f64) -> DotsResult<Self> {
        Self::new(DotParams {
            look_mean:     mean,
            look_variance: variance,
            look_coeff:    coeff,
            ..self.params
        })
    }

    #[inline]
    pub fn params(&self) -> &DotParams {
        &self.params
    }

    #[inline]
    pub fn hunger_rate(&self) -> f64 {
        self.params.hunger_rate
    }

    #[inline]
    pub fn density_coeff(&self) -> f64 {
        self.params.density_coeff
    }

    #[inline]
    pub fn death_scale(&self) -> f64 {
        self.params.death_scale
    }

    #[inline]
    pub fn eat_time(&self) -> u32 {
        self.params.eat_time
    }

    #[inline]
    pub fn generation_time(&self) -> u32 {
        self.params.generation_time
    }

    /// Chance to start looking for a mate at `age`.
    #[inline]
    pub fn look_chance(&self, age: u64) -> f64 {
        self.look_table.get(age)
    }

    #[inline]
    pub fn look_table(&self) -> &GaussTable {
        &self.look_table
    }
}

impl Default for DotConf {
    fn default() -> Self {
        Self::build(DotParams::default())
    }
}
