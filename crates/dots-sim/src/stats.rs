//! Run statistics.

use dots_core::Tick;

/// Cumulative statistics over a whole run.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct SimStats {
    /// Sum of the ages of every dot that died.
    pub death_age_total: u64,
    pub deaths:          u64,
    pub births:          u64,
    /// Oldest age reached by a dot that was alive at the time.
    pub max_age:         u64,
    /// Largest living population seen at the end of a tick.
    pub max_population:  usize,
}

impl SimStats {
    /// Mean age at death, `0.0` before the first death.
    pub fn average_death_age(&self) -> f64 {
        if self.deaths == 0 {
            0.0
        } else {
            self.death_age_total as f64 / self.deaths as f64
        }
    }

    pub(crate) fn record_death(&mut self, age: u64) {
        self.death_age_total += age;
        self.deaths += 1;
    }

    pub(crate) fn observe_age(&mut self, age: u64) {
        self.max_age = self.max_age.max(age);
    }

    pub(crate) fn observe_population(&mut self, living: usize) {
        self.max_population = self.max_population.max(living);
    }
}

/// What happened during one call to [`Simulator::step`][crate::Simulator::step].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TickSummary {
    /// The tick that was processed.
    pub tick:              Tick,
    /// Dots alive at the end of the tick, newborns included.
    pub living:            usize,
    pub births:            usize,
    /// Dots that died this tick.  They are reaped at the start of the next.
    pub deaths:            usize,
    pub total_deaths:      u64,
    pub average_death_age: f64,
    pub max_age:           u64,
    pub max_population:    usize,
}
