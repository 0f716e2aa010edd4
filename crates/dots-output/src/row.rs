//! Plain data row types written by output backends.

use dots_agent::{DotKind, DotStatus, DotView};
use dots_core::Tick;
use dots_sim::TickSummary;

/// One dot's observable state at the end of `tick`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DotSnapshotRow {
    pub dot_id: u32,
    pub tick:   u64,
    pub x:      i32,
    pub y:      i32,
    pub kind:   DotKind,
    pub status: DotStatus,
    pub age:    u64,
}

impl DotSnapshotRow {
    pub fn from_view(tick: Tick, view: &DotView) -> Self {
        Self {
            dot_id: view.id.0,
            tick:   tick.0,
            x:      view.pos.x,
            y:      view.pos.y,
            kind:   view.kind,
            status: view.status,
            age:    view.age,
        }
    }
}

/// Population statistics at the end of one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickSummaryRow {
    pub tick:              u64,
    pub living:            u64,
    pub births:            u64,
    pub deaths:            u64,
    pub total_deaths:      u64,
    pub average_death_age: f64,
    pub max_age:           u64,
    pub max_population:    u64,
}

impl From<&TickSummary> for TickSummaryRow {
    fn from(s: &TickSummary) -> Self {
        Self {
            tick:              s.tick.0,
            living:            s.living as u64,
            births:            s.births as u64,
            deaths:            s.deaths as u64,
            total_deaths:      s.total_deaths,
            average_death_age: s.average_death_age,
            max_age:           s.max_age,
            max_population:    s.max_population as u64,
        }
    }
}
