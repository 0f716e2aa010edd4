//! The simulated entity.

use std::fmt;

use dots_core::{DotConf, DotId, GridPos, SimRng};

use crate::{Direction, DotKind, DotStatus, StatusCdf};

// ── Dot ───────────────────────────────────────────────────────────────────────

/// One dot: identity, position, age, kind, status, and progress state.
///
/// The partner link is a plain [`DotId`], never an owning reference.  The
/// simulator resolves it against the current tick's snapshot and clears it
/// once the partner is gone.
///
/// Methods that mutate position or status are no-ops on `Invalid` dots.
#[derive(Clone, Debug)]
pub struct Dot {
    id:      DotId,
    pos:     GridPos,
    age:     u64,
    kind:    DotKind,
    status:  DotStatus,
    counter: u32,
    partner: Option<DotId>,
    /// Transition odds for the current tick.  Rebuilt by `update_cdf`.
    cdf:     StatusCdf,
}

impl Default for Dot {
    /// A placeholder dot with `Invalid` status and `DotId::INVALID`.
    fn default() -> Self {
        Self {
            id:      DotId::INVALID,
            pos:     GridPos::default(),
            age:     0,
            kind:    DotKind::Alpha,
            status:  DotStatus::Invalid,
            counter: 0,
            partner: None,
            cdf:     StatusCdf::default(),
        }
    }
}

impl Dot {
    /// A newborn `Normal` dot.
    pub fn new(id: DotId, pos: GridPos, kind: DotKind) -> Self {
        Self {
            id,
            pos,
            kind,
            status: DotStatus::Normal,
            ..Self::default()
        }
    }

    #[inline]
    pub fn id(&self) -> DotId {
        self.id
    }

    #[inline]
    pub fn pos(&self) -> GridPos {
        self.pos
    }

    #[inline]
    pub fn age(&self) -> u64 {
        self.age
    }

    #[inline]
    pub fn kind(&self) -> DotKind {
        self.kind
    }

    #[inline]
    pub fn status(&self) -> DotStatus {
        self.status
    }

    /// Ticks spent in the current `Eating` or `Generating` spell, the current
    /// tick included.  The tick that starts the spell sets it to 1 and each
    /// later tick adds one before comparing with the configured duration, so
    /// a spell of `eat_time = 3` reads 1, 2 and then ends on the third tick.
    #[inline]
    pub fn counter(&self) -> u32 {
        self.counter
    }

    #[inline]
    pub fn partner(&self) -> Option<DotId> {
        self.partner
    }

    #[inline]
    pub fn cdf(&self) -> &StatusCdf {
        &self.cdf
    }

    pub fn set_status(&mut self, status: DotStatus) {
        if self.status != DotStatus::Invalid {
            self.status = status;
        }
    }

    /// Grow one tick older; returns the new age.
    pub fn inc_age(&mut self) -> u64 {
        self.age += 1;
        self.age
    }

    pub fn reset_counter(&mut self) {
        self.counter = 0;
    }

    pub fn inc_counter(&mut self) {
        self.counter += 1;
    }

    /// Reset the counter and count the current tick as the first one of a
    /// new sub-process.
    pub fn restart_counter(&mut self) {
        self.counter = 1;
    }

    pub fn set_partner(&mut self, partner: DotId) {
        self.partner = Some(partner);
    }

    pub fn clear_partner(&mut self) {
        self.partner = None;
    }

    /// Rebuild this tick's transition odds from status, age and local
    /// crowding.
    pub fn update_cdf(&mut self, density: f64, conf: &DotConf) {
        if self.status == DotStatus::Invalid {
            return;
        }
        self.cdf = StatusCdf::for_state(self.status, self.age, density, conf);
    }

    /// Draw and apply the next status from the current odds.
    pub fn roll_status(&mut self, rng: &mut SimRng) -> DotStatus {
        if self.status != DotStatus::Invalid {
            self.status = self.cdf.sample(rng);
        }
        self.status
    }

    /// Nudge one cell.  The caller wraps the result into grid bounds.
    pub fn step(&mut self, dir: Direction) {
        if self.status == DotStatus::Invalid {
            return;
        }
        let (dx, dy) = dir.delta();
        self.pos.x += dx;
        self.pos.y += dy;
    }

    pub fn set_pos(&mut self, pos: GridPos) {
        if self.status != DotStatus::Invalid {
            self.pos = pos;
        }
    }

    /// Read-only summary for snapshots and output.
    pub fn view(&self) -> DotView {
        DotView {
            id:     self.id,
            pos:    self.pos,
            kind:   self.kind,
            status: self.status,
            age:    self.age,
        }
    }
}

impl fmt::Display for Dot {
    /// Multi-line human-readable report.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Report of dot {}:", self.id)?;
        writeln!(f, "Age: {}", self.age)?;
        writeln!(f, "Type: {}", self.kind)?;
        writeln!(f, "Current status: {}", self.status)?;
        writeln!(f, "Count: {}", self.counter)?;
        if let Some(p) = self.partner {
            writeln!(f, "Partner: {p}")?;
        }
        write!(f, "----------------------")
    }
}

// ── DotView ───────────────────────────────────────────────────────────────────

/// The publicly observable state of one dot at one instant.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DotView {
    pub id:     DotId,
    pub pos:    GridPos,
    pub kind:   DotKind,
    pub status: DotStatus,
    pub age:    u64,
}
