//! Fluent builder for constructing a [`Simulator`].

use dots_agent::DotKind;
use dots_core::{DotConf, DotParams, GridPos};
use tracing::info;

use crate::{SimError, SimResult, Simulator};

/// Fluent builder for [`Simulator`].
///
/// # Required inputs
///
/// - seed: every random draw of the run derives from it
/// - [`DotConf`]: validated dot parameters
/// - grid width and height
///
/// # Optional inputs (have defaults)
///
/// | Method                   | Default                |
/// |--------------------------|------------------------|
/// | `.initial_dots(n)`       | `0` random dots        |
/// | `.place(pos, kind)`      | no explicit placements |
/// | `.snapshot_interval(k)`  | `0` (no snapshots)     |
///
/// Explicit placements are inserted first, in call order, so they receive
/// the lowest ids.  Random dots follow.
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(7, DotConf::default(), 10, 10)
///     .place(GridPos::new(5, 5), DotKind::Alpha)
///     .place(GridPos::new(5, 5), DotKind::Beta)
///     .initial_dots(20)
///     .build()?;
/// sim.run(100, &mut NoopObserver);
/// ```
pub struct SimBuilder {
    seed:              u64,
    conf:              DotConf,
    width:             u32,
    height:            u32,
    initial_dots:      usize,
    placements:        Vec<(GridPos, DotKind)>,
    snapshot_interval: u64,
}

impl SimBuilder {
    /// Create a builder with all required inputs.
    pub fn new(seed: u64, conf: DotConf, width: u32, height: u32) -> Self {
        Self {
            seed,
            conf,
            width,
            height,
            initial_dots:      0,
            placements:        Vec::new(),
            snapshot_interval: 0,
        }
    }

    /// Like [`new`](Self::new) but validates raw parameters first.
    pub fn from_params(seed: u64, params: DotParams, width: u32, height: u32) -> SimResult<Self> {
        Ok(Self::new(seed, DotConf::new(params)?, width, height))
    }

    /// Number of dots of random kind scattered uniformly over the grid.
    pub fn initial_dots(mut self, n: usize) -> Self {
        self.initial_dots = n;
        self
    }

    /// Place one `Normal` dot of `kind` at `pos`.  `pos` must be in bounds.
    pub fn place(mut self, pos: GridPos, kind: DotKind) -> Self {
        self.placements.push((pos, kind));
        self
    }

    /// Call [`SimObserver::on_snapshot`][crate::SimObserver::on_snapshot]
    /// every `k` ticks.  Zero disables snapshots.
    pub fn snapshot_interval(mut self, k: u64) -> Self {
        self.snapshot_interval = k;
        self
    }

    /// Validate inputs, seed the population and return a ready-to-run
    /// [`Simulator`].
    pub fn build(self) -> SimResult<Simulator> {
        let mut sim = Simulator::new(self.seed, self.conf, self.width, self.height)?;

        // ── Validate explicit placements ──────────────────────────────────
        if let Some(&(pos, _)) = self.placements.iter().find(|(p, _)| !sim.grid().contains(*p)) {
            return Err(SimError::PlacementOutOfBounds {
                pos,
                width:  self.width,
                height: self.height,
            });
        }

        // ── Seed the population ───────────────────────────────────────────
        for (pos, kind) in self.placements {
            sim.add_dot(pos, kind);
        }
        for _ in 0..self.initial_dots {
            sim.add_random_dot();
        }
        sim.set_snapshot_interval(self.snapshot_interval);

        info!(
            seed = self.seed,
            width = self.width,
            height = self.height,
            dots = sim.dot_count(),
            "simulation ready"
        );
        Ok(sim)
    }
}
