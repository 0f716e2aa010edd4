//! The `Simulator` struct and its tick loop.

use std::collections::BTreeMap;

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::{debug, trace};

use dots_agent::{Direction, Dot, DotKind, DotStatus, DotView};
use dots_core::{DotConf, DotId, Grid, GridPos, SimRng, Tick};

use crate::spatial::{self, Snapshot};
use crate::{SimError, SimObserver, SimResult, SimStats, TickSummary};

// ── Per-tick context ──────────────────────────────────────────────────────────

/// Read-only inputs shared by every dot update within one tick.
struct TickContext<'a> {
    tick:     Tick,
    snapshot: &'a Snapshot,
    grid:     &'a Grid,
    conf:     &'a DotConf,
}

/// An offspring decided during the update phase, inserted after it.
struct PendingBirth {
    parent: DotId,
    pos:    GridPos,
    kind:   DotKind,
}

/// Mutable bookkeeping shared by every dot update within one tick.
#[derive(Default)]
struct TickState {
    /// Ids that already produced (or whose partner produced) an offspring.
    spawned: FxHashSet<DotId>,
    /// Pairs formed this tick, recorded in both directions.
    pairs:   FxHashMap<DotId, DotId>,
    /// Dots that died this tick.
    died:    FxHashSet<DotId>,
    births:  Vec<PendingBirth>,
}

impl TickState {
    /// Can `id` still be picked as a mate this tick?
    fn is_free(&self, id: DotId) -> bool {
        !self.pairs.contains_key(&id) && !self.died.contains(&id)
    }

    fn record_pair(&mut self, a: DotId, b: DotId) {
        self.pairs.insert(a, b);
        self.pairs.insert(b, a);
    }
}

enum Outcome {
    Died,
    /// Lived; `Some(mate)` when this dot paired with a mate this tick.
    Lived(Option<DotId>),
}

// ── Simulator ─────────────────────────────────────────────────────────────────

/// The simulation engine.
///
/// Owns the whole population, the single seeded RNG, and the run statistics.
/// Create with [`Simulator::new`] or [`SimBuilder`][crate::SimBuilder].
pub struct Simulator {
    conf:              DotConf,
    grid:              Grid,
    rng:               SimRng,
    seed:              u64,
    /// Population keyed by id.  Ascending iteration is the update order.
    dots:              BTreeMap<DotId, Dot>,
    next_id:           DotId,
    tick:              Tick,
    stats:             SimStats,
    /// Ticks between `on_snapshot` observer calls; zero disables them.
    snapshot_interval: u64,
}

impl Simulator {
    /// An empty world of `width × height` cells.
    pub fn new(seed: u64, conf: DotConf, width: u32, height: u32) -> SimResult<Self> {
        let grid = Grid::new(width, height).map_err(|_| SimError::InvalidGrid { width, height })?;
        debug!(seed, width, height, "simulator created");
        Ok(Self {
            conf,
            grid,
            rng: SimRng::new(seed),
            seed,
            dots: BTreeMap::new(),
            next_id: DotId(0),
            tick: Tick::ZERO,
            stats: SimStats::default(),
            snapshot_interval: 0,
        })
    }

    pub(crate) fn set_snapshot_interval(&mut self, interval: u64) {
        self.snapshot_interval = interval;
    }

    // ── Population ────────────────────────────────────────────────────────

    /// Add a `Normal` dot of `kind` at `pos` (wrapped into the grid).
    pub fn add_dot(&mut self, pos: GridPos, kind: DotKind) -> DotId {
        let id = self.next_id;
        self.next_id = id.next();
        self.dots.insert(id, Dot::new(id, self.grid.wrap(pos), kind));
        id
    }

    /// Add a dot of uniformly random kind at `pos`.
    pub fn add_random_dot_at(&mut self, pos: GridPos) -> DotId {
        let kind = random_kind(&mut self.rng);
        self.add_dot(pos, kind)
    }

    /// Add a dot of uniformly random kind at a uniformly random cell.
    pub fn add_random_dot(&mut self) -> DotId {
        let x = self.rng.gen_range(0..self.grid.width() as i32);
        let y = self.rng.gen_range(0..self.grid.height() as i32);
        self.add_random_dot_at(GridPos::new(x, y))
    }

    // ── Queries ───────────────────────────────────────────────────────────

    #[inline]
    pub fn width(&self) -> u32 {
        self.grid.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.grid.height()
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn config(&self) -> &DotConf {
        &self.conf
    }

    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Number of ticks processed so far.
    #[inline]
    pub fn tick(&self) -> Tick {
        self.tick
    }

    /// Dots currently tracked, including those that died this tick and are
    /// reaped on the next.
    #[inline]
    pub fn dot_count(&self) -> usize {
        self.dots.len()
    }

    pub fn living_count(&self) -> usize {
        self.dots.values().filter(|d| d.status().is_alive()).count()
    }

    /// No dots left to simulate.
    pub fn is_extinct(&self) -> bool {
        self.living_count() == 0
    }

    /// Every living dot, ascending by id.
    pub fn snapshot(&self) -> Vec<DotView> {
        self.dots
            .values()
            .filter(|d| d.status().is_alive())
            .map(Dot::view)
            .collect()
    }

    /// Every tracked dot, dead-but-not-yet-reaped included, ascending by id.
    pub fn dots(&self) -> impl Iterator<Item = &Dot> {
        self.dots.values()
    }

    pub fn get(&self, id: DotId) -> Option<&Dot> {
        self.dots.get(&id)
    }

    #[cfg(test)]
    pub(crate) fn dot_mut(&mut self, id: DotId) -> Option<&mut Dot> {
        self.dots.get_mut(&id)
    }

    #[inline]
    pub fn stats(&self) -> &SimStats {
        &self.stats
    }

    #[inline]
    pub fn deaths(&self) -> u64 {
        self.stats.deaths
    }

    /// Mean age at death; `0.0` when nobody has died yet.
    #[inline]
    pub fn average_death_age(&self) -> f64 {
        self.stats.average_death_age()
    }

    #[inline]
    pub fn max_age(&self) -> u64 {
        self.stats.max_age
    }

    #[inline]
    pub fn max_population(&self) -> usize {
        self.stats.max_population
    }

    // ── Driving ───────────────────────────────────────────────────────────

    /// Run `n` ticks and then notify `on_sim_end`.
    pub fn run<O: SimObserver>(&mut self, n: u64, observer: &mut O) {
        self.run_ticks(n, observer);
        observer.on_sim_end(self.tick, &self.stats);
    }

    /// Run exactly `n` ticks, calling the per-tick observer hooks.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            let now = self.tick;
            observer.on_tick_start(now);
            let summary = self.step();
            observer.on_tick_end(&summary);
            if now.is_on_interval(self.snapshot_interval) {
                observer.on_snapshot(now, &self.snapshot());
            }
        }
    }

    /// Advance exactly one tick.
    pub fn step(&mut self) -> TickSummary {
        let now = self.tick;

        // ── Phase 1: reap dots that died last tick ────────────────────────
        self.dots.retain(|_, d| d.status() != DotStatus::Dead);

        // ── Phase 2: snapshot ─────────────────────────────────────────────
        let snapshot = Snapshot::capture(self.dots.values());
        let densities = densities(&snapshot, &self.grid, self.conf.density_coeff());

        // ── Phase 3: update each dot against the snapshot ─────────────────
        //
        // Explicit field borrows so the borrow checker sees disjoint access.
        let ctx = TickContext {
            tick:     now,
            snapshot: &snapshot,
            grid:     &self.grid,
            conf:     &self.conf,
        };
        let dots = &mut self.dots;
        let rng = &mut self.rng;
        let stats = &mut self.stats;

        let mut state = TickState::default();
        let mut deaths = 0;

        for (prior, &density) in snapshot.iter().zip(&densities) {
            let Some(dot) = dots.get_mut(&prior.id()) else {
                continue;
            };
            let id = dot.id();
            let mate = match update_dot(dot, density, &ctx, rng, &mut state) {
                Outcome::Died => {
                    stats.record_death(dot.age());
                    state.died.insert(id);
                    deaths += 1;
                    debug!(tick = now.0, dot = id.0, age = dot.age(), "dot died");
                    None
                }
                Outcome::Lived(mate) => {
                    stats.observe_age(dot.age());
                    mate
                }
            };

            // A mate earlier in the update order has already had its turn:
            // pull it into the pair now, back on the cell where they met.
            if let Some(mate) = mate.filter(|&m| m < id) {
                if let (Some(live), Some(seen)) = (dots.get_mut(&mate), snapshot.get(mate)) {
                    join_pair(live, id);
                    live.set_pos(seen.pos());
                }
            }
        }
        let births = state.births;

        // ── Phase 4: offspring join the population ────────────────────────
        let birth_count = births.len();
        for birth in births {
            let id = self.add_dot(birth.pos, birth.kind);
            debug!(tick = now.0, dot = id.0, parent = birth.parent.0, kind = %birth.kind, "dot born");
        }
        self.stats.births += birth_count as u64;

        // ── Phase 5: statistics ───────────────────────────────────────────
        let living = self.living_count();
        self.stats.observe_population(living);
        self.tick = now.offset(1);
        trace!(tick = now.0, living, births = birth_count, deaths, "tick complete");

        TickSummary {
            tick:              now,
            living,
            births:            birth_count,
            deaths,
            total_deaths:      self.stats.deaths,
            average_death_age: self.stats.average_death_age(),
            max_age:           self.stats.max_age,
            max_population:    self.stats.max_population,
        }
    }
}

// ── Per-dot update ────────────────────────────────────────────────────────────

/// Apply one tick to `dot`.  Reads other dots only through `ctx.snapshot`.
fn update_dot(
    dot:     &mut Dot,
    density: f64,
    ctx:     &TickContext<'_>,
    rng:     &mut SimRng,
    state:   &mut TickState,
) -> Outcome {
    // 0. Claimed by a mate earlier this tick: the pairing overrides the roll.
    if let Some(&claimer) = state.pairs.get(&dot.id()) {
        join_pair(dot, claimer);
        dot.inc_age();
        return Outcome::Lived(None);
    }

    let mut walk = true;
    let mut paired = None;

    // 1. A partner that is gone or dead dissolves the pair.
    if let Some(pid) = dot.partner() {
        let gone = ctx.snapshot.get(pid).is_none_or(|p| !p.status().is_alive());
        if gone {
            dot.clear_partner();
            dot.reset_counter();
            dot.set_status(DotStatus::Normal);
        }
    }

    // 2. Roll the next status.
    let prev = dot.status();
    dot.update_cdf(density, ctx.conf);
    let status = dot.roll_status(rng);

    let started_eating = status == DotStatus::Eating && prev != DotStatus::Eating;
    if started_eating {
        dot.restart_counter();
    }

    if status == DotStatus::Dead {
        dot.reset_counter();
        dot.clear_partner();
        return Outcome::Died;
    }

    // 3. Eating: the counter holds ticks spent eating, this one included.
    if status == DotStatus::Eating {
        if !started_eating {
            dot.inc_counter();
        }
        if dot.counter() >= ctx.conf.eat_time() {
            dot.set_status(DotStatus::Normal);
            dot.reset_counter();
        } else {
            walk = false;
        }
    }

    // 4. Generating: the pairing tick counted as one.
    if dot.status() == DotStatus::Generating {
        dot.inc_counter();
        if dot.counter() >= ctx.conf.generation_time() {
            let partner = dot.partner();
            dot.set_status(DotStatus::Normal);
            dot.reset_counter();
            dot.clear_partner();

            // One offspring per pair: whichever partner completes first spawns.
            let already = state.spawned.contains(&dot.id())
                || partner.is_some_and(|p| state.spawned.contains(&p));
            if !already {
                state.births.push(PendingBirth {
                    parent: dot.id(),
                    pos:    dot.pos(),
                    kind:   random_kind(rng),
                });
            }
            state.spawned.insert(dot.id());
            state.spawned.extend(partner);
        } else {
            walk = false;
        }
    }

    // 5. Mate search and pairing.
    let mut target = None;
    if dot.status().is_available() {
        let free = |id: DotId| state.is_free(id);
        match spatial::nearest_mate_where(dot, ctx.snapshot, ctx.grid, free) {
            None => {
                if dot.status() == DotStatus::Looking {
                    dot.set_status(DotStatus::Normal);
                    dot.reset_counter();
                }
            }
            Some((mate, d2)) => {
                let courting = dot.status() == DotStatus::Looking || mate.status() == DotStatus::Looking;
                if d2 == 0 && courting {
                    join_pair(dot, mate.id());
                    paired = Some(mate.id());
                    walk = false;
                    debug!(tick = ctx.tick.0, dot = dot.id().0, partner = mate.id().0, "pair formed");
                }

                // An adjacent looking mate closes in; hold one axis so the
                // two do not keep swapping cells.
                if d2 < 2 && mate.status() == DotStatus::Looking {
                    let aligned = match dot.kind() {
                        DotKind::Alpha => dot.pos().x == mate.pos().x,
                        DotKind::Beta  => dot.pos().y == mate.pos().y,
                    };
                    if aligned {
                        walk = false;
                    }
                }
                target = Some(mate.pos());
            }
        }
    }

    // 6. Move.
    if walk {
        if dot.status() == DotStatus::Looking {
            match target {
                Some(to) => {
                    if let Some(dir) = spatial::approach(ctx.grid, dot.pos(), to, dot.kind()) {
                        step_wrapped(dot, dir, ctx.grid);
                    }
                }
                None => {
                    dot.set_status(DotStatus::Normal);
                    dot.reset_counter();
                    random_walk(dot, rng, ctx.grid);
                }
            }
        } else {
            random_walk(dot, rng, ctx.grid);
        }
    }

    // 7. Age.
    dot.inc_age();

    if let Some(mate) = paired {
        state.record_pair(dot.id(), mate);
    }
    Outcome::Lived(paired)
}

/// Put `dot` into a fresh pair with `partner`: `Generating`, counter at one.
fn join_pair(dot: &mut Dot, partner: DotId) {
    dot.set_status(DotStatus::Generating);
    dot.restart_counter();
    dot.set_partner(partner);
}

fn step_wrapped(dot: &mut Dot, dir: Direction, grid: &Grid) {
    dot.step(dir);
    dot.set_pos(grid.wrap(dot.pos()));
}

fn random_walk(dot: &mut Dot, rng: &mut SimRng, grid: &Grid) {
    let dir = Direction::from_index(rng.sample(&Direction::UNIFORM_CDF)).unwrap_or(Direction::Right);
    step_wrapped(dot, dir, grid);
}

fn random_kind(rng: &mut SimRng) -> DotKind {
    if rng.coin() { DotKind::Beta } else { DotKind::Alpha }
}

/// Local density of every dot in the snapshot, in snapshot order.
fn densities(snapshot: &Snapshot, grid: &Grid, coeff: f64) -> Vec<f64> {
    #[cfg(not(feature = "parallel"))]
    {
        snapshot
            .iter()
            .map(|d| spatial::local_density(d, snapshot, grid, coeff))
            .collect()
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        snapshot
            .as_slice()
            .par_iter()
            .map(|d| spatial::local_density(d, snapshot, grid, coeff))
            .collect()
    }
}
