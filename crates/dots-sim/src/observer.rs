//! Simulation observer trait for progress reporting and data collection.

use dots_agent::DotView;
use dots_core::Tick;

use crate::{SimStats, TickSummary};

/// Callbacks invoked by [`Simulator::run`][crate::Simulator::run] and
/// [`Simulator::run_ticks`][crate::Simulator::run_ticks].
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, summary: &TickSummary) {
///         if summary.tick.is_on_interval(self.interval) {
///             println!("{}: {} alive", summary.tick, summary.living);
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called once the tick has been fully applied.
    fn on_tick_end(&mut self, _summary: &TickSummary) {}

    /// Called at snapshot intervals with every living dot, ascending by id.
    ///
    /// `tick` is the tick just processed and `dots` is the population at its
    /// end, so ages already include that tick: a dot added before tick 0 is
    /// reported with age 1 at tick 0.
    fn on_snapshot(&mut self, _tick: Tick, _dots: &[DotView]) {}

    /// Called once after the final tick of [`Simulator::run`][crate::Simulator::run].
    fn on_sim_end(&mut self, _final_tick: Tick, _stats: &SimStats) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
