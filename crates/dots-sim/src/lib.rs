//! `dots-sim`: the tick engine of the dots simulator.
//!
//! # Tick protocol
//!
//! ```text
//! step():
//!   ① Reap      : remove dots that died last tick.
//!   ② Snapshot  : value copy of the population; every lookup this tick
//!                 reads the snapshot, never the live map.
//!   ③ Densities : inverse-square crowding per dot
//!                 (parallel with the `parallel` feature).
//!   ④ Update    : for each dot in ascending DotId order:
//!                   partner check → roll status → eat / generate counters
//!                   → mate search and pairing → move → age
//!                 Pairing is mutual: the chosen mate is claimed for the
//!                 rest of the tick and joins the pair (Generating,
//!                 counter 1) instead of rolling on its own turn.
//!   ⑤ Births    : offspring queued in ④ get fresh ids and join the map.
//!   ⑥ Stats     : population peak; the tick counter advances.
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Computes step ③ on Rayon's thread pool.                |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use dots_core::DotConf;
//! use dots_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(42, DotConf::default(), 64, 64)
//!     .initial_dots(100)
//!     .build()?;
//! sim.run(1_000, &mut NoopObserver);
//! println!("{} alive after {}", sim.living_count(), sim.tick());
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;
pub mod spatial;
pub mod stats;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Simulator;
pub use spatial::Snapshot;
pub use stats::{SimStats, TickSummary};
