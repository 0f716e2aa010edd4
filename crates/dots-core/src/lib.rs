//! `dots-core`: foundational types for the `dots` population simulator.
//!
//! This crate is a dependency of every other `dots-*` crate.  It has no
//! `dots-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                                                |
//! |---------------|---------------------------------------------------------|
//! | [`ids`]       | `DotId`                                                 |
//! | [`tick`]      | `Tick`                                                  |
//! | [`grid`]      | `Grid`, `GridPos`, toroidal distance and wrapping       |
//! | [`sampler`]   | `pdf_to_cdf`, `sample_index`                            |
//! | [`rng`]       | `SimRng`, the single seeded stream of a run             |
//! | [`gauss`]     | `GaussTable`, precomputed Gaussian mass by index        |
//! | [`config`]    | `DotParams`, `DotConf`                                  |
//! | [`error`]     | `DotsError`, `DotsResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to plain-data public types. |

pub mod config;
pub mod error;
pub mod gauss;
pub mod grid;
pub mod ids;
pub mod rng;
pub mod sampler;
pub mod tick;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{DotConf, DotParams, MAX_DEATH_SCALE};
pub use error::{DotsError, DotsResult};
pub use gauss::GaussTable;
pub use grid::{Grid, GridPos};
pub use ids::DotId;
pub use rng::SimRng;
pub use sampler::{pdf_to_cdf, sample_index};
pub use tick::Tick;
