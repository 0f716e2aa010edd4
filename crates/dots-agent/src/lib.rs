//! `dots-agent`: the simulated entity and its status model.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`status`]   | `DotStatus`, `DotKind`, `Direction`                        |
//! | [`cdf`]      | `transition_pdf`, `StatusCdf`, per-tick transition odds   |
//! | [`dot`]      | `Dot` (mutable state), `DotView` (read-only snapshot row)  |
//!
//! # Status model
//!
//! ```text
//!            hunger            density-dependent
//!   Normal ─────────► Hungry ──────────────────► Eating ──(eat_time)──► Normal
//!     │
//!     │ age-dependent look chance
//!     ▼
//!   Looking ──(meets a mate)──► Generating ──(generation_time)──► Normal
//!
//!   any status ──(age / death_scale)²──► Dead
//! ```
//!
//! Only the sampled edges live here.  Meeting a mate and finishing a
//! counter-driven sub-process are procedural and belong to the simulator.

pub mod cdf;
pub mod dot;
pub mod status;

#[cfg(test)]
mod tests;

pub use cdf::{STATUS_SLOTS, StatusCdf, death_hazard, transition_pdf};
pub use dot::{Dot, DotView};
pub use status::{Direction, DotKind, DotStatus};
