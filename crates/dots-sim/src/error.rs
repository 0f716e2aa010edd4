use dots_core::{DotsError, GridPos};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("invalid grid {width}x{height}: dimensions must be in 1..=i32::MAX")]
    InvalidGrid { width: u32, height: u32 },

    #[error("initial dot at {pos} lies outside the {width}x{height} grid")]
    PlacementOutOfBounds { pos: GridPos, width: u32, height: u32 },

    #[error(transparent)]
    Core(#[from] DotsError),
}

pub type SimResult<T> = Result<T, SimError>;
