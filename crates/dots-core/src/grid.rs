//! Toroidal grid geometry.
//!
//! The world is a fixed `width × height` lattice whose edges wrap.  Every
//! distance in the simulator is the shortest path around the torus, so two
//! dots on opposite borders are neighbours.

use std::fmt;

use crate::{DotsError, DotsResult};

/// An integer cell coordinate.
///
/// Signed so that a one-cell nudge off the low edge is representable before
/// [`Grid::wrap`] folds it back into bounds.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridPos {
    pub x: i32,
    pub y: i32,
}

impl GridPos {
    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for GridPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Dimensions of the toroidal world.  Immutable for the duration of a run.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    width:  i32,
    height: i32,
}

impl Grid {
    /// Create a grid.  Both dimensions must be in `1..=i32::MAX`.
    pub fn new(width: u32, height: u32) -> DotsResult<Self> {
        let w = i32::try_from(width).ok().filter(|&w| w > 0);
        let h = i32::try_from(height).ok().filter(|&h| h > 0);
        match (w, h) {
            (Some(width), Some(height)) => Ok(Self { width, height }),
            _ => Err(DotsError::Config(format!(
                "grid dimensions must be in 1..={}, got {width}x{height}",
                i32::MAX
            ))),
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width as u32
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height as u32
    }

    /// Number of cells.
    #[inline]
    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    #[inline]
    pub fn contains(&self, pos: GridPos) -> bool {
        (0..self.width).contains(&pos.x) && (0..self.height).contains(&pos.y)
    }

    /// Fold any coordinate back into `[0,w)×[0,h)`.
    #[inline]
    pub fn wrap(&self, pos: GridPos) -> GridPos {
        GridPos {
            x: pos.x.rem_euclid(self.width),
            y: pos.y.rem_euclid(self.height),
        }
    }

    /// Shortest signed offset `(dx, dy)` that leads from `from` to `to`
    /// around the torus.
    ///
    /// When both ways round are equally long (even dimension, opposite
    /// sides) the positive direction is returned.
    pub fn offset(&self, from: GridPos, to: GridPos) -> (i32, i32) {
        (
            axis_offset(from.x, to.x, self.width),
            axis_offset(from.y, to.y, self.height),
        )
    }

    /// Squared toroidal distance between two cells.
    pub fn dist_sqr(&self, a: GridPos, b: GridPos) -> u64 {
        let (dx, dy) = self.offset(a, b);
        let (dx, dy) = (dx.unsigned_abs() as u64, dy.unsigned_abs() as u64);
        dx * dx + dy * dy
    }
}

fn axis_offset(from: i32, to: i32, size: i32) -> i32 {
    let d = (to as i64 - from as i64).rem_euclid(size as i64);
    let d = if d > size as i64 / 2 { d - size as i64 } else { d };
    d as i32
}
