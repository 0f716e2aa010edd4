//! Spatial queries against the per-tick snapshot.
//!
//! Every query here is a linear scan: the populations this model produces
//! are small, and a scan in ascending id order keeps tie-breaking explicit.

use dots_agent::{Direction, Dot, DotKind};
use dots_core::{DotId, Grid, GridPos};

// ── Snapshot ──────────────────────────────────────────────────────────────────

/// Immutable value copy of the population taken at the start of a tick.
///
/// Dots are stored in ascending id order, so lookups are a binary search and
/// iteration order is the update order.
#[derive(Clone, Debug, Default)]
pub struct Snapshot {
    dots: Vec<Dot>,
}

impl Snapshot {
    /// Capture from an id-ordered iterator of dots.
    pub fn capture<'a, I>(dots: I) -> Self
    where
        I: IntoIterator<Item = &'a Dot>,
    {
        let dots: Vec<Dot> = dots.into_iter().cloned().collect();
        debug_assert!(dots.windows(2).all(|w| w[0].id() < w[1].id()));
        Self { dots }
    }

    pub fn get(&self, id: DotId) -> Option<&Dot> {
        self.dots
            .binary_search_by_key(&id, Dot::id)
            .ok()
            .map(|i| &self.dots[i])
    }

    #[inline]
    pub fn as_slice(&self) -> &[Dot] {
        &self.dots
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Dot> {
        self.dots.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.dots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.dots.is_empty()
    }
}

// ── Queries ───────────────────────────────────────────────────────────────────

/// Inverse-square crowding around `dot`: `Σ coeff / d²` over every other dot.
///
/// A neighbour sharing the cell contributes an infinite term, which drives
/// the chance to eat to zero.  A zero coefficient yields zero density.
pub fn local_density(dot: &Dot, snapshot: &Snapshot, grid: &Grid, coeff: f64) -> f64 {
    if coeff == 0.0 {
        return 0.0;
    }
    snapshot
        .iter()
        .filter(|other| other.id() != dot.id())
        .map(|other| coeff / grid.dist_sqr(dot.pos(), other.pos()) as f64)
        .sum()
}

/// Nearest dot of the opposite kind that is free to mate (`Normal` or
/// `Looking`), with its squared distance.
///
/// Ties go to the lowest id.
pub fn nearest_mate<'s>(dot: &Dot, snapshot: &'s Snapshot, grid: &Grid) -> Option<(&'s Dot, u64)> {
    nearest_mate_where(dot, snapshot, grid, |_| true)
}

/// [`nearest_mate`] restricted to candidates whose id passes `eligible`.
pub fn nearest_mate_where<'s, F>(
    dot:      &Dot,
    snapshot: &'s Snapshot,
    grid:     &Grid,
    eligible: F,
) -> Option<(&'s Dot, u64)>
where
    F: Fn(DotId) -> bool,
{
    let wanted = dot.kind().opposite();
    let mut best: Option<(&Dot, u64)> = None;
    for other in snapshot.iter() {
        if other.id() == dot.id() || other.kind() != wanted || !other.status().is_available() {
            continue;
        }
        if !eligible(other.id()) {
            continue;
        }
        let d2 = grid.dist_sqr(dot.pos(), other.pos());
        if best.is_none_or(|(_, bd)| d2 < bd) {
            best = Some((other, d2));
        }
    }
    best
}

/// First move on the way from `from` to `to`, `None` when already there.
///
/// The axis with the larger toroidal offset goes first; on equal offsets
/// Alpha moves along x and Beta along y.
pub fn approach(grid: &Grid, from: GridPos, to: GridPos, kind: DotKind) -> Option<Direction> {
    let (dx, dy) = grid.offset(from, to);
    if dx == 0 && dy == 0 {
        return None;
    }
    let (ax, ay) = (dx.unsigned_abs(), dy.unsigned_abs());
    let along_x = match ax.cmp(&ay) {
        std::cmp::Ordering::Greater => true,
        std::cmp::Ordering::Less    => false,
        std::cmp::Ordering::Equal   => kind == DotKind::Alpha,
    };
    Some(if along_x {
        Direction::along_x(dx)
    } else {
        Direction::along_y(dy)
    })
}
