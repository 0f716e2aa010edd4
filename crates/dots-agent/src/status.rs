//! Closed enumerations describing what a dot is and what it is doing.

use std::fmt;

// ── DotStatus ─────────────────────────────────────────────────────────────────

/// Life-cycle state of a dot.
///
/// `Invalid` marks default-constructed or otherwise unused instances; it is
/// never produced by sampling.  The other six map one-to-one onto the slots
/// of a [`StatusCdf`](crate::StatusCdf).
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DotStatus {
    #[default]
    Invalid,
    Normal,
    Dead,
    Hungry,
    Looking,
    Eating,
    Generating,
}

impl DotStatus {
    /// Sampled statuses in CDF slot order.
    pub const SLOTS: [DotStatus; 6] = [
        DotStatus::Normal,
        DotStatus::Dead,
        DotStatus::Hungry,
        DotStatus::Looking,
        DotStatus::Eating,
        DotStatus::Generating,
    ];

    /// CDF slot of this status, `None` for `Invalid`.
    #[inline]
    pub fn slot(self) -> Option<usize> {
        Self::SLOTS.iter().position(|&s| s == self)
    }

    /// Status stored in CDF slot `i`.
    #[inline]
    pub fn from_slot(i: usize) -> Option<DotStatus> {
        Self::SLOTS.get(i).copied()
    }

    /// Neither dead nor a placeholder.
    #[inline]
    pub fn is_alive(self) -> bool {
        !matches!(self, DotStatus::Dead | DotStatus::Invalid)
    }

    /// Free to be approached by a mate.
    #[inline]
    pub fn is_available(self) -> bool {
        matches!(self, DotStatus::Normal | DotStatus::Looking)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DotStatus::Invalid    => "invalid",
            DotStatus::Normal     => "normal",
            DotStatus::Dead       => "dead",
            DotStatus::Hungry     => "hungry",
            DotStatus::Looking    => "looking",
            DotStatus::Eating     => "eating",
            DotStatus::Generating => "generating",
        }
    }
}

impl fmt::Display for DotStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── DotKind ───────────────────────────────────────────────────────────────────

/// The two dot types.  Fixed at creation; mates are always of opposite kind.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DotKind {
    Alpha,
    Beta,
}

impl DotKind {
    #[inline]
    pub fn opposite(self) -> DotKind {
        match self {
            DotKind::Alpha => DotKind::Beta,
            DotKind::Beta  => DotKind::Alpha,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DotKind::Alpha => "alpha",
            DotKind::Beta  => "beta",
        }
    }
}

impl fmt::Display for DotKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Direction ─────────────────────────────────────────────────────────────────

/// One of the four cardinal moves.  `y` grows downward.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Direction {
    Right,
    Up,
    Left,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Up,
        Direction::Left,
        Direction::Down,
    ];

    /// Uniform CDF over [`ALL`](Self::ALL), for random walks.
    pub const UNIFORM_CDF: [f64; 4] = [0.25, 0.5, 0.75, 1.0];

    #[inline]
    pub fn from_index(i: usize) -> Option<Direction> {
        Self::ALL.get(i).copied()
    }

    /// Unit cell offset `(dx, dy)`.
    #[inline]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Right => (1, 0),
            Direction::Up    => (0, -1),
            Direction::Left  => (-1, 0),
            Direction::Down  => (0, 1),
        }
    }

    /// Step along x towards a signed offset.
    #[inline]
    pub fn along_x(dx: i32) -> Direction {
        if dx > 0 { Direction::Right } else { Direction::Left }
    }

    /// Step along y towards a signed offset.
    #[inline]
    pub fn along_y(dy: i32) -> Direction {
        if dy > 0 { Direction::Down } else { Direction::Up }
    }
}
