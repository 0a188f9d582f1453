//! Shared value types and error enums of the rules engine.

use core::fmt;

use crate::core::aircraft::AircraftId;
use crate::core::config::GRID_SIZE;

/// A board coordinate. Valid cells have `r` and `c` in `[0, GRID_SIZE)`;
/// footprints may temporarily hold off-board points, hence the signed type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub r: i32,
    pub c: i32,
}

impl Point {
    pub const fn new(r: i32, c: i32) -> Self {
        Self { r, c }
    }

    /// Whether the point lies on the board.
    pub fn in_bounds(&self) -> bool {
        (0..GRID_SIZE).contains(&self.r) && (0..GRID_SIZE).contains(&self.c)
    }

    /// Row-major cell index, `None` when off the board.
    pub fn index(&self) -> Option<usize> {
        if self.in_bounds() {
            Some((self.r * GRID_SIZE + self.c) as usize)
        } else {
            None
        }
    }

    /// Inverse of [`Point::index`].
    pub fn from_index(index: usize) -> Self {
        let i = index as i32;
        Self::new(i / GRID_SIZE, i % GRID_SIZE)
    }

    /// Every board cell in row-major order.
    pub fn all() -> impl Iterator<Item = Point> {
        (0..GRID_SIZE).flat_map(|r| (0..GRID_SIZE).map(move |c| Point::new(r, c)))
    }

    /// Translate by a row/column delta.
    pub fn offset(&self, dr: i32, dc: i32) -> Self {
        Self::new(self.r + dr, self.c + dc)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.r, self.c)
    }
}

/// One of the two seats of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    pub fn other(self) -> Self {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    /// 1 or 2, as shown to players and carried on the wire.
    pub fn number(self) -> u8 {
        match self {
            PlayerId::One => 1,
            PlayerId::Two => 2,
        }
    }

    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(PlayerId::One),
            2 => Some(PlayerId::Two),
            _ => None,
        }
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "player {}", self.number())
    }
}

/// What an attack revealed about one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum CellStatus {
    /// Nothing there.
    Empty,
    /// Body hit; the aircraft keeps flying.
    Injured,
    /// Head hit; the aircraft is destroyed.
    Dead,
}

/// Why a placement was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PlacementError {
    #[error("aircraft head {0} is off the board")]
    HeadOutOfBounds(Point),
    #[error("aircraft footprint has {0} body cells")]
    MalformedFootprint(usize),
    #[error("aircraft cell {0} is off the board")]
    OutOfBounds(Point),
    #[error("aircraft cell {0} overlaps another aircraft")]
    Overlaps(Point),
    #[error("all aircraft are already placed")]
    FleetFull,
}

/// Errors raised when assembling or validating a fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FleetError {
    #[error("fleet has {placed} aircraft, expected 3")]
    Incomplete { placed: usize },
    #[error("fleet has more than 3 aircraft ({placed})")]
    Oversized { placed: usize },
    #[error("aircraft id {0} is used twice")]
    DuplicateId(AircraftId),
    #[error("aircraft {0} carries a footprint that does not match its head and orientation")]
    FootprintMismatch(AircraftId),
    #[error("invalid placement: {0}")]
    Placement(#[from] PlacementError),
}

/// Errors raised by radar updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RadarError {
    #[error("cell {point} already recorded as {existing:?}")]
    AlreadyRecorded { point: Point, existing: CellStatus },
    #[error("cell {0} is off the board")]
    OutOfBounds(Point),
}
