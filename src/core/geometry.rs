//! Aircraft footprint geometry and placement validation.
//!
//! An aircraft pointing `Up` looks like this, `H` being the head:
//!
//! ```text
//!     . . H . .
//!     B B B B B
//!     . . B . .
//!     . B B B .
//! ```
//!
//! The other orientations are rotations of the same shape.

use crate::core::common::{PlacementError, Point};
use crate::core::config::BODY_CELLS;
use crate::core::mask::CellMask;

/// Direction the aircraft's nose points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum Orientation {
    Up,
    Down,
    Left,
    Right,
}

impl Orientation {
    pub const ALL: [Orientation; 4] = [
        Orientation::Up,
        Orientation::Right,
        Orientation::Down,
        Orientation::Left,
    ];

    /// Next orientation a quarter turn clockwise.
    pub fn rotate_cw(self) -> Self {
        match self {
            Orientation::Up => Orientation::Right,
            Orientation::Right => Orientation::Down,
            Orientation::Down => Orientation::Left,
            Orientation::Left => Orientation::Up,
        }
    }

    /// Body offsets relative to the head.
    pub fn body_offsets(self) -> [(i32, i32); BODY_CELLS] {
        UP_OFFSETS.map(|(dr, dc)| match self {
            Orientation::Up => (dr, dc),
            Orientation::Down => (-dr, dc),
            Orientation::Left => (dc, dr),
            Orientation::Right => (dc, -dr),
        })
    }
}

/// Wing row, spine, tail row of an aircraft whose head is at the origin.
const UP_OFFSETS: [(i32, i32); BODY_CELLS] = [
    (1, -2),
    (1, -1),
    (1, 0),
    (1, 1),
    (1, 2),
    (2, 0),
    (3, -1),
    (3, 0),
    (3, 1),
];

/// Body cells of an aircraft with the given head and orientation.
/// The result may contain off-board points; bounds are checked separately.
pub fn compute_footprint(head: Point, orientation: Orientation) -> [Point; BODY_CELLS] {
    orientation
        .body_offsets()
        .map(|(dr, dc)| head.offset(dr, dc))
}

/// Validate a candidate placement against the board and already occupied cells.
pub fn check_placement(
    head: Point,
    orientation: Orientation,
    occupied: &CellMask,
) -> Result<(), PlacementError> {
    if !head.in_bounds() {
        return Err(PlacementError::HeadOutOfBounds(head));
    }
    let body = compute_footprint(head, orientation);
    if body.len() != BODY_CELLS {
        return Err(PlacementError::MalformedFootprint(body.len()));
    }
    let cells = core::iter::once(head).chain(body.iter().copied());
    for p in cells.clone() {
        if !p.in_bounds() {
            return Err(PlacementError::OutOfBounds(p));
        }
    }
    for p in cells {
        if occupied.contains(p) {
            return Err(PlacementError::Overlaps(p));
        }
    }
    Ok(())
}

/// Boolean form of [`check_placement`].
pub fn is_placement_valid(head: Point, orientation: Orientation, occupied: &CellMask) -> bool {
    check_placement(head, orientation, occupied).is_ok()
}
