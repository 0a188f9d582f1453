//! A single aircraft: head, orientation, frozen footprint and alive flag.

use core::fmt;

use crate::core::common::{PlacementError, Point};
use crate::core::config::BODY_CELLS;
use crate::core::geometry::{check_placement, compute_footprint, Orientation};
use crate::core::mask::CellMask;

/// Identity of an aircraft, unique within its fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(transparent))]
pub struct AircraftId(pub u32);

impl fmt::Display for AircraftId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// An aircraft placed on a board. It never moves; the only mutable part is
/// the alive flag, which flips once when the head is hit.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Aircraft {
    id: AircraftId,
    head: Point,
    orientation: Orientation,
    body: [Point; BODY_CELLS],
    alive: bool,
}

impl Aircraft {
    /// Create an aircraft, deriving its footprint. No bounds checks.
    pub fn new(id: AircraftId, head: Point, orientation: Orientation) -> Self {
        Self {
            id,
            head,
            orientation,
            body: compute_footprint(head, orientation),
            alive: true,
        }
    }

    /// Create an aircraft only if it fits the board and avoids `occupied`.
    pub fn placed(
        id: AircraftId,
        head: Point,
        orientation: Orientation,
        occupied: &CellMask,
    ) -> Result<Self, PlacementError> {
        check_placement(head, orientation, occupied)?;
        Ok(Self::new(id, head, orientation))
    }

    pub fn id(&self) -> AircraftId {
        self.id
    }

    pub fn head(&self) -> Point {
        self.head
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn body(&self) -> &[Point; BODY_CELLS] {
        &self.body
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Head followed by the body cells.
    pub fn cells(&self) -> impl Iterator<Item = Point> + '_ {
        core::iter::once(self.head).chain(self.body.iter().copied())
    }

    pub fn occupies(&self, p: Point) -> bool {
        self.head == p || self.body.contains(&p)
    }

    /// Occupancy mask of head and body.
    pub fn mask(&self) -> CellMask {
        CellMask::from_points(self.cells())
    }

    /// True when the stored body matches what head and orientation imply.
    pub fn footprint_consistent(&self) -> bool {
        self.body == compute_footprint(self.head, self.orientation)
    }

    pub(crate) fn shoot_down(&mut self) {
        self.alive = false;
    }
}
