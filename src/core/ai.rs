// Random placement and targeting for the computer opponent.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use rand::Rng;

use crate::core::aircraft::{Aircraft, AircraftId};
use crate::core::common::Point;
use crate::core::config::{FLEET_SIZE, GRID_SIZE, PLACEMENT_ATTEMPTS};
use crate::core::geometry::{is_placement_valid, Orientation};
use crate::core::mask::CellMask;
use crate::core::radar::Radar;

/// Uniformly random orientation.
pub fn random_orientation<R: Rng + ?Sized>(rng: &mut R) -> Orientation {
    Orientation::ALL[rng.random_range(0..Orientation::ALL.len())]
}

/// Sample random heads and orientations until a full fleet is placed or
/// `PLACEMENT_ATTEMPTS` samples are spent. May return fewer than
/// `FLEET_SIZE` aircraft; callers decide how to handle that.
pub fn generate_fleet<R: Rng + ?Sized>(rng: &mut R) -> Vec<Aircraft> {
    let mut aircraft: Vec<Aircraft> = Vec::with_capacity(FLEET_SIZE);
    let mut occupied = CellMask::new();
    let mut attempts = 0;
    while aircraft.len() < FLEET_SIZE && attempts < PLACEMENT_ATTEMPTS {
        attempts += 1;
        let head = Point::new(rng.random_range(0..GRID_SIZE), rng.random_range(0..GRID_SIZE));
        let orientation = random_orientation(rng);
        if is_placement_valid(head, orientation, &occupied) {
            let a = Aircraft::new(AircraftId(aircraft.len() as u32), head, orientation);
            occupied |= a.mask();
            aircraft.push(a);
        }
    }
    if aircraft.len() < FLEET_SIZE {
        log::debug!(
            "fleet generation stopped after {} attempts with {} aircraft",
            attempts,
            aircraft.len()
        );
    }
    aircraft
}

/// Pick a cell uniformly among those absent from `radar`.
/// Returns `None` once every cell has been tried.
pub fn select_target<R: Rng + ?Sized>(rng: &mut R, radar: &Radar) -> Option<Point> {
    let untried = radar.untried_cells();
    if untried.is_empty() {
        return None;
    }
    Some(untried[rng.random_range(0..untried.len())])
}
