//! Fleets in their two roles.
//!
//! [`OwnFleet`] is ground truth: the seat that owns it resolves attacks
//! against it. [`ObservedFleet`] is the opponent's fleet as announced over
//! the wire; it is kept for display and never consulted for rulings.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::core::aircraft::{Aircraft, AircraftId};
use crate::core::common::{FleetError, PlacementError, Point};
use crate::core::config::FLEET_SIZE;
use crate::core::geometry::{check_placement, Orientation};
use crate::core::mask::CellMask;

/// Check count, bounds, disjointness, footprints and id uniqueness.
fn validate(aircraft: &[Aircraft]) -> Result<(), FleetError> {
    if aircraft.len() < FLEET_SIZE {
        return Err(FleetError::Incomplete {
            placed: aircraft.len(),
        });
    }
    if aircraft.len() > FLEET_SIZE {
        return Err(FleetError::Oversized {
            placed: aircraft.len(),
        });
    }
    let mut occupied = CellMask::new();
    for (i, a) in aircraft.iter().enumerate() {
        if aircraft[..i].iter().any(|b| b.id() == a.id()) {
            return Err(FleetError::DuplicateId(a.id()));
        }
        if !a.footprint_consistent() {
            return Err(FleetError::FootprintMismatch(a.id()));
        }
        check_placement(a.head(), a.orientation(), &occupied)?;
        occupied |= a.mask();
    }
    Ok(())
}

/// The authoritative fleet of a seat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnFleet {
    aircraft: Vec<Aircraft>,
}

impl OwnFleet {
    /// Wrap a list of aircraft after validating it as a complete fleet.
    pub fn try_from_aircraft(aircraft: Vec<Aircraft>) -> Result<Self, FleetError> {
        validate(&aircraft)?;
        Ok(Self { aircraft })
    }

    pub fn aircraft(&self) -> &[Aircraft] {
        &self.aircraft
    }

    pub fn get(&self, id: AircraftId) -> Option<&Aircraft> {
        self.aircraft.iter().find(|a| a.id() == id)
    }

    /// True once every aircraft has been shot down.
    pub fn is_eliminated(&self) -> bool {
        self.aircraft.iter().all(|a| !a.is_alive())
    }

    pub fn alive_count(&self) -> usize {
        self.aircraft.iter().filter(|a| a.is_alive()).count()
    }

    /// Cells covered by any aircraft.
    pub fn occupied(&self) -> CellMask {
        self.aircraft
            .iter()
            .fold(CellMask::new(), |acc, a| acc | a.mask())
    }

    /// Copy of the aircraft list, as announced to the opponent.
    pub fn snapshot(&self) -> Vec<Aircraft> {
        self.aircraft.clone()
    }

    pub(crate) fn aircraft_mut(&mut self) -> &mut [Aircraft] {
        &mut self.aircraft
    }
}

/// The opponent's fleet as received in its READY announcement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservedFleet {
    aircraft: Vec<Aircraft>,
}

impl ObservedFleet {
    /// Accept a snapshot from the peer. The peer is untrusted, so the
    /// snapshot is validated like a locally built fleet.
    pub fn from_snapshot(aircraft: Vec<Aircraft>) -> Result<Self, FleetError> {
        validate(&aircraft)?;
        Ok(Self { aircraft })
    }

    pub fn aircraft(&self) -> &[Aircraft] {
        &self.aircraft
    }
}

/// Per-seat fleet storage inside a match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FleetSlot {
    #[default]
    Empty,
    Own(OwnFleet),
    Observed(ObservedFleet),
}

impl FleetSlot {
    pub fn is_empty(&self) -> bool {
        matches!(self, FleetSlot::Empty)
    }

    /// Aircraft held in the slot, whatever its role.
    pub fn aircraft(&self) -> &[Aircraft] {
        match self {
            FleetSlot::Empty => &[],
            FleetSlot::Own(f) => f.aircraft(),
            FleetSlot::Observed(f) => f.aircraft(),
        }
    }

    pub fn as_own(&self) -> Option<&OwnFleet> {
        match self {
            FleetSlot::Own(f) => Some(f),
            _ => None,
        }
    }
}

/// Incremental placement of a fleet, one aircraft at a time.
#[derive(Debug, Clone, Default)]
pub struct FleetBuilder {
    aircraft: Vec<Aircraft>,
    occupied: CellMask,
    next_id: u32,
}

impl FleetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place the next aircraft. A rejected placement leaves the builder untouched.
    pub fn place(
        &mut self,
        head: Point,
        orientation: Orientation,
    ) -> Result<&Aircraft, PlacementError> {
        if self.is_complete() {
            return Err(PlacementError::FleetFull);
        }
        let aircraft = Aircraft::placed(AircraftId(self.next_id), head, orientation, &self.occupied)?;
        self.next_id += 1;
        self.occupied |= aircraft.mask();
        self.aircraft.push(aircraft);
        Ok(&self.aircraft[self.aircraft.len() - 1])
    }

    /// Take an aircraft back off the board.
    pub fn remove(&mut self, id: AircraftId) -> Option<Aircraft> {
        let idx = self.aircraft.iter().position(|a| a.id() == id)?;
        let removed = self.aircraft.remove(idx);
        self.occupied = self
            .aircraft
            .iter()
            .fold(CellMask::new(), |acc, a| acc | a.mask());
        Some(removed)
    }

    /// Remove every placed aircraft.
    pub fn clear(&mut self) {
        self.aircraft.clear();
        self.occupied = CellMask::new();
        self.next_id = 0;
    }

    pub fn placed(&self) -> &[Aircraft] {
        &self.aircraft
    }

    pub fn occupied(&self) -> &CellMask {
        &self.occupied
    }

    pub fn is_complete(&self) -> bool {
        self.aircraft.len() == FLEET_SIZE
    }

    /// Confirm the placement.
    pub fn finish(self) -> Result<OwnFleet, FleetError> {
        OwnFleet::try_from_aircraft(self.aircraft)
    }
}
