//! Attack resolution against an authoritative fleet.

use crate::core::aircraft::AircraftId;
use crate::core::common::{CellStatus, Point};
use crate::core::fleet::OwnFleet;

/// Result of one shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttackOutcome {
    pub status: CellStatus,
    /// Aircraft destroyed by this shot, set only for `CellStatus::Dead`.
    pub killed: Option<AircraftId>,
}

/// Resolve a shot at `target` and return the outcome with the updated fleet.
///
/// Precedence: head of a live aircraft (`Dead`, the aircraft is shot down),
/// then body of a live aircraft (`Injured`, nothing changes), then `Empty`.
/// Destroyed aircraft are ignored entirely. Aircraft are scanned in fleet
/// order and the first match wins; footprints are disjoint, so at most one
/// can match. Recording the outcome on a radar and checking for elimination
/// is left to the caller.
pub fn resolve_attack(fleet: &OwnFleet, target: Point) -> (AttackOutcome, OwnFleet) {
    let mut updated = fleet.clone();

    if let Some(aircraft) = updated
        .aircraft_mut()
        .iter_mut()
        .find(|a| a.is_alive() && a.head() == target)
    {
        aircraft.shoot_down();
        let outcome = AttackOutcome {
            status: CellStatus::Dead,
            killed: Some(aircraft.id()),
        };
        return (outcome, updated);
    }

    let injured = fleet
        .aircraft()
        .iter()
        .any(|a| a.is_alive() && a.body().contains(&target));
    let status = if injured {
        CellStatus::Injured
    } else {
        CellStatus::Empty
    };
    (
        AttackOutcome {
            status,
            killed: None,
        },
        updated,
    )
}
