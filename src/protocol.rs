#![cfg(feature = "std")]

use serde::{Deserialize, Serialize};

use crate::core::{Aircraft, AircraftId, CellStatus};

/// Messages exchanged between the two peers of an online match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Message {
    /// Sent once when a side confirms its placement.
    Ready { planes: Vec<Aircraft> },
    /// Fire at the receiver's fleet.
    Attack { r: i32, c: i32 },
    /// The receiver's answer to an `Attack`, same coordinates.
    Result {
        r: i32,
        c: i32,
        status: CellStatus,
        killed_plane_id: Option<AircraftId>,
    },
    /// Turn hint. Kept for wire compatibility; receivers ignore it.
    SyncTurn { next_player: u8 },
}
