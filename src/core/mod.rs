//! Core air strike rules engine (no_std compatible)
//!
//! Pure game logic: geometry, fleets, radar, attack resolution, the match
//! state machine and the computer opponent's random choices. Needs only
//! `alloc`, `rand` and `log`.

pub mod ai;
pub mod aircraft;
pub mod attack;
pub mod common;
pub mod config;
pub mod fleet;
pub mod game;
pub mod geometry;
pub mod mask;
pub mod radar;

pub use ai::{generate_fleet, random_orientation, select_target};
pub use aircraft::{Aircraft, AircraftId};
pub use attack::{resolve_attack, AttackOutcome};
pub use common::{CellStatus, FleetError, PlacementError, PlayerId, Point, RadarError};
pub use config::*;
pub use fleet::{FleetBuilder, FleetSlot, ObservedFleet, OwnFleet};
pub use game::{Effect, Event, GameMode, GamePhase, MatchState, Notice, Step};
pub use geometry::{check_placement, compute_footprint, is_placement_valid, Orientation};
pub use mask::CellMask;
pub use radar::Radar;
