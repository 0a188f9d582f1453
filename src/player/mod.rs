//! Player trait and implementations
//!
//! This module defines the Player trait and provides concrete implementations:
//! - AiPlayer: random placement and uniform random targeting
//! - CliPlayer: interactive command-line player

use crate::core::{CellStatus, FleetError, OwnFleet, PlayerId, Point, Radar};
use rand::rngs::SmallRng;

/// Interface implemented by different player types.
///
/// A Player is responsible for:
/// - Placing its fleet
/// - Selecting targets to attack
/// - Reacting to feedback about its own and the opponent's shots
///
/// Drivers submit whatever a player returns to the match state machine,
/// which has the final word on legality.
pub trait Player: Send {
    /// Produce a complete fleet of three aircraft.
    fn place_fleet(&mut self, rng: &mut SmallRng) -> Result<OwnFleet, FleetError>;

    /// Choose the next target given what is known about the enemy board.
    /// `None` means the player has nothing left to fire at, or gave up.
    fn select_target(&mut self, rng: &mut SmallRng, radar: &Radar) -> Option<Point>;

    /// Inform the player of the result of its last attack.
    fn handle_attack_result(&mut self, _target: Point, _status: CellStatus) {}

    /// Inform the player of an opponent attack against its fleet.
    fn handle_incoming_attack(&mut self, _target: Point, _status: CellStatus) {}

    /// The shared device is being handed to `next`.
    fn handoff(&mut self, _next: PlayerId) {}
}

// Re-export implementations
pub mod ai;
pub use ai::AiPlayer;

#[cfg(feature = "std")]
pub mod cli;
#[cfg(feature = "std")]
pub use cli::CliPlayer;
