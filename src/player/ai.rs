use log::warn;
use rand::rngs::SmallRng;

use crate::core::{
    ai,
    config::{FLEET_GENERATION_ROUNDS, FLEET_SIZE},
    FleetError, OwnFleet, Point, Radar,
};

use super::Player;

/// Computer player: random placement, uniform random targeting.
#[derive(Debug, Default, Clone, Copy)]
pub struct AiPlayer;

impl AiPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Player for AiPlayer {
    fn place_fleet(&mut self, rng: &mut SmallRng) -> Result<OwnFleet, FleetError> {
        let mut best = 0;
        for round in 0..FLEET_GENERATION_ROUNDS {
            let aircraft = ai::generate_fleet(rng);
            if aircraft.len() == FLEET_SIZE {
                return OwnFleet::try_from_aircraft(aircraft);
            }
            warn!(
                "fleet generation round {} placed only {} aircraft",
                round + 1,
                aircraft.len()
            );
            best = best.max(aircraft.len());
        }
        Err(FleetError::Incomplete { placed: best })
    }

    fn select_target(&mut self, rng: &mut SmallRng, radar: &Radar) -> Option<Point> {
        ai::select_target(rng, radar)
    }
}
