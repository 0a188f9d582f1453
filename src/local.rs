#![cfg(feature = "std")]

//! Driver for matches played on one device: pass-and-play and vs-AI.

use std::mem;

use anyhow::anyhow;
use log::{debug, info};
use rand::rngs::SmallRng;

use crate::core::{Effect, Event, GamePhase, MatchState, OwnFleet, PlayerId};
use crate::player::Player;
use crate::settings::Settings;

pub struct LocalMatch {
    state: MatchState,
    settings: Settings,
}

impl LocalMatch {
    /// Two humans sharing the device.
    pub fn pass_and_play(settings: Settings) -> Self {
        Self {
            state: MatchState::new().apply(Event::StartLocal).state,
            settings,
        }
    }

    /// Seat one against the computer, whose fleet is placed up front.
    pub fn vs_ai(ai_fleet: OwnFleet, settings: Settings) -> Self {
        Self {
            state: MatchState::new().apply(Event::StartVsAi(ai_fleet)).state,
            settings,
        }
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Apply one event, returning its effects.
    pub fn dispatch(&mut self, event: Event) -> Vec<Effect> {
        let step = mem::take(&mut self.state).apply(event);
        self.state = step.state;
        step.effects
    }

    /// Play the match to the end and return the winner. `p2` only places
    /// a fleet in pass-and-play; against the computer its fleet was
    /// given to [`LocalMatch::vs_ai`].
    pub async fn run(
        &mut self,
        p1: &mut dyn Player,
        p2: &mut dyn Player,
        rng: &mut SmallRng,
    ) -> anyhow::Result<PlayerId> {
        loop {
            match self.state.phase() {
                GamePhase::GameOver => {
                    return self
                        .state
                        .winner()
                        .ok_or_else(|| anyhow!("match over without a winner"));
                }
                GamePhase::PlacementP1 => {
                    let fleet = p1.place_fleet(rng)?;
                    self.dispatch(Event::FleetPlaced(fleet));
                }
                GamePhase::PlacementP2 => {
                    let fleet = p2.place_fleet(rng)?;
                    self.dispatch(Event::FleetPlaced(fleet));
                }
                GamePhase::Transition => {
                    let next = self.state.next_to_act();
                    match next {
                        PlayerId::One => p1.handoff(next),
                        PlayerId::Two => p2.handoff(next),
                    }
                    self.dispatch(Event::AcknowledgeTransition);
                }
                GamePhase::Battle => {
                    let by = self.state.current_player();
                    let (attacker, defender): (&mut dyn Player, &mut dyn Player) = match by {
                        PlayerId::One => (&mut *p1, &mut *p2),
                        PlayerId::Two => (&mut *p2, &mut *p1),
                    };
                    let target = attacker
                        .select_target(rng, self.state.radar(by))
                        .ok_or_else(|| anyhow!("{} has no target to attack", by))?;

                    let known = self.state.radar(by).len();
                    let effects = self.dispatch(Event::Attack { by, target });
                    let status = match self.state.radar(by).status(target) {
                        Some(status) if self.state.radar(by).len() > known => status,
                        _ => return Err(anyhow!("attack by {} at {} was rejected", by, target)),
                    };
                    attacker.handle_attack_result(target, status);
                    defender.handle_incoming_attack(target, status);

                    if effects.contains(&Effect::AiTurnDue) {
                        debug!("computer moves in {:?}", self.settings.ai_delay);
                        tokio::time::sleep(self.settings.ai_delay).await;
                    }
                }
                phase => return Err(anyhow!("local match cannot continue from {:?}", phase)),
            }
            if self.state.phase() == GamePhase::GameOver {
                info!("{:?} match finished", self.state.mode());
            }
        }
    }
}
