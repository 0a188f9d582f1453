#![cfg(feature = "std")]

//! One side of an online match.
//!
//! A [`PeerSession`] owns the local [`MatchState`] and the channel to the
//! peer. Every inbound message is applied as one state transition, and the
//! effects of each transition are turned into outbound messages before the
//! next input is looked at.

use std::future::Future;
use std::mem;

use anyhow::anyhow;
use log::{debug, info, warn};
use rand::rngs::SmallRng;

use crate::core::{Effect, Event, GamePhase, MatchState, Notice, OwnFleet, PlayerId, Point};
use crate::player::Player;
use crate::sync::{from_wire, to_wire};
use crate::transport::Transport;

pub struct PeerSession {
    state: MatchState,
    transport: Box<dyn Transport>,
}

fn log_notice(notice: Notice) {
    match notice {
        Notice::ConnectionError => warn!("could not connect to the opponent"),
        Notice::OpponentDisconnected => warn!("opponent disconnected"),
    }
}

impl PeerSession {
    /// Session over an already open channel, playing as `seat`.
    pub fn new(transport: Box<dyn Transport>, seat: PlayerId) -> Self {
        Self {
            state: MatchState::online(seat),
            transport,
        }
    }

    /// Run the connecting phase around `connect`. A failed setup puts the
    /// match back in the lobby and reports the error.
    pub async fn establish<F>(seat: PlayerId, connect: F) -> anyhow::Result<Self>
    where
        F: Future<Output = anyhow::Result<Box<dyn Transport>>>,
    {
        let state = MatchState::new().apply(Event::BeginConnecting).state;
        match connect.await {
            Ok(transport) => Ok(Self {
                state: state.apply(Event::ConnectionOpened { seat }).state,
                transport,
            }),
            Err(e) => {
                let step = state.apply(Event::ConnectionFailed);
                for effect in step.effects {
                    if let Effect::Notify(n) = effect {
                        log_notice(n);
                    }
                }
                debug!("back in {:?}", step.state.phase());
                Err(e)
            }
        }
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    pub fn into_state(self) -> MatchState {
        self.state
    }

    pub fn seat(&self) -> PlayerId {
        self.state.seat()
    }

    /// Apply one event and carry out its effects. A failed send closes
    /// the match.
    pub async fn dispatch(&mut self, event: Event) -> anyhow::Result<Vec<Effect>> {
        let state = mem::take(&mut self.state);
        let step = state.apply(event);
        self.state = step.state;

        for effect in &step.effects {
            if let Some(msg) = to_wire(effect) {
                if let Err(e) = self.transport.send(msg).await {
                    self.state = mem::take(&mut self.state).apply(Event::ChannelClosed).state;
                    return Err(e);
                }
            } else if let Effect::Notify(n) = effect {
                log_notice(*n);
            }
        }
        Ok(step.effects)
    }

    /// Confirm the local fleet and announce it to the peer.
    pub async fn submit_fleet(&mut self, fleet: OwnFleet) -> anyhow::Result<()> {
        if self.state.phase() != GamePhase::PlacementP1 {
            warn!("fleet submitted in {:?}", self.state.phase());
        }
        self.dispatch(Event::FleetPlaced(fleet)).await?;
        Ok(())
    }

    /// Fire at the peer. Returns whether the attack was sent; it is not
    /// sent when it is not our turn, one is already in flight, or the cell
    /// was already attacked.
    pub async fn attack(&mut self, target: Point) -> anyhow::Result<bool> {
        let by = self.state.seat();
        self.dispatch(Event::Attack { by, target }).await?;
        Ok(self.state.pending_attack() == Some(target))
    }

    /// Receive one message and apply it. Returns the event it mapped to,
    /// if any. A receive error means the channel is gone: the match is
    /// closed and the error returned.
    pub async fn pump(&mut self) -> anyhow::Result<Option<Event>> {
        let msg = match self.transport.recv().await {
            Ok(msg) => msg,
            Err(e) => {
                debug!("receive failed: {}", e);
                self.dispatch(Event::ChannelClosed).await?;
                return Err(e);
            }
        };
        let event = from_wire(msg);
        if let Some(event) = &event {
            self.dispatch(event.clone()).await?;
        }
        Ok(event)
    }

    /// Drive a whole match with `player`. Ends in `GameOver`, or in
    /// `Disconnected` when the peer goes away first.
    pub async fn run(
        &mut self,
        player: &mut dyn Player,
        rng: &mut SmallRng,
    ) -> anyhow::Result<GamePhase> {
        match self.play(player, rng).await {
            Err(e) if self.state.phase() == GamePhase::Disconnected => {
                debug!("session ended: {}", e);
                Ok(GamePhase::Disconnected)
            }
            other => other,
        }
    }

    async fn play(
        &mut self,
        player: &mut dyn Player,
        rng: &mut SmallRng,
    ) -> anyhow::Result<GamePhase> {
        let seat = self.state.seat();
        if self.state.phase() == GamePhase::PlacementP1 {
            let fleet = player.place_fleet(rng)?;
            self.submit_fleet(fleet).await?;
            if self.state.phase() == GamePhase::WaitingForOpponent {
                info!("waiting for the opponent to place their fleet");
            }
        }

        while !self.state.is_terminal() {
            if self.state.is_my_turn() {
                let target = player
                    .select_target(rng, self.state.radar(seat))
                    .ok_or_else(|| anyhow!("{} has no target to attack", seat))?;
                if !self.attack(target).await? {
                    return Err(anyhow!("attack at {} was rejected", target));
                }
                continue;
            }

            match self.pump().await? {
                Some(Event::RemoteResult { target, .. }) => {
                    if let Some(status) = self.state.radar(seat).status(target) {
                        player.handle_attack_result(target, status);
                    }
                }
                Some(Event::RemoteAttack(target)) => {
                    if let Some(status) = self.state.radar(seat.other()).status(target) {
                        player.handle_incoming_attack(target, status);
                    }
                }
                _ => {}
            }
        }

        match self.state.winner() {
            Some(w) if w == seat => info!("{} won", seat),
            Some(w) => info!("{} lost to {}", seat, w),
            None => info!("match ended without a winner"),
        }
        Ok(self.state.phase())
    }
}
